//! Input/output operations, diagnostics, and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Output and staging configuration constants
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// Verbosity-gated diagnostics and progress display
pub mod progress;
/// Scoped staging area for intermediate artifacts
pub mod staging;
