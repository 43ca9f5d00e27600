//! Validates library construction and nearest-neighbor matching

use image::{Rgb, RgbImage};
use std::path::PathBuf;
use tilemosaic::MosaicError;
use tilemosaic::feature::{FeatureVector, Strategy};
use tilemosaic::io::progress::Reporter;
use tilemosaic::io::staging::Staging;
use tilemosaic::library::{ThumbnailRef, TileLibrary, build_library, find_nearest};

fn write_solid_png(dir: &std::path::Path, name: &str, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(40, 40, Rgb(color)).save(&path).unwrap();
    path
}

#[test]
fn test_build_skips_undecodable_entries() {
    let stash = tempfile::tempdir().unwrap();
    write_solid_png(stash.path(), "red.png", [255, 0, 0]);
    std::fs::write(stash.path().join("notes.txt"), "not an image").unwrap();

    let staging = Staging::new().unwrap();
    let library = build_library(
        stash.path(),
        Strategy::Average,
        (10, 10),
        None,
        &staging,
        &Reporter::new(false),
    )
    .unwrap();

    assert_eq!(library.len(), 1);
}

#[test]
fn test_build_normalizes_thumbnails_to_exact_size() {
    let stash = tempfile::tempdir().unwrap();
    write_solid_png(stash.path(), "green.png", [0, 200, 0]);

    let staging = Staging::new().unwrap();
    let library = build_library(
        stash.path(),
        Strategy::Dominant,
        (7, 5),
        None,
        &staging,
        &Reporter::new(false),
    )
    .unwrap();

    let (_, thumbnail) = library.iter().next().unwrap();
    let staged = image::open(thumbnail.path()).unwrap().to_rgb8();
    assert_eq!((staged.width(), staged.height()), (7, 5));
}

#[test]
fn test_build_caps_successes_at_max_images() {
    let stash = tempfile::tempdir().unwrap();
    write_solid_png(stash.path(), "a.png", [255, 0, 0]);
    write_solid_png(stash.path(), "b.png", [0, 255, 0]);
    write_solid_png(stash.path(), "c.png", [0, 0, 255]);

    let staging = Staging::new().unwrap();
    let library = build_library(
        stash.path(),
        Strategy::Average,
        (10, 10),
        Some(2),
        &staging,
        &Reporter::new(false),
    )
    .unwrap();

    assert_eq!(library.len(), 2);
}

#[test]
fn test_equal_features_keep_the_later_candidate() {
    let stash = tempfile::tempdir().unwrap();
    write_solid_png(stash.path(), "a.png", [255, 0, 0]);
    write_solid_png(stash.path(), "b.png", [255, 0, 0]);

    let staging = Staging::new().unwrap();
    let library = build_library(
        stash.path(),
        Strategy::Average,
        (10, 10),
        None,
        &staging,
        &Reporter::new(false),
    )
    .unwrap();

    // Same solid color, same feature vector: b.png overwrites a.png
    assert_eq!(library.len(), 1);
    let (_, thumbnail) = library.iter().next().unwrap();
    let name = thumbnail.path().file_name().unwrap().to_string_lossy().to_string();
    assert!(name.contains("-b."), "expected later candidate, got {name}");
}

#[test]
fn test_find_nearest_returns_minimal_distance_entry() {
    let mut library = TileLibrary::new();
    library.insert(
        FeatureVector::new(0.0, 0.0, 0.0),
        ThumbnailRef::new(PathBuf::from("dark")),
    );
    library.insert(
        FeatureVector::new(120.0, 120.0, 120.0),
        ThumbnailRef::new(PathBuf::from("gray")),
    );
    library.insert(
        FeatureVector::new(255.0, 255.0, 255.0),
        ThumbnailRef::new(PathBuf::from("light")),
    );

    let query = FeatureVector::new(100.0, 110.0, 130.0);
    let matched = find_nearest(&query, &library).unwrap();
    assert_eq!(matched.path(), PathBuf::from("gray"));
}

#[test]
fn test_find_nearest_returns_exact_match_at_distance_zero() {
    let mut library = TileLibrary::new();
    library.insert(
        FeatureVector::new(10.0, 20.0, 30.0),
        ThumbnailRef::new(PathBuf::from("exact")),
    );
    library.insert(
        FeatureVector::new(10.0, 20.0, 31.0),
        ThumbnailRef::new(PathBuf::from("near")),
    );

    let query = FeatureVector::new(10.0, 20.0, 30.0);
    let matched = find_nearest(&query, &library).unwrap();
    assert_eq!(matched.path(), PathBuf::from("exact"));
}

#[test]
fn test_find_nearest_ties_keep_the_earliest_entry() {
    let mut library = TileLibrary::new();
    library.insert(
        FeatureVector::new(0.0, 0.0, 0.0),
        ThumbnailRef::new(PathBuf::from("first")),
    );
    library.insert(
        FeatureVector::new(20.0, 0.0, 0.0),
        ThumbnailRef::new(PathBuf::from("second")),
    );

    // Equidistant query; the earlier entry wins
    let query = FeatureVector::new(10.0, 0.0, 0.0);
    let matched = find_nearest(&query, &library).unwrap();
    assert_eq!(matched.path(), PathBuf::from("first"));
}

#[test]
fn test_find_nearest_fails_on_empty_library() {
    let library = TileLibrary::new();
    let query = FeatureVector::new(0.0, 0.0, 0.0);
    let result = find_nearest(&query, &library);
    assert!(matches!(result, Err(MosaicError::EmptyLibrary)));
}

#[test]
fn test_insert_replaces_value_in_place() {
    let mut library = TileLibrary::new();
    let key = FeatureVector::new(1.0, 2.0, 3.0);
    library.insert(key, ThumbnailRef::new(PathBuf::from("old")));
    library.insert(
        FeatureVector::new(9.0, 9.0, 9.0),
        ThumbnailRef::new(PathBuf::from("other")),
    );
    library.insert(key, ThumbnailRef::new(PathBuf::from("new")));

    assert_eq!(library.len(), 2);
    let (_, first) = library.iter().next().unwrap();
    assert_eq!(first.path(), PathBuf::from("new"));
}
