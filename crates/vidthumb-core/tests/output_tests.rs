use std::path::Path;

use vidthumb_core::format::ImageFormat;
use vidthumb_core::output::resolve_output_path;

#[test]
fn test_explicit_path_with_matching_extension_is_verbatim() {
    let out = resolve_output_path(
        Some("clip.mp4"),
        Some(Path::new("/out/custom.jpg")),
        Path::new("/tmp"),
        ImageFormat::Jpeg,
    );
    assert_eq!(out, Path::new("/out/custom.jpg"));
}

#[test]
fn test_explicit_path_without_extension_is_a_directory() {
    let out = resolve_output_path(
        Some("clip.mp4"),
        Some(Path::new("/out/thumbs")),
        Path::new("/tmp"),
        ImageFormat::Png,
    );
    assert_eq!(out, Path::new("/out/thumbs/clip.png"));
}

#[test]
fn test_explicit_path_with_wrong_extension_is_a_directory() {
    // A .png path requested as JPEG does not match and is treated as a dir.
    let out = resolve_output_path(
        Some("clip.mp4"),
        Some(Path::new("/out/pic.png")),
        Path::new("/tmp"),
        ImageFormat::Jpeg,
    );
    assert_eq!(out, Path::new("/out/pic.png/clip.jpg"));
}

#[test]
fn test_no_explicit_path_uses_default_dir() {
    let out = resolve_output_path(
        Some("clip.mp4"),
        None,
        Path::new("/var/cache/vidthumb"),
        ImageFormat::Webp,
    );
    assert_eq!(out, Path::new("/var/cache/vidthumb/clip.webp"));
}

#[test]
fn test_source_extension_is_substituted() {
    let out = resolve_output_path(
        Some("movie.v2.mkv"),
        None,
        Path::new("/tmp"),
        ImageFormat::Jpeg,
    );
    // Only the last extension is swapped.
    assert_eq!(out, Path::new("/tmp/movie.v2.jpg"));
}

#[test]
fn test_extension_is_appended_when_source_has_none() {
    let out = resolve_output_path(Some("clip"), None, Path::new("/tmp"), ImageFormat::Png);
    assert_eq!(out, Path::new("/tmp/clip.png"));
}

#[test]
fn test_underivable_name_gets_generated_one() {
    let out = resolve_output_path(None, None, Path::new("/tmp"), ImageFormat::Jpeg);
    let name = out.file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with(".jpg"), "generated name was {name}");
    // Hyphenated UUID stem plus ".jpg".
    assert_eq!(name.len(), 36 + 4);
    assert_eq!(out.parent(), Some(Path::new("/tmp")));
}

#[test]
fn test_generated_names_are_unique() {
    let a = resolve_output_path(None, None, Path::new("/tmp"), ImageFormat::Jpeg);
    let b = resolve_output_path(None, None, Path::new("/tmp"), ImageFormat::Jpeg);
    assert_ne!(a, b);
}
