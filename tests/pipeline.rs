//! End-to-end pipeline scenarios against real temp directories.

use photo_renumber::classify::ProtectedRange;
use photo_renumber::config::RenumberConfig;
use photo_renumber::pipeline;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn image_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|n| n != "manifest.js" && !n.starts_with('.'))
        .collect();
    names.sort();
    names
}

#[test]
fn mixed_directory_allocates_around_reserved_numbers() {
    // {5.jpg, vacation.png, beach.jpg, 20.webp}, floor 20:
    // reserved {5, 20}; candidates sorted naturally; 20 is skipped.
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "5.jpg", "five");
    touch(tmp.path(), "vacation.png", "vacation");
    touch(tmp.path(), "beach.jpg", "beach");
    touch(tmp.path(), "20.webp", "twenty");

    let config = RenumberConfig::default();
    let summary = pipeline::run(tmp.path(), &config).unwrap();

    assert_eq!(
        image_names(tmp.path()),
        vec!["20.webp", "21.jpg", "22.png", "5.jpg"]
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("21.jpg")).unwrap(),
        "beach"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("22.png")).unwrap(),
        "vacation"
    );

    assert_eq!(summary.protected, 1);
    assert_eq!(summary.already_numbered, 1);
    assert_eq!(summary.renames.len(), 2);
    assert_eq!(summary.renames[0].from, "beach.jpg");
    assert_eq!(summary.renames[1].from, "vacation.png");
}

#[test]
fn protected_files_are_byte_identical() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "1.png", "one");
    touch(tmp.path(), "19.jpg", "nineteen");
    touch(tmp.path(), "beach.jpg", "beach");

    let config = RenumberConfig::default();
    pipeline::run(tmp.path(), &config).unwrap();

    assert_eq!(fs::read_to_string(tmp.path().join("1.png")).unwrap(), "one");
    assert_eq!(
        fs::read_to_string(tmp.path().join("19.jpg")).unwrap(),
        "nineteen"
    );
}

#[test]
fn final_numeric_names_have_no_duplicates() {
    let tmp = TempDir::new().unwrap();
    for name in ["5.jpg", "20.jpg", "a.jpg", "b.png", "c.webp", "d.jpg"] {
        touch(tmp.path(), name, name);
    }

    let config = RenumberConfig::default();
    pipeline::run(tmp.path(), &config).unwrap();

    let mut numbers: Vec<u32> = image_names(tmp.path())
        .iter()
        .filter_map(|n| n.split('.').next().and_then(|s| s.parse().ok()))
        .collect();
    let before = numbers.len();
    numbers.sort_unstable();
    numbers.dedup();
    assert_eq!(numbers.len(), before);
}

#[test]
fn second_run_renames_nothing() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "5.jpg", "five");
    touch(tmp.path(), "beach.jpg", "beach");
    touch(tmp.path(), "vacation.png", "vacation");

    let config = RenumberConfig::default();
    let first = pipeline::run(tmp.path(), &config).unwrap();
    assert_eq!(first.renames.len(), 2);

    let after_first = image_names(tmp.path());
    let second = pipeline::run(tmp.path(), &config).unwrap();

    assert!(second.renames.is_empty());
    assert_eq!(image_names(tmp.path()), after_first);
    assert_eq!(second.manifest_entries, first.manifest_entries);
}

#[test]
fn image_extension_manifest_name_stays_idempotent() {
    // A manifest named like an image is legal config. It must be excluded
    // by name, not extension, or the second run renumbers its own output.
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "beach.jpg", "beach");

    let config = RenumberConfig {
        manifest_file: "gallery.jpg".to_string(),
        ..RenumberConfig::default()
    };
    let first = pipeline::run(tmp.path(), &config).unwrap();
    assert_eq!(first.renames.len(), 1);
    assert_eq!(first.manifest_entries, 1);
    assert!(tmp.path().join("gallery.jpg").exists());

    let second = pipeline::run(tmp.path(), &config).unwrap();
    assert!(second.renames.is_empty());
    assert_eq!(second.manifest_entries, 1);

    let manifest = fs::read_to_string(tmp.path().join("gallery.jpg")).unwrap();
    assert!(manifest.contains("{ src: \"20.jpg\", label: \"image\" },"));
    assert!(!manifest.contains("gallery.jpg"));
}

#[test]
fn manifest_lists_numeric_names_ascending() {
    // {3.jpg, 1.png, IMG_A.jpg} → final {1.png, 3.jpg, 20.jpg},
    // manifest order [1.png, 3.jpg, 20.jpg].
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "3.jpg", "three");
    touch(tmp.path(), "1.png", "one");
    touch(tmp.path(), "IMG_A.jpg", "img-a");

    let config = RenumberConfig::default();
    pipeline::run(tmp.path(), &config).unwrap();

    let manifest = fs::read_to_string(tmp.path().join("manifest.js")).unwrap();
    let srcs: Vec<&str> = manifest
        .lines()
        .filter(|l| l.contains("src:"))
        .collect();
    assert_eq!(srcs.len(), 3);
    assert!(srcs[0].contains("\"1.png\""));
    assert!(srcs[1].contains("\"3.jpg\""));
    assert!(srcs[2].contains("\"20.jpg\""));

    assert!(manifest.starts_with("// Generated by photo-renumber on "));
    assert!(manifest.contains("export const images = ["));
}

#[test]
fn zero_padding_applies_end_to_end() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "beach.jpg", "beach");

    let config = RenumberConfig {
        zero_pad_width: 3,
        ..RenumberConfig::default()
    };
    pipeline::run(tmp.path(), &config).unwrap();

    assert!(tmp.path().join("020.jpg").exists());

    // Padded names still parse to the same number: a second run is a no-op.
    let second = pipeline::run(tmp.path(), &config).unwrap();
    assert!(second.renames.is_empty());
}

#[test]
fn custom_protected_range_and_floor() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "50.jpg", "fifty");
    touch(tmp.path(), "beach.jpg", "beach");

    let config = RenumberConfig {
        protected: ProtectedRange { min: 1, max: 99 },
        start_number: 100,
        ..RenumberConfig::default()
    };
    let summary = pipeline::run(tmp.path(), &config).unwrap();

    assert_eq!(summary.protected, 1);
    assert!(tmp.path().join("100.jpg").exists());
}

#[test]
fn config_file_drives_the_run() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "beach.jpg", "beach");
    fs::write(
        tmp.path().join("renumber.toml"),
        "start_number = 300\nmanifest_file = \"images.js\"\n",
    )
    .unwrap();

    let config = photo_renumber::config::load_config(tmp.path()).unwrap();
    pipeline::run(tmp.path(), &config).unwrap();

    assert!(tmp.path().join("300.jpg").exists());
    assert!(tmp.path().join("images.js").exists());
}

#[test]
fn non_image_files_are_ignored_entirely() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "beach.jpg", "beach");
    touch(tmp.path(), "notes.txt", "notes");
    touch(tmp.path(), "renumber.toml", "");

    let config = RenumberConfig::default();
    let summary = pipeline::run(tmp.path(), &config).unwrap();

    assert!(tmp.path().join("notes.txt").exists());
    assert_eq!(summary.manifest_entries, 1);

    let manifest = fs::read_to_string(tmp.path().join("manifest.js")).unwrap();
    assert!(!manifest.contains("notes.txt"));
}

#[test]
fn empty_directory_yields_empty_manifest() {
    let tmp = TempDir::new().unwrap();

    let config = RenumberConfig::default();
    let summary = pipeline::run(tmp.path(), &config).unwrap();

    assert_eq!(summary.renames.len(), 0);
    assert_eq!(summary.manifest_entries, 0);
    let manifest = fs::read_to_string(tmp.path().join("manifest.js")).unwrap();
    assert!(manifest.contains("export const images = [\n];"));
}
