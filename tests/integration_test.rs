//! Integration tests for dirkind
//!
//! These tests drive the public API end to end against real temporary
//! directories: scanning, classification, grouping and counting.

use dirkind::{
    classify::{Classifier, MimeResolver, MimeSource, StaticResolver},
    count_files_in_dir,
    group::{DirectoryProcessor, GroupedBucket},
    process_directory,
    registry::{self, Category, FileKind},
};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::TempDir;

/// Resolver that knows nothing, so every lookup goes through the extension table
struct NoMime;

impl MimeResolver for NoMime {
    fn resolve(&self, _extension: &str) -> Option<String> {
        None
    }
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// ```text
/// root/
///   .hidden
///   a.txt
///   b.pdf
///   sub/
/// ```
fn build_scenario_dir(root: &Path) {
    write_bytes(&root.join("a.txt"), 100);
    write_bytes(&root.join("b.pdf"), 1_200);
    write_bytes(&root.join(".hidden"), 10);
    fs::create_dir(root.join("sub")).unwrap();
}

fn pdf_only() -> Classifier {
    Classifier::new(StaticResolver::new().with(".pdf", "application/pdf"))
}

#[test]
fn test_scenario_mixed_directory() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_scenario_dir(tmp.path());

    let grouped = process_directory(tmp.path()).unwrap();

    let dirs = grouped.directories();
    assert_eq!(dirs.len(), 1);
    assert_eq!(dirs[0].name, "sub");
    assert!(dirs[0].is_dir);
    assert!(dirs[0].kind.is_none());

    let documents = grouped.labels(&Category::Document).unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents["Plain Text"][0].name, "a.txt");
    assert_eq!(documents["Plain Text"][0].size, "100 B");
    assert_eq!(documents["PDF Document"][0].name, "b.pdf");
    assert_eq!(documents["PDF Document"][0].extension, ".pdf");

    assert_eq!(grouped.len(), 2);
    assert_eq!(count_files_in_dir(tmp.path()).unwrap(), 3);
}

#[test]
fn test_hidden_entries_never_appear() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_scenario_dir(tmp.path());
    fs::create_dir(tmp.path().join(".git")).unwrap();
    write_bytes(&tmp.path().join(".env.txt"), 1);

    let grouped = process_directory(tmp.path()).unwrap();
    for (_, bucket) in &grouped {
        let names: Vec<&str> = match bucket {
            GroupedBucket::Directories(entries) => {
                entries.iter().map(|e| e.name.as_str()).collect()
            }
            GroupedBucket::Typed(labels) => labels
                .values()
                .flatten()
                .map(|e| e.name.as_str())
                .collect(),
        };
        assert!(names.iter().all(|n| !n.starts_with('.')), "hidden entry in {names:?}");
    }
    assert_eq!(count_files_in_dir(tmp.path()).unwrap(), 3);
}

#[test]
fn test_count_matches_flattened_result() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    for name in ["song.mp3", "clip.mp4", "logo.png", "notes.txt", "data.xyz", "bundle.zip"] {
        write_bytes(&tmp.path().join(name), 42);
    }
    fs::create_dir(tmp.path().join("photos")).unwrap();
    fs::create_dir(tmp.path().join("music")).unwrap();

    let processor = DirectoryProcessor::new(Classifier::from_source(MimeSource::Guess));
    let grouped = processor.process(tmp.path()).unwrap();
    assert_eq!(
        grouped.entry_count() as u64,
        count_files_in_dir(tmp.path()).unwrap()
    );
}

#[test]
fn test_extensionless_files_are_counted_but_not_grouped() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&tmp.path().join("Makefile"), 1);
    write_bytes(&tmp.path().join("a.txt"), 1);

    let processor = DirectoryProcessor::new(Classifier::new(NoMime));
    let grouped = processor.process(tmp.path()).unwrap();
    assert_eq!(grouped.entry_count(), 1);
    assert_eq!(count_files_in_dir(tmp.path()).unwrap(), 2);
}

#[test]
fn test_processing_is_idempotent() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_scenario_dir(tmp.path());
    write_bytes(&tmp.path().join("song.mp3"), 3_000);

    let processor = DirectoryProcessor::new(Classifier::default());
    let first = processor.process(tmp.path()).unwrap();
    let second = processor.process(tmp.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_directory_error_is_unchanged() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let missing = tmp.path().join("does-not-exist");

    let err = process_directory(&missing).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    let err = count_files_in_dir(&missing).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_file_path_is_not_a_directory() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let file = tmp.path().join("plain.txt");
    write_bytes(&file, 1);

    assert!(process_directory(&file).is_err());
    assert!(count_files_in_dir(&file).is_err());
}

#[test]
fn test_extension_table_without_mime() {
    let classifier = Classifier::new(NoMime);
    for (ext, kind) in registry::extension_table() {
        assert_eq!(&classifier.classify(&format!("x{ext}")), kind);
    }
    assert_eq!(classifier.classify("data.xyz"), FileKind::other(".xyz"));
}

#[test]
fn test_mime_scenarios() {
    let classifier = Classifier::new(
        StaticResolver::new()
            .with(".mp3", "audio/mpeg")
            .with(".png", "image/png"),
    );
    assert_eq!(
        classifier.classify("song.mp3"),
        FileKind::new(Category::Audio, "MP3 Audio")
    );
    assert_eq!(
        classifier.classify("logo.png"),
        FileKind::new(Category::Derived("Image".to_string()), "PNG")
    );
}

#[test]
fn test_json_output_of_real_scan() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_scenario_dir(tmp.path());

    let grouped = DirectoryProcessor::new(pdf_only())
        .process(tmp.path())
        .unwrap();
    let json = dirkind::output::render_json(&grouped).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Directory"][0]["name"], "sub");
    assert_eq!(value["Document"]["Plain Text"][0]["kind"]["label"], "Plain Text");
}
