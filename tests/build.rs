//! Catalog Build Integration Tests
//!
//! Runs the full scan → merge → write pipeline against real directories.

use std::fs;
use std::path::Path;

use isl_catalog::catalog::{self, CatalogDocument, CatalogError, CatalogLayout, IgnoreSet};
use serde_json::Value;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), b"asset").unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_hello_bye_scenario() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("letters"), "Hello.png");
    touch(&public.join("ISL_Gifs"), "hello.gif");
    touch(&public.join("ISL_Gifs"), "Bye.gif");

    let report = catalog::build(&CatalogLayout::under(&public)).unwrap();
    assert_eq!(report.entries.len(), 2);

    let json = read_json(&public.join("ISL_Gifs.json"));
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    let hello = &entries[0];
    assert_eq!(hello["word"], "Hello");
    assert_eq!(hello["image"], "/letters/Hello.png");
    assert_eq!(hello["gif"], "/ISL_Gifs/hello.gif");
    assert_eq!(hello["searchKeys"], serde_json::json!(["hello"]));
    assert_eq!(hello["examples"], serde_json::json!(["Example for Hello"]));

    let bye = &entries[1];
    assert_eq!(bye["word"], "Bye");
    assert!(bye["image"].is_null());
    assert_eq!(bye["gif"], "/ISL_Gifs/Bye.gif");
    assert_eq!(bye["searchKeys"], serde_json::json!(["bye"]));
    assert_eq!(bye["examples"], serde_json::json!(["Example for Bye"]));
}

#[test]
fn test_both_destinations_identical() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("letters"), "A.jpg");
    touch(&public.join("ISL_Gifs"), "good_morning.gif");

    catalog::build(&CatalogLayout::under(&public)).unwrap();

    let index = fs::read(public.join("ISL_Gifs.json")).unwrap();
    let glossary = fs::read(public.join("glossary.json")).unwrap();
    assert_eq!(index, glossary);
}

#[test]
fn test_empty_input_still_writes() {
    let temp = TempDir::new().unwrap();
    // Neither source directory nor the public root exist
    let public = temp.path().join("site").join("public");

    let report = catalog::build(&CatalogLayout::under(&public)).unwrap();

    assert!(report.entries.is_empty());
    assert_eq!(report.stats.total, 0);
    for dest in ["ISL_Gifs.json", "glossary.json"] {
        assert_eq!(read_json(&public.join(dest)), serde_json::json!([]));
    }
}

#[test]
fn test_one_source_missing() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("letters"), "A.jpg");
    touch(&public.join("letters"), "B.jpg");

    let report = catalog::build(&CatalogLayout::under(&public)).unwrap();

    assert_eq!(report.stats.total, 2);
    assert_eq!(report.stats.with_image, 2);
    assert_eq!(report.stats.with_clip, 0);
}

#[test]
fn test_merge_identity_across_conventions() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("letters"), "Thank_You.png");
    touch(&public.join("ISL_Gifs"), "thank-you.gif");

    let report = catalog::build(&CatalogLayout::under(&public)).unwrap();

    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.display_label, "Thank You");
    assert_eq!(entry.image_ref.as_deref(), Some("/letters/Thank_You.png"));
    assert_eq!(entry.clip_ref.as_deref(), Some("/ISL_Gifs/thank-you.gif"));
    assert!(entry.search_keys.contains("thank you"));
    assert!(entry.search_keys.contains("thankyou"));
    assert_eq!(report.stats.with_both, 1);
}

#[test]
fn test_subdirectories_are_skipped() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("ISL_Gifs"), "Hello.gif");
    touch(&public.join("ISL_Gifs").join("archive"), "Old.gif");

    let report = catalog::build(&CatalogLayout::under(&public)).unwrap();

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].display_label, "Hello");
}

#[test]
fn test_ignore_patterns_apply_to_both_sources() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("letters"), "A.jpg");
    touch(&public.join("letters"), "Thumbs.db");
    touch(&public.join("ISL_Gifs"), ".DS_Store");

    let mut layout = CatalogLayout::under(&public);
    layout.ignore = IgnoreSet::new(["Thumbs.db", ".DS_Store"]).unwrap();
    let report = catalog::build(&layout).unwrap();

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].display_label, "A");
}

#[test]
fn test_degenerate_name_kept_under_empty_key() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("ISL_Gifs"), "!!!.gif");

    let report = catalog::build(&CatalogLayout::under(&public)).unwrap();

    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.display_label, "!!!");
    assert!(entry.search_keys.contains(""));
}

#[test]
fn test_write_failure_aborts() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("letters"), "A.jpg");

    let mut layout = CatalogLayout::under(&public);
    // A directory where the second document should go
    let blocked = public.join("glossary.json");
    fs::create_dir_all(&blocked).unwrap();
    layout.destinations = vec![public.join("ISL_Gifs.json"), blocked];

    let result = catalog::build(&layout);

    assert!(matches!(result, Err(CatalogError::Write { .. })));
    // No rollback of the destination written first
    assert!(public.join("ISL_Gifs.json").is_file());
}

#[test]
fn test_rebuild_overwrites() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("letters"), "A.jpg");
    catalog::build(&CatalogLayout::under(&public)).unwrap();

    fs::remove_file(public.join("letters").join("A.jpg")).unwrap();
    touch(&public.join("letters"), "B.jpg");
    catalog::build(&CatalogLayout::under(&public)).unwrap();

    let doc = CatalogDocument::load(&public.join("glossary.json")).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.entries[0].display_label, "B");
}

#[test]
fn test_lookup_after_build() {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    touch(&public.join("letters"), "Thank_You.png");
    touch(&public.join("ISL_Gifs"), "Good-Morning.gif");

    catalog::build(&CatalogLayout::under(&public)).unwrap();
    let doc = CatalogDocument::load(&public.join("ISL_Gifs.json")).unwrap();

    assert_eq!(doc.lookup("thankyou")[0].display_label, "Thank You");
    assert_eq!(doc.lookup("good morning")[0].display_label, "Good Morning");
    assert_eq!(doc.search("morn").len(), 1);
}
