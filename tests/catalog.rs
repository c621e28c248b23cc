//! SourceCatalog resolution and JSON loading tests.

use std::path::PathBuf;

use frametab::{FrametabError, SourceCatalog};

// ── resolution ─────────────────────────────────────────────────────

#[test]
fn relative_paths_resolve_against_root() {
    let catalog = SourceCatalog::new()
        .with_root("recordings")
        .with_source("lab", "lab_run.avi");

    let resolved = catalog.resolve("lab").expect("known scenario");
    assert_eq!(resolved, PathBuf::from("recordings").join("lab_run.avi"));
}

#[test]
fn absolute_paths_ignore_root() {
    let catalog = SourceCatalog::new()
        .with_root("recordings")
        .with_source("field", "/data/field_run.avi");

    let resolved = catalog.resolve("field").expect("known scenario");
    assert_eq!(resolved, PathBuf::from("/data/field_run.avi"));
}

#[test]
fn without_root_paths_pass_through() {
    let catalog = SourceCatalog::new().with_source("lab", "videos/lab.avi");
    let resolved = catalog.resolve("lab").expect("known scenario");
    assert_eq!(resolved, PathBuf::from("videos/lab.avi"));
}

#[test]
fn unknown_scenario_names_the_missing_entry() {
    let catalog = SourceCatalog::new().with_source("lab", "lab.avi");
    let error = catalog.resolve("bench").expect_err("unknown scenario");

    assert!(matches!(
        &error,
        FrametabError::UnknownScenario { name } if name == "bench",
    ));
    let message = error.to_string();
    assert!(
        message.contains("bench"),
        "Error should name the scenario: {message}",
    );
}

#[test]
fn later_inserts_replace_earlier_ones() {
    let catalog = SourceCatalog::new()
        .with_source("lab", "old.avi")
        .with_source("lab", "new.avi");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.resolve("lab").expect("known"), PathBuf::from("new.avi"));
}

// ── listing ────────────────────────────────────────────────────────

#[test]
fn names_are_sorted() {
    let catalog = SourceCatalog::new()
        .with_source("windmill", "w.avi")
        .with_source("ball_drop", "b.avi")
        .with_source("pendulum", "p.avi");

    assert_eq!(catalog.names(), vec!["ball_drop", "pendulum", "windmill"]);
}

#[test]
fn empty_catalog_reports_empty() {
    let catalog = SourceCatalog::new();
    assert!(catalog.is_empty());
    assert!(catalog.names().is_empty());
}

// ── JSON loading ───────────────────────────────────────────────────

#[test]
fn loads_name_to_path_object_from_json() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let path = directory.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"lab": "lab_run.avi", "field": "/data/field_run.avi"}"#,
    )
    .expect("write catalog file");

    let catalog = SourceCatalog::from_json_file(&path)
        .expect("valid catalog")
        .with_root("recordings");

    assert_eq!(catalog.names(), vec!["field", "lab"]);
    assert_eq!(
        catalog.resolve("lab").expect("known"),
        PathBuf::from("recordings").join("lab_run.avi"),
    );
    assert_eq!(
        catalog.resolve("field").expect("known"),
        PathBuf::from("/data/field_run.avi"),
    );
}

#[test]
fn rejects_non_object_json() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let path = directory.path().join("catalog.json");
    std::fs::write(&path, r#"["not", "a", "map"]"#).expect("write catalog file");

    let result = SourceCatalog::from_json_file(&path);
    assert!(matches!(result, Err(FrametabError::Json(_))));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let result = SourceCatalog::from_json_file("no_such_catalog.json");
    assert!(matches!(result, Err(FrametabError::Io(_))));
}
