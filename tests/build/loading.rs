//! Tests for loading collections from disk.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::path::Path;

use almanac::build::{load_sources, load_sources_with_progress, InputManifest};
use almanac::AlmanacError;
use serde_json::json;

use crate::common::{fixture, valid_fixture};

#[test]
fn test_load_valid_sources() {
    let dir = valid_fixture();
    let manifest = InputManifest::from_dir(&dir).unwrap();
    let sources = load_sources(&dir, &manifest).unwrap();

    assert_eq!(sources.people.len(), 3);
    assert_eq!(sources.projects.len(), 2);
    assert_eq!(sources.glossary.len(), 3);
    assert_eq!(sources.meetups.len(), 1);

    // Archive sources stay separate and in manifest order.
    let archive_ids: Vec<Vec<&str>> = sources
        .archive
        .iter()
        .map(|s| s.iter().map(|i| i.id.as_str()).collect())
        .collect();
    assert_eq!(archive_ids, vec![vec!["v1"], vec!["v2", "v3"]]);
}

#[test]
fn test_unknown_fields_are_carried() {
    let dir = valid_fixture();
    let manifest = InputManifest::from_dir(&dir).unwrap();
    let sources = load_sources(&dir, &manifest).unwrap();

    let alice = sources.people.iter().find(|p| p.id == "alice").unwrap();
    assert_eq!(alice.extra.get("github"), Some(&json!("alice-gh")));
    assert_eq!(sources.meetups[0].extra.get("venue"), Some(&json!("Library")));
    assert_eq!(sources.glossary[0].category.as_deref(), Some("concept"));
}

#[test]
fn test_passthrough_collections() {
    let dir = valid_fixture();
    let manifest = InputManifest::from_dir(&dir).unwrap();
    let sources = load_sources(&dir, &manifest).unwrap();

    assert_eq!(sources.passthrough.config["title"], "Test Community");
    assert_eq!(sources.passthrough.topics[1]["id"], "networking");
    assert!(sources.passthrough.friends.is_null());
    assert!(sources.passthrough.articles.is_null());
}

#[test]
fn test_progress_callback_sees_every_file() {
    let dir = valid_fixture();
    let manifest = InputManifest::from_dir(&dir).unwrap();
    let seen = AtomicUsize::new(0);

    load_sources_with_progress(&dir, &manifest, &|_: &Path| {
        seen.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), manifest.files().len());
}

#[test]
fn test_missing_collection_file() {
    let dir = fixture("missing-file");
    let manifest = InputManifest::from_dir(&dir).unwrap();
    let err = load_sources(&dir, &manifest).unwrap_err();
    match err {
        AlmanacError::Io { path, .. } => assert!(path.ends_with("people.yaml")),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_malformed_yaml_names_file() {
    let dir = fixture("bad-yaml");
    let manifest = InputManifest::from_dir(&dir).unwrap();
    let err = load_sources(&dir, &manifest).unwrap_err();
    assert!(matches!(err, AlmanacError::Parse { format: "YAML", .. }));
    assert!(err.to_string().contains("people.yaml"));
}

#[test]
fn test_null_lists_and_multiple_meetup_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let write = |name: &str, body: &str| std::fs::write(root.join(name), body).unwrap();

    write(
        "manifest.json",
        r#"{
            "version": 1,
            "people": "people.json",
            "projects": "projects.json",
            "glossary": "glossary.json",
            "meetups": ["spring.json", "autumn.json"],
            "archive": ["videos.json"]
        }"#,
    );
    write("people.json", r#"[{ "id": "ann", "name": "Ann", "roles": null }]"#);
    write("projects.json", r#"[{ "id": "p", "name": "P", "events": null }]"#);
    write(
        "glossary.json",
        r#"[{ "id": "g", "name": "G", "keywords": null, "description": null }]"#,
    );
    write(
        "spring.json",
        r#"[{ "id": "m1", "name": "Spring", "date": "2024-03-01", "speakers": null }]"#,
    );
    write(
        "autumn.json",
        r#"[{ "id": "m2", "name": "Autumn", "date": "2024-10-01", "speakers": ["ann"] }]"#,
    );
    write("videos.json", r#"[{ "id": "v1", "name": "Talk", "people": null }]"#);

    let manifest = InputManifest::from_dir(root).unwrap();
    let sources = load_sources(root, &manifest).unwrap();

    let meetups: Vec<&str> = sources.meetups.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(meetups, vec!["m1", "m2"]);
    assert!(sources.meetups[0].speakers.is_empty());
    assert!(sources.meetups[0].extra.is_empty());
    assert!(sources.archive[0][0].participants.is_empty());
    assert!(sources.people[0].roles.is_empty());
    assert!(sources.projects[0].events.is_empty());
    assert!(sources.glossary[0].description.is_empty());
}
