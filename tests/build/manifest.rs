//! Tests for manifest parsing.

use almanac::build::{InputManifest, MANIFEST_VERSION};
use almanac::AlmanacError;

use crate::common::{fixture, valid_fixture};

#[test]
fn test_valid_fixture_manifest() {
    let manifest = InputManifest::from_dir(&valid_fixture()).unwrap();
    assert_eq!(manifest.version, MANIFEST_VERSION);
    assert_eq!(manifest.people, "people.yaml");
    assert_eq!(manifest.meetups, vec!["gen/meetup.json"]);
    assert_eq!(manifest.archive, vec!["gen/yt-main.json", "gen/yt-extra.json"]);
    assert_eq!(manifest.config.as_deref(), Some("config.yaml"));
    assert_eq!(manifest.friends, None);
    assert_eq!(manifest.files().len(), 8);
}

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = InputManifest::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, AlmanacError::Io { .. }));
    assert!(err.to_string().contains("manifest.json"));
}

#[test]
fn test_malformed_manifest_is_parse_error() {
    let err = InputManifest::from_dir(&fixture("invalid-manifest")).unwrap_err();
    match err {
        AlmanacError::Parse { format, path, .. } => {
            assert_eq!(format, "JSON");
            assert!(path.ends_with("manifest.json"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unsupported_version() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 7, "people": "p.yaml", "projects": "x.yaml", "glossary": "g.yaml"}"#,
    )
    .unwrap();
    let err = InputManifest::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, AlmanacError::Manifest(_)));
    assert!(err.to_string().contains("unsupported version 7"));
}
