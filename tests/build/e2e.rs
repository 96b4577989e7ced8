//! End-to-end tests for the build workflow.

use std::fs;

use almanac::build::run_build;
use serde_json::Value;
use tempfile::TempDir;

use crate::common::{fixture, valid_fixture};

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_run_build_e2e_basic() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");
    let input = valid_fixture();

    let result = run_build(input.to_str().unwrap(), output_path.to_str().unwrap(), false);
    let summary = result.expect("build should succeed");

    for name in [
        "people.json",
        "projects.json",
        "events.json",
        "archive.json",
        "glossary.json",
        "meta.json",
    ] {
        assert!(output_path.join(name).exists(), "{} should be created", name);
    }
    assert!(output_path.join(&summary.search_file).exists());
    // Six derived files, meta.json, and the config and topics passthroughs.
    assert_eq!(summary.files.len(), 9);

    assert_eq!(summary.people, 3);
    assert_eq!(summary.events, 3);
    assert_eq!(summary.archive, 3);
    assert_eq!(summary.terms, 3);
    assert_eq!(summary.dangling_links, 1);
    assert_eq!(summary.records, 12);
}

#[test]
fn test_search_file_is_content_addressed() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let input = valid_fixture();

    let a = run_build(input.to_str().unwrap(), first.path().to_str().unwrap(), false).unwrap();
    let b = run_build(input.to_str().unwrap(), second.path().to_str().unwrap(), false).unwrap();

    assert_eq!(a.search_file, b.search_file);
    assert!(a.search_file.starts_with("search-"));
    assert!(a.search_file.ends_with(".json"));
    assert_eq!(a.search_file.len(), "search-".len() + 8 + ".json".len());
}

#[test]
fn test_output_contents() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path();
    let input = valid_fixture();
    let summary = run_build(input.to_str().unwrap(), out.to_str().unwrap(), true).unwrap();

    let people = read_json(&out.join("people.json"));
    let ranking: Vec<(&str, u64)> = people
        .as_array()
        .unwrap()
        .iter()
        .map(|p| (p["id"].as_str().unwrap(), p["merit"].as_u64().unwrap()))
        .collect();
    assert_eq!(ranking, vec![("alice", 13), ("bob", 4), ("carol", 3)]);
    assert_eq!(people[0]["github"], "alice-gh");

    let events = read_json(&out.join("events.json"));
    let event_ids: Vec<&str> = events.as_array().unwrap().iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(event_ids, vec!["e1", "m1", "e2"]);
    assert_eq!(events[0]["project"], "conf");
    assert!(events[1].get("project").is_none());

    let archive = read_json(&out.join("archive.json"));
    let video_ids: Vec<&str> = archive.as_array().unwrap().iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(video_ids, vec!["v2", "v1", "v3"]);

    let glossary = read_json(&out.join("glossary.json"));
    assert_eq!(glossary[0]["links"][1]["target"], "c");
    assert!(glossary[2]["links"][0]["target"].is_null());

    let search = read_json(&out.join(&summary.search_file));
    assert_eq!(search.as_array().unwrap().len(), 12);
    assert_eq!(search[0]["type"], "term");
    assert_eq!(search[0]["baseUrl"], "/t/a");
    assert_eq!(search[0]["termName"], "Alpha");
    assert_eq!(search[3]["id"], "alice");
    assert_eq!(search[3]["description"], "Person");
    assert_eq!(search[5]["description"], "Organizer");
    assert_eq!(search[11]["icon"], "video-camera");
    assert_eq!(search[11]["keywords"], serde_json::json!(["alice"]));

    let meta = read_json(&out.join("meta.json"));
    assert_eq!(meta["package"], "almanac");
    assert_eq!(meta["searchFile"], summary.search_file.as_str());
    assert_eq!(meta["danglingLinks"], 1);
    assert!(meta.get("files").is_none());
}

#[test]
fn test_passthrough_collections_are_written() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path();
    let input = valid_fixture();
    run_build(input.to_str().unwrap(), out.to_str().unwrap(), false).unwrap();

    let config = read_json(&out.join("config.json"));
    assert_eq!(config["baseUrl"], "https://example.org");
    assert_eq!(config["title"], "Test Community");

    let topics = read_json(&out.join("topics.json"));
    assert_eq!(topics[1]["id"], "networking");

    // Not listed in the manifest, so nothing to export.
    for name in ["friends.json", "instances.json", "guilds.json", "articles.json"] {
        assert!(!out.join(name).exists(), "{} should not be created", name);
    }
}

#[test]
fn test_run_build_e2e_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");

    let result = run_build(
        temp_dir.path().to_str().unwrap(),
        output_path.to_str().unwrap(),
        false,
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("manifest.json"), "error: {}", err);
    assert!(!output_path.exists(), "nothing should be written on failure");
}

#[test]
fn test_run_build_e2e_invalid_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let input = fixture("invalid-manifest");

    let err = run_build(input.to_str().unwrap(), temp_dir.path().to_str().unwrap(), false).unwrap_err();
    assert!(err.to_string().contains("invalid JSON"), "error: {}", err);
}
