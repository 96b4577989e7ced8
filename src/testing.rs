//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::catalog::Sources;
use crate::types::{ArchiveItem, Event, Extra, GlossaryTerm, Person, Project};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Create a person with the given roles and no caption.
pub fn make_person(id: &str, roles: &[&str]) -> Person {
    Person {
        id: id.to_string(),
        name: format!("Person {}", id),
        roles: strings(roles),
        caption: None,
        extra: Extra::new(),
    }
}

/// Create an event with a date and speakers, not attached to a project.
pub fn make_event(id: &str, date: &str, speakers: &[&str]) -> Event {
    Event {
        id: id.to_string(),
        name: format!("Event {}", id),
        date: Some(date.to_string()),
        speakers: strings(speakers),
        project: None,
        extra: Extra::new(),
    }
}

/// Create a project owning the given events.
pub fn make_project(id: &str, events: Vec<Event>) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        events,
        extra: Extra::new(),
    }
}

/// Create an archive item with a publication timestamp and participants.
pub fn make_video(id: &str, published_at: &str, people: &[&str]) -> ArchiveItem {
    ArchiveItem {
        id: id.to_string(),
        name: format!("Video {}", id),
        published_at: Some(published_at.to_string()),
        participants: strings(people),
        extra: Extra::new(),
    }
}

/// Create a glossary term.
pub fn make_term(id: &str, name: &str, keywords: &[&str], description: &str) -> GlossaryTerm {
    GlossaryTerm {
        id: id.to_string(),
        name: name.to_string(),
        category: Some("concept".to_string()),
        keywords: strings(keywords),
        description: description.to_string(),
        extra: Extra::new(),
    }
}

/// A small but complete set of sources touching every collection.
///
/// - alice: 2 roles, speaks at e1, appears in v1 v2 v3 → merit 13
/// - bob: 0 roles, speaks at e1 and m1, appears in v2 → merit 4
/// - carol: 1 role, nothing else → merit 3
pub fn sample_sources() -> Sources {
    Sources {
        people: vec![
            make_person("carol", &["organizer"]),
            make_person("bob", &[]),
            make_person("alice", &["speaker", "organizer"]),
        ],
        projects: vec![
            make_project(
                "conf",
                vec![
                    make_event("e1", "2023-06-08", &["alice", "bob"]),
                    make_event("e2", "2022-06-10", &[]),
                ],
            ),
            make_project("empty", vec![]),
        ],
        meetups: vec![make_event("m1", "2023-01-15", &["bob"])],
        archive: vec![
            vec![make_video("v1", "2022-07-01T00:00:00Z", &["alice"])],
            vec![
                make_video("v2", "2023-07-01T00:00:00Z", &["alice", "bob"]),
                make_video("v3", "2021-01-01T00:00:00Z", &["alice"]),
            ],
        ],
        glossary: vec![
            make_term("a", "Alpha", &[], "See [[B]] and [[C|Other Name]]"),
            make_term("b", "B", &[], "Plain"),
            make_term("c", "Gamma", &["Other Name"], "Dangling [[nowhere]]"),
        ],
        ..Sources::default()
    }
}
