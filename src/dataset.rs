// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The flat search dataset handed to client-side search.
//!
//! One record per glossary term, person, event and archive item, in that
//! order. Nothing is matched, scored or deduplicated here: ids repeat freely
//! across kinds, and relevance is the consumer's problem. This is purely
//! shape normalisation so a single search box can cover every collection.
//!
//! | Kind    | URL       | Icon           | Description          | Keywords        |
//! |---------|-----------|----------------|----------------------|-----------------|
//! | term    | `/t/<id>` | `tag`          | term category        | term keywords   |
//! | person  | `/p/<id>` | `user`         | caption or "Person"  |                 |
//! | event   | `/e/<id>` | `ticket`       | "Event"              |                 |
//! | archive | `/v/<id>` | `video-camera` | "Video"              | participant ids |

use serde::{Deserialize, Serialize};

use crate::glossary::GlossaryGraph;
use crate::merit::RankedPerson;
use crate::types::{ArchiveItem, Event};

/// Which collection a record came from.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Term,
    Person,
    Event,
    Archive,
}

impl RecordKind {
    /// Path prefix of the record's page.
    pub fn url_prefix(self) -> &'static str {
        match self {
            RecordKind::Term => "t",
            RecordKind::Person => "p",
            RecordKind::Event => "e",
            RecordKind::Archive => "v",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            RecordKind::Term => Icon::Tag,
            RecordKind::Person => Icon::User,
            RecordKind::Event => Icon::Ticket,
            RecordKind::Archive => Icon::VideoCamera,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Term => "term",
            RecordKind::Person => "person",
            RecordKind::Event => "event",
            RecordKind::Archive => "archive",
        }
    }
}

/// Presentational icon tag; the UI maps it to an actual icon.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Tag,
    User,
    Ticket,
    VideoCamera,
}

/// One searchable entry.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub base_url: String,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
}

impl SearchRecord {
    fn new(kind: RecordKind, id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            base_url: format!("/{}/{}", kind.url_prefix(), id),
            icon: kind.icon(),
            description: None,
            keywords: None,
            term_name: None,
            full_description: None,
        }
    }
}

/// Build the dataset from already-aggregated and ranked collections.
pub fn build_search_dataset(
    glossary: &GlossaryGraph,
    people: &[RankedPerson],
    events: &[Event],
    archive: &[ArchiveItem],
) -> Vec<SearchRecord> {
    let mut records =
        Vec::with_capacity(glossary.len() + people.len() + events.len() + archive.len());

    for entry in glossary {
        let term = &entry.term;
        records.push(SearchRecord {
            description: term.category.clone(),
            keywords: Some(term.keywords.clone()),
            term_name: Some(term.name.clone()),
            full_description: Some(term.description.clone()),
            ..SearchRecord::new(RecordKind::Term, &term.id, &term.name)
        });
    }

    for ranked in people {
        let person = &ranked.person;
        records.push(SearchRecord {
            description: Some(
                person
                    .caption
                    .clone()
                    .unwrap_or_else(|| "Person".to_string()),
            ),
            ..SearchRecord::new(RecordKind::Person, &person.id, &person.name)
        });
    }

    for event in events {
        records.push(SearchRecord {
            description: Some("Event".to_string()),
            ..SearchRecord::new(RecordKind::Event, &event.id, &event.name)
        });
    }

    for item in archive {
        records.push(SearchRecord {
            description: Some("Video".to_string()),
            keywords: Some(item.participants.clone()),
            ..SearchRecord::new(RecordKind::Archive, &item.id, &item.name)
        });
    }

    tracing::debug!(records = records.len(), "search dataset built");
    records
}
