// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input records, as they come out of the collection files.
//!
//! These are never mutated after loading. Everything the pipeline derives
//! (merit, resolved links, the project back-reference on flattened events)
//! lives in new values built from these records.
//!
//! Every record keeps the fields the core does not interpret in a flattened
//! `extra` map, so the exported collections carry the whole source record
//! through unchanged.
//!
//! # Tolerance
//!
//! Only `id` and `name` are required. Sequences (`roles`, `speakers`, `people`,
//! `keywords`, `events`) and the glossary `description` default to empty
//! whether the key is missing or explicitly `null`, and dates default to
//! `None`, so counting and sorting never trip over absent data.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fields carried through without interpretation.
pub type Extra = BTreeMap<String, Value>;

/// A contributor.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A project with its own event series.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A dated event, either embedded in a project or sourced from meetups.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Comparable date string (ISO 8601 in practice).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speakers: Vec<String>,
    /// Owning project; set when the event was flattened out of a project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A published video or other archive entry.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    /// Person identifiers appearing in the item.
    #[serde(default, rename = "people", deserialize_with = "null_as_default")]
    pub participants: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A glossary entry whose description may contain `[[key|link]]` markers.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GlossaryTerm {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `null` and a missing key both mean "empty".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl GlossaryTerm {
    /// Every string this term answers to: id, name, then keywords.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        [self.id.as_str(), self.name.as_str()]
            .into_iter()
            .chain(self.keywords.iter().map(String::as_str))
    }
}
