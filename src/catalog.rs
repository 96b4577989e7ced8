// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog: every collection, derived once and then read-only.
//!
//! [`Catalog::build`] runs the whole pipeline in one go:
//!
//! ```text
//! projects + meetups ──▶ aggregate_events ──┐
//! archive sources ─────▶ aggregate_archive ─┼──▶ rank_people ──┐
//! people ───────────────────────────────────┘                  ├──▶ search_dataset()
//! glossary ────────────▶ GlossaryGraph::build ─────────────────┘
//! ```
//!
//! The result owns everything and exposes only shared references, so once a
//! `Catalog` exists nobody can observe it half-built.
//!
//! # Process-wide catalog
//!
//! Long-running hosts that want a single shared instance go through
//! [`Catalog::install`] / [`Catalog::global`], backed by a `OnceLock`. Exactly
//! one install wins. Readers before that get [`AlmanacError::NotInitialized`],
//! never a partial value.

use std::sync::OnceLock;

use serde_json::Value;

use crate::contracts;
use crate::dataset::{build_search_dataset, SearchRecord};
use crate::error::{AlmanacError, Result};
use crate::glossary::{GlossaryEntry, GlossaryGraph};
use crate::merit::{rank_people, RankedPerson};
use crate::timeline::{aggregate_archive, aggregate_events};
use crate::types::{ArchiveItem, Event, GlossaryTerm, Person, Project};

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Collections passed through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Passthrough {
    pub config: Value,
    pub friends: Value,
    pub instances: Value,
    pub guilds: Value,
    pub topics: Value,
    pub articles: Value,
}

impl Passthrough {
    /// Collections that were present in the manifest, by name.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        [
            ("config", &self.config),
            ("friends", &self.friends),
            ("instances", &self.instances),
            ("guilds", &self.guilds),
            ("topics", &self.topics),
            ("articles", &self.articles),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_null())
    }
}

/// Raw, already-parsed inputs.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub people: Vec<Person>,
    pub projects: Vec<Project>,
    pub glossary: Vec<GlossaryTerm>,
    pub meetups: Vec<Event>,
    /// Archive sources in priority order.
    pub archive: Vec<Vec<ArchiveItem>>,
    pub passthrough: Passthrough,
}

/// Immutable, fully-derived view of all collections.
#[derive(Debug, Clone)]
pub struct Catalog {
    people: Vec<RankedPerson>,
    projects: Vec<Project>,
    events: Vec<Event>,
    archive: Vec<ArchiveItem>,
    glossary: GlossaryGraph,
    passthrough: Passthrough,
}

impl Catalog {
    pub fn build(sources: Sources) -> Self {
        let Sources {
            people,
            projects,
            glossary,
            meetups,
            archive,
            passthrough,
        } = sources;

        let events = aggregate_events(&projects, &meetups);
        let archive = aggregate_archive(&archive);
        let people = rank_people(people, &events, &archive);
        let glossary = GlossaryGraph::build(glossary);

        contracts::check_events_sorted(&events);
        contracts::check_archive_sorted(&archive);
        contracts::check_people_ranked(&people);
        contracts::check_merit_consistent(&people);

        tracing::info!(
            people = people.len(),
            projects = projects.len(),
            events = events.len(),
            archive = archive.len(),
            terms = glossary.len(),
            "catalog built"
        );

        Self {
            people,
            projects,
            events,
            archive,
            glossary,
            passthrough,
        }
    }

    /// People, highest merit first.
    pub fn people(&self) -> &[RankedPerson] {
        &self.people
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Project and meetup events, newest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Archive items from every source, newest first.
    pub fn archive(&self) -> &[ArchiveItem] {
        &self.archive
    }

    pub fn glossary(&self) -> &GlossaryGraph {
        &self.glossary
    }

    pub fn passthrough(&self) -> &Passthrough {
        &self.passthrough
    }

    /// Rebuild the flat search dataset.
    pub fn search_dataset(&self) -> Vec<SearchRecord> {
        let records =
            build_search_dataset(&self.glossary, &self.people, &self.events, &self.archive);
        contracts::check_dataset_complete(
            &records,
            self.glossary.len(),
            self.people.len(),
            self.events.len(),
            self.archive.len(),
        );
        records
    }

    pub fn person(&self, id: &str) -> Option<&RankedPerson> {
        self.people.iter().find(|p| p.person.id == id)
    }

    pub fn term(&self, id: &str) -> Option<&GlossaryEntry> {
        self.glossary.get(id)
    }

    /// Events where `person_id` speaks, newest first.
    pub fn events_for_person<'a>(&'a self, person_id: &'a str) -> impl Iterator<Item = &'a Event> {
        self.events
            .iter()
            .filter(move |e| e.speakers.iter().any(|s| s == person_id))
    }

    /// Archive items featuring `person_id`, newest first.
    pub fn archive_for_person<'a>(
        &'a self,
        person_id: &'a str,
    ) -> impl Iterator<Item = &'a ArchiveItem> {
        self.archive
            .iter()
            .filter(move |i| i.participants.iter().any(|p| p == person_id))
    }

    /// Events of one project, newest first.
    pub fn events_for_project<'a>(
        &'a self,
        project_id: &'a str,
    ) -> impl Iterator<Item = &'a Event> {
        self.events
            .iter()
            .filter(move |e| e.project.as_deref() == Some(project_id))
    }

    /// Publish `self` as the process-wide catalog.
    pub fn install(self) -> Result<&'static Catalog> {
        GLOBAL
            .set(self)
            .map_err(|_| AlmanacError::AlreadyInitialized)?;
        GLOBAL.get().ok_or(AlmanacError::NotInitialized)
    }

    /// The process-wide catalog, if one has been installed.
    pub fn global() -> Result<&'static Catalog> {
        GLOBAL.get().ok_or(AlmanacError::NotInitialized)
    }

    /// The process-wide catalog, building it with `init` on first use.
    ///
    /// Concurrent callers block until the single initializer finishes.
    pub fn global_or_init(init: impl FnOnce() -> Catalog) -> &'static Catalog {
        GLOBAL.get_or_init(init)
    }
}
