// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Merging dated collections into one newest-first sequence.
//!
//! Events come from two places: each project's own event list, and the
//! separately generated meetup collection. Archive items come from several
//! generated files concatenated in a fixed priority order. Both merges end the
//! same way: a descending sort on a comparable date string.
//!
//! The sort is stable, so entries with equal dates keep their merged input
//! order (project events in project order, then meetups; archive sources in
//! priority order). Entries without a date are kept and sort after all dated
//! ones.

use std::cmp::Ordering;

use crate::types::{ArchiveItem, Event, Project};

/// Newest-first comparison of optional date strings. `None` sorts last.
pub fn newest_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    b.cmp(&a)
}

/// Flatten project events (stamped with their project id) and meetups into
/// one newest-first sequence.
pub fn aggregate_events(projects: &[Project], meetups: &[Event]) -> Vec<Event> {
    let mut events: Vec<Event> = projects
        .iter()
        .filter(|p| !p.events.is_empty())
        .flat_map(|p| {
            p.events.iter().map(move |e| Event {
                project: Some(p.id.clone()),
                ..e.clone()
            })
        })
        .chain(meetups.iter().cloned())
        .collect();

    let undated = events.iter().filter(|e| e.date.is_none()).count();
    if undated > 0 {
        tracing::warn!(undated, "events without a date sort last");
    }

    events.sort_by(|a, b| newest_first(a.date.as_deref(), b.date.as_deref()));
    events
}

/// Concatenate archive sources in priority order and sort newest-first.
pub fn aggregate_archive<S>(sources: &[S]) -> Vec<ArchiveItem>
where
    S: AsRef<[ArchiveItem]>,
{
    let mut items: Vec<ArchiveItem> = sources
        .iter()
        .flat_map(|source| source.as_ref().iter().cloned())
        .collect();

    let undated = items.iter().filter(|i| i.published_at.is_none()).count();
    if undated > 0 {
        tracing::warn!(undated, "archive items without a publication date sort last");
    }

    items.sort_by(|a, b| newest_first(a.published_at.as_deref(), b.published_at.as_deref()));
    items
}
