// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Merit: how much a person shows up across the catalog.
//!
//! ```text
//! merit = 3 × roles + 1 × talks + 2 × videos
//! ```
//!
//! where *talks* counts aggregated events listing the person as a speaker and
//! *videos* counts aggregated archive items listing them as a participant.
//! A record naming the same person twice counts once.
//!
//! # Constants
//!
//! | Signal | Weight | Source |
//! |--------|--------|--------|
//! | Role   | 3      | `Person::roles` |
//! | Talk   | 1      | `Event::speakers` |
//! | Video  | 2      | `ArchiveItem::participants` |
//!
//! These are fixed policy, not configuration.
//!
//! # Ordering
//!
//! People are sorted by merit, highest first. The order of people with equal
//! merit is not part of the contract. Today it is input order because the sort
//! is stable, but callers must not depend on that.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ArchiveItem, Event, Person};
use crate::utils::count_mentions;

/// Weight of each role a person holds.
pub const ROLE_WEIGHT: usize = 3;

/// Weight of each event where the person speaks.
pub const SPEAKER_WEIGHT: usize = 1;

/// Weight of each archive item the person appears in.
pub const ARCHIVE_WEIGHT: usize = 2;

/// The three counts behind a merit score.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeritBreakdown {
    pub roles: usize,
    pub talks: usize,
    pub videos: usize,
}

impl MeritBreakdown {
    pub fn score(&self) -> usize {
        ROLE_WEIGHT * self.roles + SPEAKER_WEIGHT * self.talks + ARCHIVE_WEIGHT * self.videos
    }
}

/// A person with their computed merit.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RankedPerson {
    #[serde(flatten)]
    pub person: Person,
    pub merit: usize,
    #[serde(skip)]
    pub breakdown: MeritBreakdown,
}

/// Per-identifier participation counts over the aggregated sequences.
///
/// Built in one pass over events and archive so ranking stays linear in the
/// size of the catalog rather than people × records.
#[derive(Debug, Default)]
pub struct Participation<'a> {
    talks: HashMap<&'a str, usize>,
    videos: HashMap<&'a str, usize>,
}

impl<'a> Participation<'a> {
    pub fn collect(events: &'a [Event], archive: &'a [ArchiveItem]) -> Self {
        let mut participation = Self::default();
        for event in events {
            tally(&mut participation.talks, &event.speakers);
        }
        for item in archive {
            tally(&mut participation.videos, &item.participants);
        }
        participation
    }

    pub fn breakdown(&self, person: &Person) -> MeritBreakdown {
        MeritBreakdown {
            roles: person.roles.len(),
            talks: self.talks.get(person.id.as_str()).copied().unwrap_or(0),
            videos: self.videos.get(person.id.as_str()).copied().unwrap_or(0),
        }
    }
}

/// Count each distinct member of one record once.
fn tally<'a>(counts: &mut HashMap<&'a str, usize>, members: &'a [String]) {
    for (i, member) in members.iter().enumerate() {
        if members[..i].contains(member) {
            continue;
        }
        *counts.entry(member.as_str()).or_insert(0) += 1;
    }
}

/// Merit of a single person, counted directly against the aggregated sequences.
pub fn merit_of(person: &Person, events: &[Event], archive: &[ArchiveItem]) -> usize {
    MeritBreakdown {
        roles: person.roles.len(),
        talks: count_mentions(events, &person.id, |e| e.speakers.as_slice()),
        videos: count_mentions(archive, &person.id, |i| i.participants.as_slice()),
    }
    .score()
}

/// Score everyone and sort by merit, highest first.
pub fn rank_people(people: Vec<Person>, events: &[Event], archive: &[ArchiveItem]) -> Vec<RankedPerson> {
    let participation = Participation::collect(events, archive);

    let mut ranked: Vec<RankedPerson> = people
        .into_iter()
        .map(|person| {
            let breakdown = participation.breakdown(&person);
            RankedPerson {
                merit: breakdown.score(),
                breakdown,
                person,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.merit.cmp(&a.merit));

    tracing::info!(
        people = ranked.len(),
        top = ranked.first().map(|p| p.person.id.as_str()).unwrap_or("-"),
        "people ranked by merit"
    );

    ranked
}
