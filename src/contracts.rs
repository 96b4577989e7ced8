//! Runtime contracts for the derived collections.
//!
//! Debug-mode assertions checking the properties every catalog build must
//! satisfy. They are zero-cost in release builds (`debug_assert!`) and run
//! after each [`Catalog::build`](crate::Catalog::build) in debug builds.
//!
//! | Contract function        | Property                                          |
//! |--------------------------|---------------------------------------------------|
//! | `check_events_sorted`    | event dates never increase along the sequence     |
//! | `check_archive_sorted`   | publication dates never increase                  |
//! | `check_people_ranked`    | merit never increases                             |
//! | `check_merit_consistent` | stored merit equals the weighted breakdown        |
//! | `check_dataset_complete` | one record per source entity, kinds in order      |

use crate::dataset::{RecordKind, SearchRecord};
use crate::merit::RankedPerson;
use crate::types::{ArchiveItem, Event};

/// Events are newest-first.
#[inline]
pub fn check_events_sorted(events: &[Event]) {
    debug_assert!(
        events.windows(2).all(|w| w[0].date >= w[1].date),
        "Contract violation: events not sorted newest-first"
    );
}

/// Archive items are newest-first.
#[inline]
pub fn check_archive_sorted(archive: &[ArchiveItem]) {
    debug_assert!(
        archive
            .windows(2)
            .all(|w| w[0].published_at >= w[1].published_at),
        "Contract violation: archive not sorted newest-first"
    );
}

/// People are sorted by merit, highest first.
#[inline]
pub fn check_people_ranked(people: &[RankedPerson]) {
    debug_assert!(
        people.windows(2).all(|w| w[0].merit >= w[1].merit),
        "Contract violation: people not sorted by descending merit"
    );
}

/// Each stored merit matches its breakdown.
#[inline]
pub fn check_merit_consistent(people: &[RankedPerson]) {
    for p in people {
        debug_assert_eq!(
            p.merit,
            p.breakdown.score(),
            "Contract violation: merit of {} disagrees with its breakdown",
            p.person.id
        );
    }
}

/// The dataset holds exactly one record per entity, grouped by kind in
/// term → person → event → archive order.
#[inline]
pub fn check_dataset_complete(
    records: &[SearchRecord],
    terms: usize,
    people: usize,
    events: usize,
    archive: usize,
) {
    debug_assert_eq!(
        records.len(),
        terms + people + events + archive,
        "Contract violation: dataset size does not match source collections"
    );
    let expected = std::iter::repeat(RecordKind::Term)
        .take(terms)
        .chain(std::iter::repeat(RecordKind::Person).take(people))
        .chain(std::iter::repeat(RecordKind::Event).take(events))
        .chain(std::iter::repeat(RecordKind::Archive).take(archive));
    debug_assert!(
        records.iter().map(|r| r.kind).eq(expected),
        "Contract violation: dataset kinds out of order"
    );
}
