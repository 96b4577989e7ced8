// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal reports for `inspect` and `links`.

use anyhow::{bail, Result};

use almanac::{Catalog, RecordKind, SearchRecord};

use super::display::{
    kind_badge, link_status, merit_value, pad_left, pad_right, paint, row, section_bot,
    section_mid, section_top, strong, title, truncate, Tone, BOX_WIDTH,
};

/// Counts, the merit leaderboard and every dangling glossary link.
pub fn print_inspect(catalog: &Catalog, top: usize) {
    let records = catalog.search_dataset();

    title(&format!("{} {}", almanac::PACKAGE, almanac::BUILD));
    println!();

    section_top("COLLECTIONS");
    for kind in [
        RecordKind::Term,
        RecordKind::Person,
        RecordKind::Event,
        RecordKind::Archive,
    ] {
        row(&format!(
            "  {} {}",
            pad_right(&kind_badge(kind), 10),
            pad_left(&count_of(&records, kind).to_string(), 6)
        ));
    }
    row(&format!(
        "  {} {}",
        pad_right("projects", 10),
        pad_left(&catalog.projects().len().to_string(), 6)
    ));
    row(&format!(
        "  {} {}",
        pad_right(&strong(Tone::Warn, "records"), 10),
        pad_left(&records.len().to_string(), 6)
    ));

    section_mid(&format!("TOP {}", top.min(catalog.people().len())));
    if catalog.people().is_empty() {
        row(&paint(Tone::Muted, "  (no people)"));
    }
    for (rank, ranked) in catalog.people().iter().take(top).enumerate() {
        let b = ranked.breakdown;
        row(&format!(
            "  {:>3}. {} {} {}",
            rank + 1,
            pad_right(&truncate(&ranked.person.id, 28), 28),
            merit_value(ranked.merit),
            paint(
                Tone::Muted,
                &format!("roles {} · talks {} · videos {}", b.roles, b.talks, b.videos)
            )
        ));
    }

    let dangling = catalog.glossary().dangling();
    section_mid(&format!("DANGLING LINKS ({})", dangling.len()));
    if dangling.is_empty() {
        row(&paint(Tone::Muted, "  (none)"));
    }
    for (term_id, link) in dangling {
        let line = format!("  {}: {}", term_id, link_status(link));
        row(&truncate_styled(&line));
    }
    section_bot();
}

/// Outbound links of one term and the terms pointing back at it.
pub fn print_links(catalog: &Catalog, term_id: &str) -> Result<()> {
    let Some(entry) = catalog.term(term_id) else {
        bail!("unknown glossary term '{}'", term_id);
    };

    title(&format!("{} ({})", entry.term.name, entry.term.id));
    println!();

    section_top("LINKS");
    if entry.links.is_empty() {
        row(&paint(Tone::Muted, "  (none)"));
    }
    for link in &entry.links {
        row(&truncate_styled(&format!("  {}", link_status(link))));
    }

    let backlinks = catalog.glossary().backlinks(term_id);
    section_mid("BACKLINKS");
    if backlinks.is_empty() {
        row(&paint(Tone::Muted, "  (none)"));
    }
    for id in backlinks {
        row(&format!("  ← {}", id));
    }
    section_bot();

    Ok(())
}

fn count_of(records: &[SearchRecord], kind: RecordKind) -> usize {
    records.iter().filter(|r| r.kind == kind).count()
}

/// Styled rows are only truncated when they carry no escapes.
fn truncate_styled(line: &str) -> String {
    if line.contains('\x1b') {
        line.to_string()
    } else {
        truncate(line, BOX_WIDTH)
    }
}
