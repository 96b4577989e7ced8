// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The glossary as a graph: every term plus the terms its description points at.
//!
//! Building the graph resolves each description against an alias table of the
//! *whole* glossary, so a term can reference itself or a term defined further
//! down the file. The input terms are moved into [`GlossaryEntry`] values next
//! to their links; nothing is patched in place.

use serde::{Deserialize, Serialize};

use crate::links::{resolve_links, AliasTable, ResolvedLink};
use crate::types::GlossaryTerm;

/// A term together with its resolved outbound links.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GlossaryEntry {
    #[serde(flatten)]
    pub term: GlossaryTerm,
    pub links: Vec<ResolvedLink>,
}

/// Resolved glossary, in source order.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct GlossaryGraph {
    entries: Vec<GlossaryEntry>,
}

impl GlossaryGraph {
    /// Resolve every description against the whole glossary.
    pub fn build(terms: Vec<GlossaryTerm>) -> Self {
        let table = AliasTable::new(&terms);
        let entries: Vec<GlossaryEntry> = terms
            .into_iter()
            .map(|term| {
                let links = resolve_links(&term.description, &table);
                GlossaryEntry { term, links }
            })
            .collect();

        let link_count: usize = entries.iter().map(|e| e.links.len()).sum();
        tracing::info!(
            terms = entries.len(),
            aliases = table.len(),
            links = link_count,
            "glossary graph built"
        );

        Self { entries }
    }

    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.iter()
    }

    /// Entry by term id (first one if ids repeat).
    pub fn get(&self, id: &str) -> Option<&GlossaryEntry> {
        self.entries.iter().find(|e| e.term.id == id)
    }

    /// Ids of terms linking to `id`, in glossary order, each listed once.
    pub fn backlinks(&self, id: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.links.iter().any(|l| l.target.as_deref() == Some(id)))
            .map(|e| e.term.id.as_str())
            .collect()
    }

    /// Every unresolved link, paired with the id of the term that contains it.
    pub fn dangling(&self) -> Vec<(&str, &ResolvedLink)> {
        self.entries
            .iter()
            .flat_map(|e| {
                e.links
                    .iter()
                    .filter(|l| l.is_dangling())
                    .map(move |l| (e.term.id.as_str(), l))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a GlossaryGraph {
    type Item = &'a GlossaryEntry;
    type IntoIter = std::slice::Iter<'a, GlossaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
