// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference markers: `[[key]]` and `[[key|link]]` inside free text.
//!
//! A marker names another glossary term. Resolution looks the *target* string
//! (the link text when present, otherwise the key) up in an [`AliasTable`],
//! which maps every id, name and keyword of every term, case-folded, to the
//! owning term.
//!
//! # Marker grammar
//!
//! ```text
//! marker  := "[[" key ( "|" link )? "]]"
//! key     := [^|\]]+
//! link    := [^\]]*
//! ```
//!
//! Anything else (`[[]]`, `[[unterminated`, `[single]`) is plain text and
//! produces nothing. An empty link (`[[key|]]`) is kept as `Some("")` so the
//! marker round-trips, but lookup and display fall back to the key.
//!
//! # Tie-break
//!
//! When several terms share an alias, the one that comes first in the glossary
//! wins. The table is built front to back and never overwrites an alias, so
//! this falls out of construction order rather than lookup order.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::GlossaryTerm;
use crate::utils::fold_case;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^|\]]+)(?:\|([^\]]*))?\]\]").expect("marker pattern compiles")
});

/// One marker occurrence, borrowed from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    pub key: &'a str,
    /// Text after the first `|`; `None` when there is no `|`.
    pub link: Option<&'a str>,
    /// Byte range of the whole marker, brackets included.
    pub span: Range<usize>,
}

impl<'a> Marker<'a> {
    /// The string looked up in the alias table.
    pub fn target(&self) -> &'a str {
        self.link.filter(|l| !l.is_empty()).unwrap_or(self.key)
    }
}

/// Scan `text` for markers, in order of appearance.
pub fn markers(text: &str) -> impl Iterator<Item = Marker<'_>> {
    MARKER_RE.captures_iter(text).filter_map(|cap| {
        let whole = cap.get(0)?;
        let key = cap.get(1)?.as_str();
        let link = cap.get(2).map(|m| m.as_str());
        Some(Marker {
            key,
            link,
            span: whole.range(),
        })
    })
}

/// Case-insensitive alias → term id lookup over a whole glossary.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    by_alias: HashMap<String, String>,
}

impl AliasTable {
    pub fn new(terms: &[GlossaryTerm]) -> Self {
        let mut by_alias = HashMap::new();
        for term in terms {
            for alias in term.aliases() {
                by_alias
                    .entry(fold_case(alias))
                    .or_insert_with(|| term.id.clone());
            }
        }
        Self { by_alias }
    }

    /// Resolve a target string to the id of the first term answering to it.
    pub fn lookup(&self, target: &str) -> Option<&str> {
        self.by_alias.get(&fold_case(target)).map(String::as_str)
    }

    /// Number of distinct folded aliases.
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

/// A marker after lookup.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedLink {
    /// First segment of the marker.
    pub key: String,
    /// Explicit link text, if the marker had one.
    pub link: Option<String>,
    /// Id of the matched term; `None` for a dangling link.
    pub target: Option<String>,
}

impl ResolvedLink {
    pub fn is_dangling(&self) -> bool {
        self.target.is_none()
    }

    /// Text to show for the link: the explicit link text, else the key.
    pub fn label(&self) -> &str {
        match self.link.as_deref() {
            Some(link) if !link.is_empty() => link,
            _ => &self.key,
        }
    }
}

/// Resolve every marker in `description` against `table`.
pub fn resolve_links(description: &str, table: &AliasTable) -> Vec<ResolvedLink> {
    markers(description)
        .map(|marker| {
            let target = table.lookup(marker.target()).map(str::to_string);
            if target.is_none() {
                tracing::debug!(key = marker.key, link = ?marker.link, "dangling reference");
            }
            ResolvedLink {
                key: marker.key.to_string(),
                link: marker.link.map(str::to_string),
                target,
            }
        })
        .collect()
}

/// One-off resolution against a glossary slice.
///
/// Builds a fresh [`AliasTable`]; prefer [`resolve_links`] with a shared table
/// when resolving more than one description.
pub fn resolve_description(description: &str, terms: &[GlossaryTerm]) -> Vec<ResolvedLink> {
    resolve_links(description, &AliasTable::new(terms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_term;

    #[test]
    fn test_markers_simple_and_labelled() {
        let found: Vec<_> = markers("See [[B]] and [[C|Other Name]].").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].key, "B");
        assert_eq!(found[0].link, None);
        assert_eq!(found[1].key, "C");
        assert_eq!(found[1].link, Some("Other Name"));
        assert_eq!(found[1].target(), "Other Name");
    }

    #[test]
    fn test_marker_span_covers_brackets() {
        let text = "x [[a]] y";
        let m = markers(text).next().unwrap();
        assert_eq!(&text[m.span], "[[a]]");
    }

    #[test]
    fn test_malformed_markers_are_skipped() {
        let text = "[[]] [[open [single] [[a|b]c]] [[ok]]";
        let keys: Vec<_> = markers(text).map(|m| m.key).collect();
        assert_eq!(keys, vec!["ok"]);
    }

    #[test]
    fn test_empty_link_falls_back_to_key() {
        let m = markers("[[zk|]]").next().unwrap();
        assert_eq!(m.link, Some(""));
        assert_eq!(m.target(), "zk");
    }

    #[test]
    fn test_empty_link_resolves_by_key() {
        let terms = vec![make_term("zk", "Zero Knowledge", &[], "")];
        let links = resolve_description("[[zk|]]", &terms);
        assert_eq!(
            links,
            vec![ResolvedLink {
                key: "zk".to_string(),
                link: Some(String::new()),
                target: Some("zk".to_string()),
            }]
        );
        assert_eq!(links[0].label(), "zk");
    }

    #[test]
    fn test_link_may_contain_pipe() {
        let m = markers("[[a|b|c]]").next().unwrap();
        assert_eq!(m.link, Some("b|c"));
    }

    #[test]
    fn test_alias_table_is_case_insensitive() {
        let terms = vec![make_term("zk", "Zero Knowledge", &["ZKP"], "")];
        let table = AliasTable::new(&terms);
        assert_eq!(table.lookup("ZK"), Some("zk"));
        assert_eq!(table.lookup("zero knowledge"), Some("zk"));
        assert_eq!(table.lookup("zkp"), Some("zk"));
        assert_eq!(table.lookup("zero"), None);
    }

    #[test]
    fn test_alias_table_first_term_wins() {
        let terms = vec![
            make_term("first", "First", &["shared"], ""),
            make_term("second", "Second", &["Shared"], ""),
        ];
        let table = AliasTable::new(&terms);
        assert_eq!(table.lookup("SHARED"), Some("first"));
    }

    #[test]
    fn test_alias_must_match_whole_string() {
        let terms = vec![make_term("eth", "Ethereum", &[], "")];
        let table = AliasTable::new(&terms);
        assert_eq!(table.lookup("Ethereum Classic"), None);
        assert_eq!(table.lookup("eth.*"), None);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let terms = vec![make_term("cpp", "C++", &["(a|b)"], "")];
        let table = AliasTable::new(&terms);
        assert_eq!(table.lookup("c++"), Some("cpp"));
        assert_eq!(table.lookup("(A|B)"), Some("cpp"));
        assert_eq!(table.lookup("a"), None);
    }

    #[test]
    fn test_resolve_links_dangling() {
        let terms = vec![make_term("a", "A", &[], "")];
        let links = resolve_description("[[nope]] [[a]]", &terms);
        assert_eq!(links.len(), 2);
        assert!(links[0].is_dangling());
        assert_eq!(links[1].target.as_deref(), Some("a"));
    }

    #[test]
    fn test_resolve_links_link_takes_precedence_over_key() {
        let terms = vec![
            make_term("a", "A", &[], ""),
            make_term("b", "B", &[], ""),
        ];
        let links = resolve_description("[[a|b]]", &terms);
        assert_eq!(links[0].target.as_deref(), Some("b"));
        assert_eq!(links[0].label(), "b");
    }

    #[test]
    fn test_resolve_links_idempotent() {
        let terms = vec![make_term("a", "A", &["alpha"], "")];
        let table = AliasTable::new(&terms);
        let text = "[[Alpha]] then [[x|A]] then [[missing]]";
        assert_eq!(resolve_links(text, &table), resolve_links(text, &table));
    }

    #[test]
    fn test_resolved_link_serializes_nulls() {
        let link = ResolvedLink {
            key: "B".to_string(),
            link: None,
            target: Some("b".to_string()),
        };
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"key":"B","link":null,"target":"b"}"#);
    }
}
