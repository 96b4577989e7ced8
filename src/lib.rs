//! Cross-references, rankings and a search dataset for a static content catalog.
//!
//! A community site keeps its people, projects, events, videos and glossary in
//! plain YAML/JSON files. This crate turns those collections into the derived
//! views the site renders:
//!
//! - glossary descriptions with `[[key|link]]` markers resolved to term ids,
//! - people ranked by *merit* (roles, talks and video appearances),
//! - one newest-first event timeline and one newest-first video archive,
//! - a flat search dataset covering all four kinds.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  types.rs    │──▶│ timeline.rs  │──▶│  merit.rs    │──▶│ dataset.rs   │
//! │ (Person,     │   │ (events,     │   │ (RankedPerson│   │ (SearchRecord│
//! │  Event, ...) │   │  archive)    │   │  merit)      │   │  )           │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!        │                                                        ▲
//!        ▼                                                        │
//! ┌──────────────┐   ┌──────────────┐                             │
//! │  links.rs    │──▶│ glossary.rs  │─────────────────────────────┘
//! │ (AliasTable, │   │ (GlossaryGraph│
//! │  markers)    │   │  backlinks)  │
//! └──────────────┘   └──────────────┘
//!
//! catalog.rs runs the whole pipeline once; build/ loads files and writes output.
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use almanac::{build::load_catalog, Catalog};
//!
//! let catalog = load_catalog(Path::new("data"))?;
//! let catalog = catalog.install()?;          // process-wide, exactly once
//!
//! for record in catalog.search_dataset() {
//!     println!("{} {}", record.base_url, record.name);
//! }
//! ```

pub mod build;
pub mod catalog;
pub mod contracts;
pub mod dataset;
pub mod error;
pub mod glossary;
pub mod links;
pub mod merit;
pub mod testing;
pub mod timeline;
mod types;
mod utils;

pub use catalog::{Catalog, Passthrough, Sources};
pub use dataset::{build_search_dataset, Icon, RecordKind, SearchRecord};
pub use error::{AlmanacError, Result};
pub use glossary::{GlossaryEntry, GlossaryGraph};
pub use links::{markers, resolve_description, resolve_links, AliasTable, Marker, ResolvedLink};
pub use merit::{
    merit_of, rank_people, MeritBreakdown, RankedPerson, ARCHIVE_WEIGHT, ROLE_WEIGHT,
    SPEAKER_WEIGHT,
};
pub use timeline::{aggregate_archive, aggregate_events, newest_first};
pub use types::{ArchiveItem, Event, Extra, GlossaryTerm, Person, Project};
pub use utils::fold_case;

/// Crate name, fixed at compile time.
pub const PACKAGE: &str = env!("CARGO_PKG_NAME");

/// Build identifier injected by `build.rs` (`ALMANAC_BUILD_ID`, git revision, or `dev`).
pub const BUILD: &str = env!("ALMANAC_BUILD_ID");
