// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading every collection named by a manifest.
//!
//! File reads and parses are independent, so the multi-file slots (meetups and
//! archive sources) fan out over Rayon when the `parallel` feature is on.
//! `par_iter().collect()` keeps input order, so archive priority never depends
//! on which file finished first.
//!
//! Any failure is fatal and names the file: a half-loaded catalog would rank
//! people against missing events without anyone noticing.

use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::collection::read_collection;
use super::InputManifest;
use crate::catalog::{Passthrough, Sources};
use crate::error::Result;
use crate::types::Event;

/// Load all sources listed in `manifest`.
pub fn load_sources(input_dir: &Path, manifest: &InputManifest) -> Result<Sources> {
    load_sources_with_progress(input_dir, manifest, &|_: &Path| {})
}

/// Load all sources, calling `on_file` after each file is parsed.
///
/// `on_file` may be called from several threads at once.
pub fn load_sources_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    on_file: &(dyn Fn(&Path) + Sync),
) -> Result<Sources> {
    let load = |file: &str| -> Result<Value> { load_one(input_dir, file, on_file) };
    let optional = |file: &Option<String>| -> Result<Value> {
        file.as_deref().map_or(Ok(Value::Null), load)
    };

    let sources = Sources {
        people: load_one(input_dir, &manifest.people, on_file)?,
        projects: load_one(input_dir, &manifest.projects, on_file)?,
        glossary: load_one(input_dir, &manifest.glossary, on_file)?,
        meetups: load_many::<Vec<Event>>(input_dir, &manifest.meetups, on_file)?
            .into_iter()
            .flatten()
            .collect(),
        archive: load_many(input_dir, &manifest.archive, on_file)?,
        passthrough: Passthrough {
            articles: optional(&manifest.articles)?,
            config: optional(&manifest.config)?,
            friends: optional(&manifest.friends)?,
            instances: optional(&manifest.instances)?,
            guilds: optional(&manifest.guilds)?,
            topics: optional(&manifest.topics)?,
        },
    };

    tracing::info!(
        people = sources.people.len(),
        projects = sources.projects.len(),
        terms = sources.glossary.len(),
        meetups = sources.meetups.len(),
        archive_sources = sources.archive.len(),
        "sources loaded"
    );

    Ok(sources)
}

fn load_one<T: DeserializeOwned>(
    input_dir: &Path,
    file: &str,
    on_file: &(dyn Fn(&Path) + Sync),
) -> Result<T> {
    let path = input_dir.join(file);
    let value = read_collection(&path)?;
    tracing::debug!(path = %path.display(), "loaded collection");
    on_file(&path);
    Ok(value)
}

#[cfg(feature = "parallel")]
fn load_many<T: DeserializeOwned + Send>(
    input_dir: &Path,
    files: &[String],
    on_file: &(dyn Fn(&Path) + Sync),
) -> Result<Vec<T>> {
    files
        .par_iter()
        .map(|file| load_one(input_dir, file, on_file))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn load_many<T: DeserializeOwned>(
    input_dir: &Path,
    files: &[String],
    on_file: &(dyn Fn(&Path) + Sync),
) -> Result<Vec<T>> {
    files
        .iter()
        .map(|file| load_one(input_dir, file, on_file))
        .collect()
}
