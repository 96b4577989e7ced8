// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for loading sources and managing the process-wide catalog.
//!
//! The derivation pipeline itself never fails: dangling references, missing
//! optional fields and malformed markers all degrade to empty or `None`
//! values. Everything here comes from the edges, i.e. reading files and the
//! one-time installation of the global catalog.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading collections or accessing the global catalog.
#[derive(Debug, Error)]
pub enum AlmanacError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid {format} in {}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        reason: String,
    },
    #[error("failed to encode {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid manifest: {0}")]
    Manifest(String),
    #[error("unsupported collection format for {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("catalog already initialized")]
    AlreadyInitialized,
    #[error("catalog not initialized")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, AlmanacError>;
