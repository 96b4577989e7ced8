use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AlmanacError, Result};

/// On-disk format of a collection file, picked by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(AlmanacError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Yaml => "YAML",
            Format::Json => "JSON",
        }
    }
}

/// Read one collection file into `T`.
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| AlmanacError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_error = |reason: String| AlmanacError::Parse {
        path: path.to_path_buf(),
        format: format.name(),
        reason,
    };
    match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
    }
}
