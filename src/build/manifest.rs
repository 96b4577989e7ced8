use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AlmanacError, Result};

/// Manifest format understood by this build.
pub const MANIFEST_VERSION: u32 = 1;

/// File name of the manifest inside an input directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json`: which file holds which collection.
///
/// Paths are relative to the input directory.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputManifest {
    pub version: u32,
    pub people: String,
    pub projects: String,
    pub glossary: String,
    #[serde(default)]
    pub meetups: Vec<String>,
    /// Archive sources, highest priority first.
    #[serde(default)]
    pub archive: Vec<String>,
    #[serde(default)]
    pub articles: Option<String>,
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default)]
    pub friends: Option<String>,
    #[serde(default)]
    pub instances: Option<String>,
    #[serde(default)]
    pub guilds: Option<String>,
    #[serde(default)]
    pub topics: Option<String>,
}

impl InputManifest {
    /// Read and validate `manifest.json` from `input_dir`.
    pub fn from_dir(input_dir: &Path) -> Result<Self> {
        let path = input_dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|source| AlmanacError::Io {
            path: path.clone(),
            source,
        })?;
        let manifest: InputManifest =
            serde_json::from_str(&content).map_err(|e| AlmanacError::Parse {
                path,
                format: "JSON",
                reason: e.to_string(),
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != MANIFEST_VERSION {
            return Err(AlmanacError::Manifest(format!(
                "unsupported version {} (expected {})",
                self.version, MANIFEST_VERSION
            )));
        }
        if let Some(empty) = self.files().into_iter().find(|f| f.trim().is_empty()) {
            return Err(AlmanacError::Manifest(format!(
                "empty file path in manifest ({:?})",
                empty
            )));
        }
        Ok(())
    }

    /// Every referenced file, in load order.
    pub fn files(&self) -> Vec<&str> {
        let mut files = vec![
            self.people.as_str(),
            self.projects.as_str(),
            self.glossary.as_str(),
        ];
        files.extend(self.meetups.iter().map(String::as_str));
        files.extend(self.archive.iter().map(String::as_str));
        files.extend(
            [
                &self.articles,
                &self.config,
                &self.friends,
                &self.instances,
                &self.guilds,
                &self.topics,
            ]
            .into_iter()
            .filter_map(|f| f.as_deref()),
        );
        files
    }
}
