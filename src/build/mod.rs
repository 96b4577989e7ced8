pub mod collection;
pub mod loader;
pub mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{AlmanacError, Result};

pub use collection::*;
pub use loader::*;
pub use manifest::*;

/// What a build wrote.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    pub package: String,
    pub build: String,
    pub people: usize,
    pub events: usize,
    pub archive: usize,
    pub terms: usize,
    pub dangling_links: usize,
    pub records: usize,
    /// Content-addressed name of the search dataset file.
    pub search_file: String,
    #[serde(skip)]
    pub files: Vec<PathBuf>,
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Load the sources in `input_dir` and build the catalog.
pub fn load_catalog(input_dir: &Path) -> Result<Catalog> {
    let manifest = InputManifest::from_dir(input_dir)?;
    let sources = load_sources(input_dir, &manifest)?;
    Ok(Catalog::build(sources))
}

/// Load the sources in `input_dir`, build the catalog and write it to `output_dir`.
pub fn run_build(input_dir: &str, output_dir: &str, pretty: bool) -> Result<BuildSummary> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();

    // 1. Read manifest
    let manifest = InputManifest::from_dir(input_path)?;

    // 2. Load collections
    #[cfg(feature = "parallel")]
    let load_pb = {
        let pb = multi.add(ProgressBar::new(manifest.files().len() as u64));
        pb.set_style(create_progress_style());
        pb.set_prefix("Loading");
        pb.set_message("collections...");
        pb
    };

    #[cfg(feature = "parallel")]
    let sources = load_sources_with_progress(input_path, &manifest, &|_: &Path| load_pb.inc(1))?;
    #[cfg(not(feature = "parallel"))]
    let sources = load_sources(input_path, &manifest)?;

    #[cfg(feature = "parallel")]
    load_pb.finish_with_message(format!("loaded {} files", manifest.files().len()));

    // 3. Derive everything
    let catalog = Catalog::build(sources);
    let dataset = catalog.search_dataset();

    // 4. Write outputs
    fs::create_dir_all(output_path).map_err(|source| AlmanacError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;

    let search_bytes = encode(&dataset, "search dataset", pretty)?;
    let search_file = format!("search-{:08x}.json", crc32fast::hash(&search_bytes));

    let mut outputs: Vec<(String, Vec<u8>)> = vec![
        ("people.json".to_string(), encode(catalog.people(), "people", pretty)?),
        ("projects.json".to_string(), encode(catalog.projects(), "projects", pretty)?),
        ("events.json".to_string(), encode(catalog.events(), "events", pretty)?),
        ("archive.json".to_string(), encode(catalog.archive(), "archive", pretty)?),
        ("glossary.json".to_string(), encode(catalog.glossary(), "glossary", pretty)?),
        (search_file.clone(), search_bytes),
    ];
    for (name, value) in catalog.passthrough().present() {
        outputs.push((format!("{}.json", name), encode(value, name, pretty)?));
    }

    #[cfg(feature = "parallel")]
    let write_pb = {
        let pb = multi.add(ProgressBar::new(outputs.len() as u64 + 1));
        pb.set_style(create_progress_style());
        pb.set_prefix("Writing");
        pb.set_message("files...");
        pb
    };

    let mut files = Vec::with_capacity(outputs.len() + 1);
    for (name, bytes) in &outputs {
        files.push(write_file(output_path, name, bytes)?);
        #[cfg(feature = "parallel")]
        {
            write_pb.set_message(name.clone());
            write_pb.inc(1);
        }
    }

    let summary = BuildSummary {
        package: crate::PACKAGE.to_string(),
        build: crate::BUILD.to_string(),
        people: catalog.people().len(),
        events: catalog.events().len(),
        archive: catalog.archive().len(),
        terms: catalog.glossary().len(),
        dangling_links: catalog.glossary().dangling().len(),
        records: dataset.len(),
        search_file,
        files: Vec::new(),
    };
    files.push(write_file(output_path, "meta.json", &encode(&summary, "meta", true)?)?);

    #[cfg(feature = "parallel")]
    {
        write_pb.inc(1);
        write_pb.finish_with_message("done");
    }

    tracing::info!(
        output = %output_path.display(),
        records = summary.records,
        search_file = %summary.search_file,
        "build complete"
    );

    Ok(BuildSummary { files, ..summary })
}

fn encode<T: Serialize + ?Sized>(value: &T, name: &str, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    bytes.map_err(|source| AlmanacError::Encode {
        name: name.to_string(),
        source,
    })
}

fn write_file(output_path: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = output_path.join(name);
    fs::write(&path, bytes).map_err(|source| AlmanacError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
