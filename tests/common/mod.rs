//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use almanac::build::load_catalog;
use almanac::Catalog;

// Re-export canonical test utilities from almanac::testing
pub use almanac::testing::{
    make_event, make_person, make_project, make_term, make_video, sample_sources,
};

// ============================================================================
// FIXTURE DIRECTORIES
// ============================================================================

/// Root of the on-disk build fixtures.
pub const FIXTURES_DIR: &str = "data/fixtures";

pub fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

/// A complete, valid input directory.
pub fn valid_fixture() -> PathBuf {
    fixture("valid")
}

/// Catalog built from the valid fixture (loaded once per test binary).
pub static FIXTURE_CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| load_catalog(&valid_fixture()).expect("valid fixture should load"));

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `dates` never increases, with `None` only at the tail.
pub fn assert_newest_first(dates: &[Option<&str>]) {
    for pair in dates.windows(2) {
        match (pair[0], pair[1]) {
            (Some(a), Some(b)) => assert!(a >= b, "{:?} sorted before {:?}", a, b),
            (None, Some(b)) => panic!("undated item sorted before {:?}", b),
            _ => {}
        }
    }
}
