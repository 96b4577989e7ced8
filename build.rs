//! Build script for the almanac crate.
//!
//! Injects the build identifier exposed as `almanac::BUILD`:
//! 1. `ALMANAC_BUILD_ID` from the environment, if set (CI pipelines)
//! 2. Short git revision of the working tree
//! 3. `dev` otherwise

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=ALMANAC_BUILD_ID");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let build_id = env::var("ALMANAC_BUILD_ID")
        .ok()
        .filter(|id| !id.trim().is_empty())
        .or_else(git_revision)
        .unwrap_or_else(|| "dev".to_string());

    println!("cargo:rustc-env=ALMANAC_BUILD_ID={build_id}");
}

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}
