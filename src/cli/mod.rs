// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the almanac command-line interface.
//!
//! Three subcommands: `build` to write the derived collections and search
//! dataset, `inspect` to summarise a source directory, and `links` to show one
//! glossary term's outbound links and backlinks.

pub mod display;
pub mod report;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "almanac",
    about = "Glossary cross-references, merit ranking and search dataset builder",
    version
)]
pub struct Cli {
    /// Log progress of each pipeline stage (repeat for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build derived collections and the search dataset
    Build {
        /// Input directory containing manifest.json and collection files
        #[arg(short, long)]
        input: String,

        /// Output directory for the generated JSON files
        #[arg(short, long)]
        output: String,

        /// Pretty-print the generated JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Summarise collections, top people and dangling glossary links
    Inspect {
        /// Input directory containing manifest.json
        #[arg(short, long)]
        input: String,

        /// Number of people to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Show outbound links and backlinks of a glossary term
    Links {
        /// Input directory containing manifest.json
        #[arg(short, long)]
        input: String,

        /// Term id
        term: String,
    },
}
