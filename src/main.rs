use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use almanac::build::{load_catalog, run_build};

mod cli;
use cli::{report, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Build {
            input,
            output,
            pretty,
        } => {
            let summary = run_build(&input, &output, pretty)
                .with_context(|| format!("building '{}' into '{}'", input, output))?;
            for path in &summary.files {
                eprintln!("  ✓ {}", path.display());
            }
            eprintln!();
            eprintln!("✅ Build complete");
            eprintln!(
                "   {} people │ {} events │ {} videos │ {} terms │ {} records",
                summary.people, summary.events, summary.archive, summary.terms, summary.records
            );
            if summary.dangling_links > 0 {
                eprintln!(
                    "⚠️  {} dangling glossary link(s); run `almanac inspect` for details",
                    summary.dangling_links
                );
            }
        }
        Commands::Inspect { input, top } => {
            let catalog = load_catalog(Path::new(&input))
                .with_context(|| format!("loading '{}'", input))?;
            report::print_inspect(&catalog, top);
        }
        Commands::Links { input, term } => {
            let catalog = load_catalog(Path::new(&input))
                .with_context(|| format!("loading '{}'", input))?;
            report::print_links(&catalog, &term)?;
        }
    }
    Ok(())
}

/// Logs go to stderr. `ALMANAC_LOG` wins over `-v`/`-vv`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("ALMANAC_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
