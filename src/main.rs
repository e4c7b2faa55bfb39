//! Strictly Hanoi - CLI
//!
//! Solves the Tower of Hanoi for a given ring count and narrates each move.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, BufWriter};
use strictly_hanoi::{NarrationConfig, run_str};
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    let stdout = BufWriter::new(io::stdout().lock());

    match run_str(&cli.rings, &config, cli.format, stdout) {
        Ok(outcome) => {
            info!(moves = outcome.moves(), "Done");
            Ok(())
        }
        Err(e) if e.is_defect() => {
            error!(error = %e, "Internal error, traversal state corrupted");
            Err(e).context("Solver defect")
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<NarrationConfig> {
    let config = NarrationConfig::load_or_default(&cli.config)?;
    Ok(if cli.quiet {
        config.with_show_moves(false)
    } else {
        config
    })
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_hanoi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
