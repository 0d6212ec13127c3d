//! Scout CLI - shortlist funds and produce secondary candidate briefings.
//!
//! # Usage
//!
//! ```bash
//! # List buyout funds from 2018 onwards
//! scout shortlist --strategy Buyout --from 2018
//!
//! # Write a Markdown briefing into the output directory
//! scout brief --gp "Acme Capital" --fund "Acme Fund III"
//!
//! # Print the JSON block sequence instead
//! scout --format json brief --gp "Acme Capital" --fund "Acme Fund III" --stdout
//!
//! # Write a starter configuration file
//! scout config init
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands, OutputFormat};
use commands::Context;
use config::ScoutConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.quiet);

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Shortlist(args) => {
            commands::shortlist::execute(args, &context(cli.config.as_deref(), format, quiet)?)?
        }
        Commands::Brief(args) => {
            commands::brief::execute(args, &context(cli.config.as_deref(), format, quiet)?)?
        }
        // Config commands manage the file itself and must not require a readable one.
        Commands::Config(args) => commands::config::execute(args, cli.config.as_deref(), format)?,
    }

    Ok(())
}

fn context(config_path: Option<&Path>, format: OutputFormat, quiet: bool) -> Result<Context> {
    let (config, source) = ScoutConfig::resolve(config_path)?;
    debug!(?source, "Configuration resolved");
    Ok(Context {
        format,
        quiet,
        config,
    })
}

/// Logs go to stderr so stdout stays clean for piping.
fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info,scout=debug" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
