//! Config command implementation.
//!
//! Shows, locates and initializes the TOML configuration file.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::config::ScoutConfig;
use crate::error::CliError;
use crate::output::{print_header, print_info, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the active configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(explicit, format),
        ConfigCommand::Path => execute_path(explicit),
        ConfigCommand::Init(init_args) => execute_init(init_args, explicit),
    }
}

/// Show the active configuration.
fn execute_show(explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (config, source) = ScoutConfig::resolve(explicit)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        _ => {
            let results = vec![
                KeyValue::new("data_dir", config.data_dir.display().to_string()),
                KeyValue::new("output_dir", config.output_dir.display().to_string()),
                KeyValue::new("organization", config.organization.as_str()),
                KeyValue::new("subtitle", config.subtitle.as_str()),
                KeyValue::new(
                    "source",
                    source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string()),
                ),
            ];
            if format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            print_output(&results, format)?;
        }
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(explicit: Option<&Path>) -> Result<()> {
    let path = ScoutConfig::target_path(explicit);
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write the default configuration.
fn execute_init(args: InitArgs, explicit: Option<&Path>) -> Result<()> {
    let path = ScoutConfig::target_path(explicit);
    if path.exists() && !args.force {
        return Err(CliError::Config(format!(
            "{} already exists; use --force to overwrite",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, ScoutConfig::default().to_toml()?)?;

    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}
