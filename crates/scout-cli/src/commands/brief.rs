//! Brief command implementation.
//!
//! Assembles the briefing for one fund and writes it to the output
//! directory, or prints it.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use scout_briefing::{
    render_to_file, BriefingAssembler, DocumentRenderer, JsonRenderer, MarkdownRenderer,
};
use scout_core::FundKey;

use super::Context;
use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{briefing_text, print_success};

/// Arguments for the brief command.
#[derive(Args, Debug)]
pub struct BriefArgs {
    /// General partner name, exactly as in the registry
    #[arg(long)]
    pub gp: String,

    /// Fund name, exactly as in the registry
    #[arg(long)]
    pub fund: String,

    /// Output directory (overrides the configuration)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Data directory (overrides the configuration)
    #[arg(short, long, env = "SCOUT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Execute the brief command.
pub fn execute(args: BriefArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.load_repository(args.data_dir.as_deref())?;

    let key = FundKey::new(args.gp, args.fund);
    let briefing = BriefingAssembler::new()
        .with_header(ctx.config.header())
        .assemble(&key, &repo)?;

    if args.stdout {
        if ctx.format == OutputFormat::Table {
            print!("{}", briefing_text(&briefing));
            return Ok(());
        }
        let renderer = renderer_for(ctx.format)?;
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        renderer.render(&briefing, &mut lock)?;
        lock.flush()?;
        return Ok(());
    }

    // A file needs a document format; the terminal table falls back to Markdown.
    let format = match ctx.format {
        OutputFormat::Table => OutputFormat::Markdown,
        other => other,
    };
    let renderer = renderer_for(format)?;
    let dir = args
        .output_dir
        .unwrap_or_else(|| ctx.config.output_dir.clone());
    let path = render_to_file(renderer.as_ref(), &briefing, &dir)?;

    if !ctx.quiet {
        print_success(&format!("Briefing written to {}", path.display()));
    }
    Ok(())
}

fn renderer_for(format: OutputFormat) -> CliResult<Box<dyn DocumentRenderer>> {
    match format {
        OutputFormat::Markdown => Ok(Box::new(MarkdownRenderer::new())),
        OutputFormat::Json => Ok(Box::new(JsonRenderer::new())),
        OutputFormat::Table | OutputFormat::Csv => Err(CliError::UnsupportedFormat {
            command: "brief",
            format: format.as_str(),
        }),
    }
}
