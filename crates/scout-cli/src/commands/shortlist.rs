//! Shortlist command implementation.
//!
//! Narrows the fund registry by geography, strategy and vintage range.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use scout_core::format::format_amount;
use scout_core::{Fund, FundFilter, Repository};

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{print_header, print_output, print_warning, KeyValue};

/// Arguments for the shortlist command.
#[derive(Args, Debug)]
pub struct ShortlistArgs {
    /// Geography to keep ("any" for all)
    #[arg(short, long)]
    pub geography: Option<String>,

    /// Strategy to keep ("any" for all)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Earliest vintage, inclusive
    #[arg(long = "from")]
    pub vintage_from: Option<i32>,

    /// Latest vintage, inclusive
    #[arg(long = "to")]
    pub vintage_to: Option<i32>,

    /// Data directory (overrides the configuration)
    #[arg(short, long, env = "SCOUT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// List the available filter values instead of funds
    #[arg(long)]
    pub choices: bool,
}

impl ShortlistArgs {
    /// The filter these arguments describe.
    pub fn filter(&self) -> FundFilter {
        let mut filter = FundFilter::new().with_vintages(self.vintage_from, self.vintage_to);
        if let Some(geography) = &self.geography {
            filter = filter.with_geography(geography.as_str());
        }
        if let Some(strategy) = &self.strategy {
            filter = filter.with_strategy(strategy.as_str());
        }
        filter
    }
}

/// One shortlisted fund.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ShortlistRow {
    #[tabled(rename = "GP")]
    #[serde(rename = "GP")]
    pub gp: String,
    #[tabled(rename = "Fund")]
    #[serde(rename = "Fund")]
    pub fund: String,
    #[tabled(rename = "Strategy")]
    #[serde(rename = "Strategy")]
    pub strategy: String,
    #[tabled(rename = "Geography")]
    #[serde(rename = "Geography")]
    pub geography: String,
    #[tabled(rename = "Vintage")]
    #[serde(rename = "Vintage")]
    pub vintage: i32,
    #[tabled(rename = "Size")]
    #[serde(rename = "Size")]
    pub size: String,
    #[tabled(rename = "Selection")]
    #[serde(rename = "Selection")]
    pub selection: String,
}

impl From<&Fund> for ShortlistRow {
    fn from(fund: &Fund) -> Self {
        Self {
            gp: fund.gp.clone(),
            fund: fund.name.clone(),
            strategy: fund.strategy.clone(),
            geography: fund.geography.clone(),
            vintage: fund.vintage,
            size: format_amount(fund.fund_size, &fund.currency),
            selection: fund.selection_label(),
        }
    }
}

/// Execute the shortlist command.
pub fn execute(args: ShortlistArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.load_repository(args.data_dir.as_deref())?;

    if args.choices {
        return print_choices(&repo, ctx.format);
    }

    let rows: Vec<ShortlistRow> = repo
        .shortlist(&args.filter())
        .into_iter()
        .map(ShortlistRow::from)
        .collect();

    if rows.is_empty() && !ctx.quiet {
        print_warning("No funds match the filter");
    }

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header(&format!("Shortlist ({} of {} funds)", rows.len(), repo.funds().len()));
    }
    print_output(&rows, ctx.format)
}

fn print_choices(repo: &Repository, format: OutputFormat) -> Result<()> {
    let vintages = repo
        .vintage_range()
        .map_or_else(|| "—".to_string(), |(min, max)| format!("{min}–{max}"));

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "geographies": repo.geographies(),
                "strategies": repo.strategies(),
                "vintage_range": repo.vintage_range(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        _ => {
            let rows = vec![
                KeyValue::new("Geographies", repo.geographies().join(", ")),
                KeyValue::new("Strategies", repo.strategies().join(", ")),
                KeyValue::new("Vintages", vintages),
            ];
            print_output(&rows, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rust_decimal_macros::dec;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ShortlistArgs,
    }

    fn parse(argv: &[&str]) -> ShortlistArgs {
        let mut full = vec!["shortlist"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).args
    }

    #[test]
    fn test_filter_from_args() {
        let filter = parse(&["--geography", "Europe", "--strategy", "any", "--from", "2018"]).filter();
        assert_eq!(filter.geography.as_deref(), Some("Europe"));
        assert_eq!(filter.strategy, None);
        assert_eq!(filter.vintage_from, Some(2018));
        assert_eq!(filter.vintage_to, None);
    }

    #[test]
    fn test_row_from_fund() {
        let fund = Fund::new("Acme Capital", "Acme Fund III")
            .with_strategy("Buyout")
            .with_geography("North America")
            .with_vintage(2019)
            .with_size(dec!(500), "USD");
        let row = ShortlistRow::from(&fund);
        assert_eq!(row.size, "500 USD");
        assert_eq!(row.selection, "Acme Capital — Acme Fund III (2019)");
    }
}
