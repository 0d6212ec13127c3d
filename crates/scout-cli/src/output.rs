//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use scout_briefing::{Block, Briefing};

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Markdown => print_markdown(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints data as a Markdown pipe table.
fn print_markdown<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("_No results._");
        return Ok(());
    }

    println!("{}", Table::new(data).with(Style::markdown()));
    Ok(())
}

/// Draws a briefing for the terminal: cover lines, bold headings, boxed tables.
pub fn briefing_text(briefing: &Briefing) -> String {
    let mut out = String::new();
    let title = &briefing.title;
    out.push_str(&format!(
        "{}\n{}\n{}\n",
        title.organization.bold(),
        title.subtitle,
        title.subject.italic()
    ));

    for section in &briefing.sections {
        for block in &section.blocks {
            match block {
                Block::Heading { text } => {
                    out.push_str(&format!("\n{}\n", text.bold().underline()));
                }
                Block::Text { text } => {
                    out.push_str(text);
                    out.push('\n');
                }
                Block::Table(table) => {
                    let records = std::iter::once(
                        table.header().into_iter().map(str::to_string).collect::<Vec<_>>(),
                    )
                    .chain(table.rows.iter().cloned());
                    let drawn = Table::from_iter(records).with(Style::rounded()).to_string();
                    out.push_str(&drawn);
                    out.push('\n');
                }
            }
        }
    }
    out
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
