//! Markdown renderer.

use std::io::Write;

use scout_core::ScoutResult;

use super::{write_err, DocumentRenderer};
use crate::blocks::{Block, Briefing, Table, TitleBlock};

/// GitHub-flavoured Markdown: centered cover, bold headings, pipe tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self
    }

    fn write_title(out: &mut dyn Write, title: &TitleBlock) -> std::io::Result<()> {
        writeln!(out, "<div align=\"center\">")?;
        writeln!(out)?;
        writeln!(out, "# {}", escape_inline(&title.organization))?;
        writeln!(out)?;
        writeln!(out, "### {}", escape_inline(&title.subtitle))?;
        writeln!(out)?;
        writeln!(out, "#### {}", escape_inline(&title.subject))?;
        writeln!(out)?;
        writeln!(out, "</div>")?;
        writeln!(out)
    }

    fn write_block(out: &mut dyn Write, block: &Block) -> std::io::Result<()> {
        match block {
            Block::Heading { text } => writeln!(out, "## **{}**", escape_inline(text))?,
            Block::Text { text } => writeln!(out, "{}", escape_inline(text))?,
            Block::Table(table) => Self::write_table(out, table)?,
        }
        writeln!(out)
    }

    fn write_table(out: &mut dyn Write, table: &Table) -> std::io::Result<()> {
        let header: Vec<String> = table.header().into_iter().map(escape_cell).collect();
        writeln!(out, "| {} |", header.join(" | "))?;
        let rule = vec!["---"; header.len()];
        writeln!(out, "|{}|", rule.join("|"))?;
        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
            writeln!(out, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, briefing: &Briefing, out: &mut dyn Write) -> ScoutResult<()> {
        Self::write_title(out, &briefing.title).map_err(write_err)?;
        for section in &briefing.sections {
            for block in &section.blocks {
                Self::write_block(out, block).map_err(write_err)?;
            }
        }
        Ok(())
    }
}

/// Escapes text placed in headings, the cover block and paragraphs so it
/// cannot open HTML tags or Markdown emphasis, links or headings.
fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' | '\r' => out.push(' '),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\\' | '`' | '*' | '_' | '#' | '[' | ']' | '|' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

fn escape_cell(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('|', "\\|")
        .replace('\n', "<br>")
}
