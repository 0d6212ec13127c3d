//! Abstract content blocks handed to a document renderer.
//!
//! Column titles and widths are part of the layout contract with the
//! downstream renderer and must not drift.

use rust_decimal::Decimal;
use serde::Serialize;

use scout_core::format::PLACEHOLDER;
use scout_core::FundKey;

/// Visual style shared by every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStyle {
    /// Header row background colour.
    pub header_background: &'static str,
    /// Header row text colour.
    pub header_text: &'static str,
    /// Header row font.
    pub header_font: &'static str,
    /// Grid line width in points.
    pub grid_width_pt: Decimal,
    /// Grid line colour.
    pub grid_color: &'static str,
    /// Body row backgrounds, cycled.
    pub row_backgrounds: [&'static str; 2],
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_background: "#f2f2f2",
            header_text: "#000000",
            header_font: "Helvetica-Bold",
            grid_width_pt: Decimal::new(25, 2),
            grid_color: "#cccccc",
            row_backgrounds: ["#ffffff", "#fbfbfb"],
        }
    }
}

/// Centered cover block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleBlock {
    /// Organization name.
    pub organization: String,
    /// Document subtitle.
    pub subtitle: String,
    /// `"{GP} — {Fund}"` line.
    pub subject: String,
}

/// A table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Width in centimetres.
    pub width_cm: Decimal,
}

/// A table: one header row plus body rows of plain-text cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Columns, left to right.
    pub columns: Vec<Column>,
    /// Body rows; every row has one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table from `(title, width_cm)` pairs.
    #[must_use]
    pub fn new(columns: &[(&str, Decimal)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|(title, width_cm)| Column {
                    title: (*title).to_string(),
                    width_cm: *width_cm,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a body row. The row width is fixed at the call site and must
    /// equal the column count (checked in debug builds).
    pub fn push_row<const N: usize>(&mut self, row: [String; N]) {
        debug_assert_eq!(N, self.columns.len(), "row width must match column count");
        self.rows.push(Vec::from(row));
    }

    /// Appends a row of placeholders if the table has no body rows.
    pub fn fill_if_empty(&mut self) {
        if self.rows.is_empty() {
            self.rows.push(vec![PLACEHOLDER.to_string(); self.columns.len()]);
        }
    }

    /// Header texts, left to right.
    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.title.as_str()).collect()
    }

    /// Returns true if the body is exactly one row of placeholders.
    pub fn is_placeholder(&self) -> bool {
        self.rows.len() == 1 && self.rows[0].iter().all(|cell| cell == PLACEHOLDER)
    }
}

/// One unit of document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Bold section heading.
    Heading {
        /// Heading text, e.g. `"1. GP Overview"`.
        text: String,
    },
    /// A styled table.
    Table(Table),
    /// A body paragraph.
    Text {
        /// Paragraph text.
        text: String,
    },
}

/// A numbered section: a heading block followed by content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section number, 1-based.
    pub number: u8,
    /// Section title without its number.
    pub title: String,
    /// Blocks in order; the first is always the heading.
    pub blocks: Vec<Block>,
}

impl Section {
    /// Creates a section holding only its heading.
    #[must_use]
    pub fn new(number: u8, title: &str) -> Self {
        Self {
            number,
            title: title.to_string(),
            blocks: vec![Block::Heading {
                text: format!("{number}. {title}"),
            }],
        }
    }

    /// Appends a table.
    #[must_use]
    pub fn with_table(mut self, table: Table) -> Self {
        self.blocks.push(Block::Table(table));
        self
    }

    /// Appends a paragraph.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Text { text: text.into() });
        self
    }

    /// The heading text.
    pub fn heading(&self) -> &str {
        match self.blocks.first() {
            Some(Block::Heading { text }) => text,
            _ => "",
        }
    }

    /// Tables in this section, in order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Paragraphs in this section, in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// A fully assembled briefing, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Briefing {
    /// The target fund.
    pub fund: FundKey,
    /// Cover block.
    pub title: TitleBlock,
    /// Sections 1–7 in order.
    pub sections: Vec<Section>,
    /// Style applied to every table.
    pub table_style: TableStyle,
}

impl Briefing {
    /// Output file name without extension: `"{GP} - {Fund} - Briefing"`.
    ///
    /// Path separators and other characters not allowed in file names are
    /// replaced with `_`, so the stem always names a single file.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!(
            "{} - {} - Briefing",
            file_safe(&self.fund.gp),
            file_safe(&self.fund.fund)
        )
    }

    /// Looks up a section by number.
    pub fn section(&self, number: u8) -> Option<&Section> {
        self.sections.iter().find(|s| s.number == number)
    }
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
