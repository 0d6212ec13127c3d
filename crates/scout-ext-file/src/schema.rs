//! Table schemas and row conversion.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use scout_core::{Contact, Fund, LpCommitment, NewsItem, PortfolioInvestment, TrackRecord};

/// A CSV table with a fixed header set and a typed record per row.
pub trait CsvTable: DeserializeOwned {
    /// Table name used in errors and logs.
    const TABLE: &'static str;

    /// File name inside the data directory.
    const FILE_NAME: &'static str;

    /// Columns that must be present in the header.
    const COLUMNS: &'static [&'static str];

    /// The typed record this row converts into.
    type Record;

    /// Validates and converts the raw row.
    fn into_record(self) -> Result<Self::Record, String>;
}

// =============================================================================
// FUNDS
// =============================================================================

/// Raw row of `funds.csv`.
#[derive(Debug, Deserialize)]
pub struct FundRow {
    #[serde(rename = "GP")]
    gp: String,
    #[serde(rename = "Fund")]
    fund: String,
    #[serde(rename = "Strategy")]
    strategy: String,
    #[serde(rename = "Geography")]
    geography: String,
    #[serde(rename = "Vintage")]
    vintage: String,
    #[serde(rename = "FundSize")]
    fund_size: String,
    #[serde(rename = "Currency")]
    currency: String,
}

impl CsvTable for FundRow {
    const TABLE: &'static str = "funds";
    const FILE_NAME: &'static str = "funds.csv";
    const COLUMNS: &'static [&'static str] = &[
        "GP",
        "Fund",
        "Strategy",
        "Geography",
        "Vintage",
        "FundSize",
        "Currency",
    ];
    type Record = Fund;

    fn into_record(self) -> Result<Fund, String> {
        Ok(Fund {
            vintage: parse_year("Vintage", &self.vintage)?,
            fund_size: parse_decimal("FundSize", &self.fund_size)?,
            gp: self.gp,
            name: self.fund,
            strategy: self.strategy,
            geography: self.geography,
            currency: self.currency,
        })
    }
}

// =============================================================================
// TRACK RECORDS
// =============================================================================

/// Raw row of `track_records.csv`.
#[derive(Debug, Deserialize)]
pub struct TrackRecordRow {
    #[serde(rename = "GP")]
    gp: String,
    #[serde(rename = "Fund")]
    fund: String,
    #[serde(rename = "Vintage")]
    vintage: String,
    #[serde(rename = "FundSize")]
    fund_size: String,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "CalledPct")]
    called_pct: String,
    #[serde(rename = "DPIpct")]
    dpi_pct: String,
    #[serde(rename = "RVPIpct")]
    rvpi_pct: String,
    #[serde(rename = "MOIC")]
    moic: String,
    #[serde(rename = "IRR")]
    irr: String,
    #[serde(rename = "AsOfDate")]
    as_of_date: String,
}

impl CsvTable for TrackRecordRow {
    const TABLE: &'static str = "track_records";
    const FILE_NAME: &'static str = "track_records.csv";
    const COLUMNS: &'static [&'static str] = &[
        "GP",
        "Fund",
        "Vintage",
        "FundSize",
        "Currency",
        "CalledPct",
        "DPIpct",
        "RVPIpct",
        "MOIC",
        "IRR",
        "AsOfDate",
    ];
    type Record = TrackRecord;

    fn into_record(self) -> Result<TrackRecord, String> {
        Ok(TrackRecord {
            vintage: parse_year("Vintage", &self.vintage)?,
            fund_size: parse_decimal("FundSize", &self.fund_size)?,
            called_pct: parse_decimal("CalledPct", &self.called_pct)?,
            dpi_pct: parse_decimal("DPIpct", &self.dpi_pct)?,
            rvpi_pct: parse_decimal("RVPIpct", &self.rvpi_pct)?,
            moic: parse_decimal("MOIC", &self.moic)?,
            irr: parse_decimal("IRR", &self.irr)?,
            gp: self.gp,
            fund: self.fund,
            currency: self.currency,
            as_of_date: self.as_of_date,
        })
    }
}

// =============================================================================
// PORTFOLIO
// =============================================================================

/// Raw row of `portfolio.csv`.
#[derive(Debug, Deserialize)]
pub struct PortfolioRow {
    #[serde(rename = "Fund")]
    fund: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "EntryDate")]
    entry_date: String,
    #[serde(rename = "Industry")]
    industry: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Website")]
    website: String,
}

impl CsvTable for PortfolioRow {
    const TABLE: &'static str = "portfolio";
    const FILE_NAME: &'static str = "portfolio.csv";
    const COLUMNS: &'static [&'static str] =
        &["Fund", "Company", "EntryDate", "Industry", "Status", "Website"];
    type Record = PortfolioInvestment;

    fn into_record(self) -> Result<PortfolioInvestment, String> {
        Ok(PortfolioInvestment {
            fund: self.fund,
            company: self.company,
            entry_date: self.entry_date,
            industry: self.industry,
            status: self.status,
            website: self.website,
        })
    }
}

// =============================================================================
// LPS
// =============================================================================

/// Raw row of `lps.csv`.
#[derive(Debug, Deserialize)]
pub struct LpRow {
    #[serde(rename = "Fund")]
    fund: String,
    #[serde(rename = "LP")]
    lp: String,
    #[serde(rename = "Type")]
    lp_type: String,
    #[serde(rename = "Role")]
    role: String,
}

impl CsvTable for LpRow {
    const TABLE: &'static str = "lps";
    const FILE_NAME: &'static str = "lps.csv";
    const COLUMNS: &'static [&'static str] = &["Fund", "LP", "Type", "Role"];
    type Record = LpCommitment;

    fn into_record(self) -> Result<LpCommitment, String> {
        Ok(LpCommitment {
            fund: self.fund,
            lp: self.lp,
            lp_type: self.lp_type,
            role: self.role,
        })
    }
}

// =============================================================================
// CONTACTS
// =============================================================================

/// Raw row of `contacts.csv`.
#[derive(Debug, Deserialize)]
pub struct ContactRow {
    #[serde(rename = "GP")]
    gp: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "LinkedIn")]
    linkedin: String,
}

impl CsvTable for ContactRow {
    const TABLE: &'static str = "contacts";
    const FILE_NAME: &'static str = "contacts.csv";
    const COLUMNS: &'static [&'static str] = &["GP", "Name", "Title", "Email", "LinkedIn"];
    type Record = Contact;

    fn into_record(self) -> Result<Contact, String> {
        Ok(Contact {
            gp: self.gp,
            name: self.name,
            title: self.title,
            email: self.email,
            linkedin: self.linkedin,
        })
    }
}

// =============================================================================
// NEWS
// =============================================================================

/// Raw row of `news.csv`.
#[derive(Debug, Deserialize)]
pub struct NewsRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Headline")]
    headline: String,
    #[serde(rename = "Implication")]
    implication: String,
    #[serde(rename = "Source")]
    source: String,
}

impl CsvTable for NewsRow {
    const TABLE: &'static str = "news";
    const FILE_NAME: &'static str = "news.csv";
    const COLUMNS: &'static [&'static str] = &["Date", "Headline", "Implication", "Source"];
    type Record = NewsItem;

    fn into_record(self) -> Result<NewsItem, String> {
        Ok(NewsItem {
            date: parse_date("Date", &self.date)?,
            headline: self.headline,
            implication: self.implication,
            source: self.source,
        })
    }
}

// =============================================================================
// FIELD PARSERS
// =============================================================================

fn parse_decimal(column: &str, value: &str) -> Result<Decimal, String> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| format!("{column}: '{value}' is not a number"))
}

/// Years are integers, but a float-typed export may write `2019.0`.
fn parse_year(column: &str, value: &str) -> Result<i32, String> {
    let trimmed = value.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Ok(year);
    }
    let decimal = parse_decimal(column, value)?;
    if decimal.fract().is_zero() {
        decimal
            .to_i32()
            .ok_or_else(|| format!("{column}: '{value}' is out of range"))
    } else {
        Err(format!("{column}: '{value}' is not a whole year"))
    }
}

/// Accepts plain dates and timestamps; the time part is dropped.
fn parse_date(column: &str, value: &str) -> Result<NaiveDate, String> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| format!("{column}: '{value}' is not a date"))
}
