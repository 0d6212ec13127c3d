//! # Scout Ext File
//!
//! CSV-backed data repository for the Fund Scout briefing engine.
//!
//! A data directory holds one CSV file per table:
//!
//! | File                | Columns                                                                        |
//! |---------------------|--------------------------------------------------------------------------------|
//! | `funds.csv`         | GP, Fund, Strategy, Geography, Vintage, FundSize, Currency                     |
//! | `track_records.csv` | GP, Fund, Vintage, FundSize, Currency, CalledPct, DPIpct, RVPIpct, MOIC, IRR, AsOfDate |
//! | `portfolio.csv`     | Fund, Company, EntryDate, Industry, Status, Website                            |
//! | `lps.csv`           | Fund, LP, Type, Role                                                           |
//! | `contacts.csv`      | GP, Name, Title, Email, LinkedIn                                               |
//! | `news.csv`          | Date, Headline, Implication, Source                                            |
//!
//! Headers are validated before any row is read, and every row is converted
//! into its typed record up front. A missing file, missing column or malformed
//! value aborts the whole load.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod loader;
mod schema;

pub use loader::{read_table, CsvRepositoryLoader};
pub use schema::{
    ContactRow, CsvTable, FundRow, LpRow, NewsRow, PortfolioRow, TrackRecordRow,
};

use std::path::Path;

use scout_core::{Repository, ScoutResult};

/// Load a repository snapshot from a directory of CSV files.
pub fn load_repository(data_dir: impl AsRef<Path>) -> ScoutResult<Repository> {
    CsvRepositoryLoader::new(data_dir).load()
}
