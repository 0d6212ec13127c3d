//! Directory loader.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use scout_core::{Repository, ScoutError, ScoutResult};

use crate::schema::{ContactRow, CsvTable, FundRow, LpRow, NewsRow, PortfolioRow, TrackRecordRow};

/// Read every row of one table from a CSV source.
///
/// The header is checked against [`CsvTable::COLUMNS`] before any row is
/// read. Extra columns are ignored.
pub fn read_table<T: CsvTable, R: Read>(reader: R) -> ScoutResult<Vec<T::Record>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| ScoutError::invalid_record(T::TABLE, 1, e.to_string()))?
        .clone();

    for column in T::COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(ScoutError::missing_column(T::TABLE, *column));
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            ScoutError::invalid_record(T::TABLE, line, e.to_string())
        })?;
        let line = row.position().map_or(0, csv::Position::line);

        let raw: T = row
            .deserialize(Some(&headers))
            .map_err(|e| ScoutError::invalid_record(T::TABLE, line, e.to_string()))?;
        let record = raw
            .into_record()
            .map_err(|reason| ScoutError::invalid_record(T::TABLE, line, reason))?;
        records.push(record);
    }

    Ok(records)
}

/// Loads a [`Repository`] from a directory of CSV files.
#[derive(Debug, Clone)]
pub struct CsvRepositoryLoader {
    data_dir: PathBuf,
}

impl CsvRepositoryLoader {
    /// Create a loader for the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// The directory tables are read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of one table's file.
    pub fn table_path<T: CsvTable>(&self) -> PathBuf {
        self.data_dir.join(T::FILE_NAME)
    }

    /// Load every table and freeze the snapshot.
    pub fn load(&self) -> ScoutResult<Repository> {
        info!("Loading repository from {}", self.data_dir.display());

        let funds = self.load_table::<FundRow>()?;
        let track_records = self.load_table::<TrackRecordRow>()?;
        let portfolio = self.load_table::<PortfolioRow>()?;
        let lps = self.load_table::<LpRow>()?;
        let contacts = self.load_table::<ContactRow>()?;
        let news = self.load_table::<NewsRow>()?;

        info!(
            funds = funds.len(),
            track_records = track_records.len(),
            portfolio = portfolio.len(),
            lps = lps.len(),
            contacts = contacts.len(),
            news = news.len(),
            "Repository loaded"
        );

        Ok(Repository::builder()
            .funds(funds)
            .track_records(track_records)
            .portfolio(portfolio)
            .lps(lps)
            .contacts(contacts)
            .news(news)
            .build())
    }

    fn load_table<T: CsvTable>(&self) -> ScoutResult<Vec<T::Record>> {
        let path = self.table_path::<T>();
        debug!("Reading table {} from {}", T::TABLE, path.display());

        let file =
            File::open(&path).map_err(|e| ScoutError::io(path.display().to_string(), e.to_string()))?;
        read_table::<T, _>(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table_in_source_order() {
        let csv = "Fund,LP,Type,Role\n\
                   Acme Fund III,State Pension Plan,Pension,Anchor\n\
                   Acme Fund III,Ivy Endowment,Endowment,LP\n";
        let lps = read_table::<LpRow, _>(csv.as_bytes()).unwrap();
        assert_eq!(lps.len(), 2);
        assert_eq!(lps[0].lp, "State Pension Plan");
        assert_eq!(lps[1].lp_type, "Endowment");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "Fund,LP,Role\nAcme Fund III,State Pension Plan,Anchor\n";
        let err = read_table::<LpRow, _>(csv.as_bytes()).unwrap_err();
        assert_eq!(err, ScoutError::missing_column("lps", "Type"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "GP,Name,Title,Email,LinkedIn,Phone\n\
                   Acme Capital,Jane Doe,Partner,jane@acme.example,https://linkedin.example/jane,555\n";
        let contacts = read_table::<ContactRow, _>(csv.as_bytes()).unwrap();
        assert_eq!(contacts[0].linkedin, "https://linkedin.example/jane");
    }

    #[test]
    fn test_bad_value_reports_line() {
        let csv = "GP,Fund,Strategy,Geography,Vintage,FundSize,Currency\n\
                   Acme Capital,Acme Fund III,Buyout,North America,2019,500,USD\n\
                   Acme Capital,Acme Fund IV,Buyout,North America,2023,lots,USD\n";
        let err = read_table::<FundRow, _>(csv.as_bytes()).unwrap_err();
        match err {
            ScoutError::InvalidRecord { table, line, reason } => {
                assert_eq!(table, "funds");
                assert_eq!(line, 3);
                assert!(reason.contains("FundSize"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_source_is_missing_columns() {
        let err = read_table::<NewsRow, _>("".as_bytes()).unwrap_err();
        assert_eq!(err, ScoutError::missing_column("news", "Date"));
    }
}
