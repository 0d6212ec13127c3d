//! Error types for the Scout workspace.
//!
//! Loading is fail-fast: a schema mismatch or malformed row aborts the load
//! before any repository exists. Assembly itself only fails when the target
//! fund cannot be found.

use thiserror::Error;

/// A specialized Result type for Scout operations.
pub type ScoutResult<T> = Result<T, ScoutError>;

/// The main error type for Scout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoutError {
    /// A required column is absent from a loaded table.
    #[error("Missing column '{column}' in table '{table}'")]
    MissingColumn {
        /// Table the column was expected in.
        table: String,
        /// Name of the missing column.
        column: String,
    },

    /// A row could not be converted into its typed record.
    #[error("Invalid record in table '{table}' at line {line}: {reason}")]
    InvalidRecord {
        /// Table containing the row.
        table: String,
        /// 1-based line number in the source, header included.
        line: u64,
        /// What was wrong with the row.
        reason: String,
    },

    /// Reading a source failed.
    #[error("I/O error on '{path}': {reason}")]
    Io {
        /// Path being read or written.
        path: String,
        /// Underlying error message.
        reason: String,
    },

    /// The requested fund is not in the registry.
    #[error("Fund not found: {gp} — {fund}")]
    FundNotFound {
        /// General partner name.
        gp: String,
        /// Fund name.
        fund: String,
    },

    /// Rendering the content blocks failed.
    #[error("Render error: {reason}")]
    Render {
        /// Description of the failure.
        reason: String,
    },
}

impl ScoutError {
    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(table: impl Into<String>, line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            table: table.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a fund not found error.
    #[must_use]
    pub fn fund_not_found(gp: impl Into<String>, fund: impl Into<String>) -> Self {
        Self::FundNotFound {
            gp: gp.into(),
            fund: fund.into(),
        }
    }

    /// Creates a render error.
    #[must_use]
    pub fn render(reason: impl Into<String>) -> Self {
        Self::Render {
            reason: reason.into(),
        }
    }
}
