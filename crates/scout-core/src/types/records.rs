//! Records joined against a target fund or its GP.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Realized performance of one of a GP's prior funds.
///
/// The ratio fields are opaque figures carried through to the document as
/// sourced; nothing here recomputes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// General partner name (join key).
    pub gp: String,
    /// Prior fund name.
    pub fund: String,
    /// Vintage year.
    pub vintage: i32,
    /// Fund size in units of `currency`.
    pub fund_size: Decimal,
    /// Currency code.
    pub currency: String,
    /// Capital called, percent of commitments.
    pub called_pct: Decimal,
    /// Distributed to paid-in, percent.
    pub dpi_pct: Decimal,
    /// Residual value to paid-in, percent.
    pub rvpi_pct: Decimal,
    /// Multiple on invested capital.
    pub moic: Decimal,
    /// Internal rate of return, percent.
    pub irr: Decimal,
    /// Valuation date, as sourced.
    pub as_of_date: String,
}

/// A company held by a fund.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioInvestment {
    /// Holding fund name (join key).
    pub fund: String,
    /// Portfolio company name.
    pub company: String,
    /// Entry date, as sourced.
    pub entry_date: String,
    /// Industry classification.
    pub industry: String,
    /// Holding status (e.g. "Active", "Exited").
    pub status: String,
    /// Company website.
    pub website: String,
}

/// A limited partner's commitment to a fund.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpCommitment {
    /// Fund name (join key).
    pub fund: String,
    /// Limited partner name.
    pub lp: String,
    /// LP type (e.g. "Pension", "Endowment").
    pub lp_type: String,
    /// Role in the fund (e.g. "Anchor").
    pub role: String,
}

/// A person at a GP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// General partner name (join key).
    pub gp: String,
    /// Full name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Email address.
    pub email: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
}
