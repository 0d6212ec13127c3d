//! Fixed-schema record types.
//!
//! One type per source table. Every type is an immutable snapshot row; the
//! briefing engine only ever reads them.
//!
//! - [`Fund`] / [`FundKey`]: the fund registry and its `(GP, Fund)` identity
//! - [`TrackRecord`]: realized performance of a GP's prior funds
//! - [`PortfolioInvestment`]: a company held by a fund
//! - [`LpCommitment`]: a limited partner's stake in a fund
//! - [`Contact`]: a person at a GP
//! - [`NewsItem`]: a dated news event

mod fund;
mod news;
mod records;

pub use fund::{Fund, FundKey};
pub use news::NewsItem;
pub use records::{Contact, LpCommitment, PortfolioInvestment, TrackRecord};
