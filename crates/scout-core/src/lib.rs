//! # Scout Core
//!
//! Core record types and the read-only data repository for the Fund Scout
//! briefing engine.
//!
//! This crate provides the foundational building blocks used throughout Scout:
//!
//! - **Types**: Fixed-schema records for funds, track records, portfolio
//!   investments, LP commitments, contacts and news
//! - **Repository**: An immutable snapshot of all collections, loaded once and
//!   passed by reference into briefing assembly
//! - **Shortlisting**: Filtering of the fund registry by geography, strategy
//!   and vintage range
//! - **Formatting**: Display helpers shared by the section composer and
//!   renderers
//!
//! ## Example
//!
//! ```rust
//! use scout_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let fund = Fund::new("Acme Capital", "Acme Fund III")
//!     .with_strategy("Buyout")
//!     .with_geography("North America")
//!     .with_vintage(2019)
//!     .with_size(dec!(500), "USD");
//!
//! let repo = Repository::builder().add_fund(fund).build();
//! assert!(repo.find_fund(&FundKey::new("Acme Capital", "Acme Fund III")).is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod filter;
pub mod format;
pub mod repository;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ScoutError, ScoutResult};
    pub use crate::filter::FundFilter;
    pub use crate::repository::{Repository, RepositoryBuilder};
    pub use crate::types::{
        Contact, Fund, FundKey, LpCommitment, NewsItem, PortfolioInvestment, TrackRecord,
    };
}

// Re-export commonly used types at crate root
pub use error::{ScoutError, ScoutResult};
pub use filter::FundFilter;
pub use repository::{Repository, RepositoryBuilder};
pub use types::{Contact, Fund, FundKey, LpCommitment, NewsItem, PortfolioInvestment, TrackRecord};
