//! Fund registry shortlisting.

use serde::{Deserialize, Serialize};

use crate::types::Fund;

/// Value accepted in place of a geography or strategy meaning "no filter".
pub const ANY: &str = "any";

/// Criteria for shortlisting funds.
///
/// Unset criteria match every fund. The vintage range is inclusive at both
/// ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundFilter {
    /// Exact geography to match.
    pub geography: Option<String>,
    /// Exact strategy to match.
    pub strategy: Option<String>,
    /// Earliest vintage to include.
    pub vintage_from: Option<i32>,
    /// Latest vintage to include.
    pub vintage_to: Option<i32>,
}

impl FundFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one geography. `"any"` clears the criterion.
    #[must_use]
    pub fn with_geography(mut self, geography: impl Into<String>) -> Self {
        self.geography = normalize_choice(geography.into());
        self
    }

    /// Restricts to one strategy. `"any"` clears the criterion.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = normalize_choice(strategy.into());
        self
    }

    /// Restricts to an inclusive vintage range.
    #[must_use]
    pub fn with_vintages(mut self, from: Option<i32>, to: Option<i32>) -> Self {
        self.vintage_from = from;
        self.vintage_to = to;
        self
    }

    /// Returns true if the fund satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, fund: &Fund) -> bool {
        if let Some(ref geography) = self.geography {
            if &fund.geography != geography {
                return false;
            }
        }
        if let Some(ref strategy) = self.strategy {
            if &fund.strategy != strategy {
                return false;
            }
        }
        if self.vintage_from.is_some_and(|from| fund.vintage < from) {
            return false;
        }
        if self.vintage_to.is_some_and(|to| fund.vintage > to) {
            return false;
        }
        true
    }
}

fn normalize_choice(value: String) -> Option<String> {
    if value.eq_ignore_ascii_case(ANY) {
        None
    } else {
        Some(value)
    }
}
