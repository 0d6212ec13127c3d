//! News items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated news event.
///
/// News is not keyed to a fund or GP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Headline.
    pub headline: String,
    /// What the event implies for a secondary buyer.
    pub implication: String,
    /// Publication or data source.
    pub source: String,
}

impl NewsItem {
    /// Creates a news item.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        headline: impl Into<String>,
        implication: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            date,
            headline: headline.into(),
            implication: implication.into(),
            source: source.into(),
        }
    }
}
