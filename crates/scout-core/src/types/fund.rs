//! Fund registry records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a fund in the registry: the sponsoring GP plus the fund name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FundKey {
    /// General partner name.
    pub gp: String,
    /// Fund name.
    pub fund: String,
}

impl FundKey {
    /// Creates a new fund key.
    #[must_use]
    pub fn new(gp: impl Into<String>, fund: impl Into<String>) -> Self {
        Self {
            gp: gp.into(),
            fund: fund.into(),
        }
    }
}

impl fmt::Display for FundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.gp, self.fund)
    }
}

/// A fund in the registry.
///
/// One GP may sponsor many funds. The `(gp, name)` pair is expected to be
/// unique; see [`Repository::duplicate_keys`](crate::Repository::duplicate_keys).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fund {
    /// General partner name.
    pub gp: String,
    /// Fund name.
    pub name: String,
    /// Investment strategy (e.g. "Buyout", "Growth").
    pub strategy: String,
    /// HQ / focus geography.
    pub geography: String,
    /// Year the fund began investing.
    pub vintage: i32,
    /// Fund size in units of `currency`.
    pub fund_size: Decimal,
    /// Currency code, rendered verbatim.
    pub currency: String,
}

impl Fund {
    /// Creates a fund with the given identity and empty attributes.
    #[must_use]
    pub fn new(gp: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            gp: gp.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Sets the geography.
    #[must_use]
    pub fn with_geography(mut self, geography: impl Into<String>) -> Self {
        self.geography = geography.into();
        self
    }

    /// Sets the vintage year.
    #[must_use]
    pub fn with_vintage(mut self, vintage: i32) -> Self {
        self.vintage = vintage;
        self
    }

    /// Sets the fund size and its currency.
    #[must_use]
    pub fn with_size(mut self, fund_size: Decimal, currency: impl Into<String>) -> Self {
        self.fund_size = fund_size;
        self.currency = currency.into();
        self
    }

    /// Returns the `(GP, Fund)` identity.
    #[must_use]
    pub fn key(&self) -> FundKey {
        FundKey::new(&self.gp, &self.name)
    }

    /// Returns true if this fund has the given identity.
    #[must_use]
    pub fn matches(&self, key: &FundKey) -> bool {
        self.gp == key.gp && self.name == key.fund
    }

    /// Label used when offering the fund for selection.
    #[must_use]
    pub fn selection_label(&self) -> String {
        format!("{} — {} ({})", self.gp, self.name, self.vintage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_key_display() {
        let key = FundKey::new("Acme Capital", "Acme Fund III");
        assert_eq!(key.to_string(), "Acme Capital — Acme Fund III");
    }

    #[test]
    fn test_builder_methods() {
        let fund = Fund::new("Acme Capital", "Acme Fund III")
            .with_strategy("Buyout")
            .with_geography("North America")
            .with_vintage(2019)
            .with_size(dec!(500), "USD");

        assert_eq!(fund.strategy, "Buyout");
        assert_eq!(fund.vintage, 2019);
        assert_eq!(fund.fund_size, dec!(500));
        assert_eq!(fund.currency, "USD");
        assert_eq!(fund.selection_label(), "Acme Capital — Acme Fund III (2019)");
    }

    #[test]
    fn test_matches_is_exact() {
        let fund = Fund::new("Acme Capital", "Acme Fund III");
        assert!(fund.matches(&FundKey::new("Acme Capital", "Acme Fund III")));
        assert!(!fund.matches(&FundKey::new("acme capital", "Acme Fund III")));
        assert!(!fund.matches(&FundKey::new("Acme Capital", "Acme Fund III ")));
    }
}
