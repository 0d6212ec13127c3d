//! Target fund metric resolution.
//!
//! No live metrics table exists yet, so the default provider fills every
//! measured figure from a fixed demo set. The only computed figure is the
//! remaining value, which is always derived from the target fund's own size.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use scout_core::format::{format_float, format_percent};
use scout_core::{Fund, FundKey};

/// Where a metric set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsSource {
    /// Demo constants standing in for missing data.
    Fallback,
    /// Figures reported for the fund.
    Measured,
}

/// Performance metrics for the target fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingMetrics {
    /// Capital called, percent.
    pub called_pct: Decimal,
    /// Distributed to paid-in, percent.
    pub dpi_pct: Decimal,
    /// Residual value to paid-in, percent.
    pub rvpi_pct: Decimal,
    /// `round(fund_size * rvpi_pct / 100, 2)`.
    pub remaining_value: Decimal,
    /// Currency of `remaining_value`; always the target fund's.
    pub currency: String,
    /// Net multiple on invested capital.
    pub net_moic: Decimal,
    /// Net internal rate of return, percent.
    pub net_irr: Decimal,
    /// Valuation date.
    pub as_of_date: String,
    /// Provenance of the figures.
    pub source: MetricsSource,
}

impl BriefingMetrics {
    /// Remaining value as displayed: approximate marker, float form, currency.
    ///
    /// A 500 USD fund at 70% RVPI displays as `"~350.0 USD"`.
    #[must_use]
    pub fn remaining_value_display(&self) -> String {
        format!("~{} {}", format_float(self.remaining_value), self.currency)
    }

    /// Net IRR as displayed, with a percent suffix.
    #[must_use]
    pub fn net_irr_display(&self) -> String {
        format_percent(self.net_irr)
    }
}

/// Residual value of a fund: `round(fund_size * rvpi_pct / 100, 2)`.
///
/// Midpoints round to even. Never panics: when the full product does not fit
/// in a `Decimal` the percentage is scaled down first, and if that still
/// overflows the result saturates at `Decimal::MAX` / `Decimal::MIN`.
#[must_use]
pub fn remaining_value(fund_size: Decimal, rvpi_pct: Decimal) -> Decimal {
    let hundred = dec!(100);
    let value = fund_size
        .checked_mul(rvpi_pct)
        .and_then(|v| v.checked_div(hundred))
        .or_else(|| {
            rvpi_pct
                .checked_div(hundred)
                .and_then(|ratio| fund_size.checked_mul(ratio))
        })
        .unwrap_or_else(|| {
            debug!(%fund_size, %rvpi_pct, "Remaining value overflowed; saturating");
            if fund_size.is_sign_negative() != rvpi_pct.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        });
    value.round_dp(2)
}

/// Reported performance figures for one fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasuredMetrics {
    /// Capital called, percent.
    pub called_pct: Decimal,
    /// Distributed to paid-in, percent.
    pub dpi_pct: Decimal,
    /// Residual value to paid-in, percent.
    pub rvpi_pct: Decimal,
    /// Net multiple on invested capital.
    pub net_moic: Decimal,
    /// Net internal rate of return, percent.
    pub net_irr: Decimal,
    /// Valuation date.
    pub as_of_date: String,
}

impl MeasuredMetrics {
    /// Expands the figures for a fund, deriving the remaining value.
    #[must_use]
    pub fn for_fund(&self, fund: &Fund, source: MetricsSource) -> BriefingMetrics {
        BriefingMetrics {
            called_pct: self.called_pct,
            dpi_pct: self.dpi_pct,
            rvpi_pct: self.rvpi_pct,
            remaining_value: remaining_value(fund.fund_size, self.rvpi_pct),
            currency: fund.currency.clone(),
            net_moic: self.net_moic,
            net_irr: self.net_irr,
            as_of_date: self.as_of_date.clone(),
            source,
        }
    }
}

/// Resolves the metric set for a target fund.
///
/// Resolution never fails; a provider without data for a fund degrades to
/// fallback figures.
pub trait MetricsProvider: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &'static str;

    /// Metrics for the fund.
    fn resolve(&self, fund: &Fund) -> BriefingMetrics;
}

/// Demo provider: the same constant figures for every fund.
///
/// Figures are labeled [`MetricsSource::Fallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackMetricsProvider {
    constants: MeasuredMetrics,
}

impl Default for FallbackMetricsProvider {
    fn default() -> Self {
        Self {
            constants: MeasuredMetrics {
                called_pct: dec!(72),
                dpi_pct: dec!(45),
                rvpi_pct: dec!(70),
                net_moic: dec!(1.5),
                net_irr: dec!(12.0),
                as_of_date: "2024-12-31".to_string(),
            },
        }
    }
}

impl FallbackMetricsProvider {
    /// Creates the provider with the standard demo figures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The constant figures handed out.
    #[must_use]
    pub fn constants(&self) -> &MeasuredMetrics {
        &self.constants
    }
}

impl MetricsProvider for FallbackMetricsProvider {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn resolve(&self, fund: &Fund) -> BriefingMetrics {
        self.constants.for_fund(fund, MetricsSource::Fallback)
    }
}

/// Provider backed by reported figures, falling back per fund.
#[derive(Debug, Clone, Default)]
pub struct MeasuredMetricsProvider {
    measured: HashMap<FundKey, MeasuredMetrics>,
    fallback: FallbackMetricsProvider,
}

impl MeasuredMetricsProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records figures for a fund, replacing any earlier entry.
    #[must_use]
    pub fn with_metrics(mut self, key: FundKey, metrics: MeasuredMetrics) -> Self {
        self.measured.insert(key, metrics);
        self
    }

    /// Number of funds with reported figures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.measured.len()
    }

    /// Returns true if no fund has reported figures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }
}

impl MetricsProvider for MeasuredMetricsProvider {
    fn name(&self) -> &'static str {
        "measured"
    }

    fn resolve(&self, fund: &Fund) -> BriefingMetrics {
        match self.measured.get(&fund.key()) {
            Some(metrics) => metrics.for_fund(fund, MetricsSource::Measured),
            None => {
                debug!(gp = %fund.gp, fund = %fund.name, "No measured metrics, using fallback");
                self.fallback.resolve(fund)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn acme_fund_iii() -> Fund {
        Fund::new("Acme Capital", "Acme Fund III")
            .with_vintage(2019)
            .with_size(dec!(500), "USD")
    }

    #[test]
    fn test_fallback_constants() {
        let metrics = FallbackMetricsProvider::new().resolve(&acme_fund_iii());
        assert_eq!(metrics.called_pct, dec!(72));
        assert_eq!(metrics.dpi_pct, dec!(45));
        assert_eq!(metrics.rvpi_pct, dec!(70));
        assert_eq!(metrics.net_moic, dec!(1.5));
        assert_eq!(metrics.net_irr, dec!(12.0));
        assert_eq!(metrics.as_of_date, "2024-12-31");
        assert_eq!(metrics.source, MetricsSource::Fallback);
    }

    #[test]
    fn test_remaining_value_example() {
        let metrics = FallbackMetricsProvider::new().resolve(&acme_fund_iii());
        assert_eq!(metrics.remaining_value, dec!(350));
        assert_eq!(metrics.remaining_value_display(), "~350.0 USD");
        assert_eq!(metrics.net_irr_display(), "12.0%");
    }

    #[test]
    fn test_remaining_value_rounds_to_cents() {
        assert_eq!(remaining_value(dec!(333.333), dec!(70)), dec!(233.33));
        assert_eq!(remaining_value(dec!(0.05), dec!(50)), dec!(0.02));
        assert_eq!(remaining_value(dec!(0.07), dec!(50)), dec!(0.04));
        assert_eq!(remaining_value(dec!(1250.5), dec!(70)), dec!(875.35));
    }

    #[test]
    fn test_remaining_value_large_sizes_do_not_overflow() {
        // 1e28 * 70 does not fit; 1e28 * 0.70 does.
        let size = Decimal::from_str("10000000000000000000000000000").unwrap();
        assert_eq!(
            remaining_value(size, dec!(70)),
            Decimal::from_str("7000000000000000000000000000").unwrap()
        );

        assert_eq!(remaining_value(Decimal::MAX, dec!(150)), Decimal::MAX);
        assert_eq!(remaining_value(Decimal::MAX, dec!(-150)), Decimal::MIN);
    }

    #[test]
    fn test_remaining_value_uses_target_currency() {
        let fund = Fund::new("Borealis Partners", "Borealis Growth II").with_size(dec!(320.5), "EUR");
        let metrics = FallbackMetricsProvider::new().resolve(&fund);
        assert_eq!(metrics.remaining_value_display(), "~224.35 EUR");
    }

    #[test]
    fn test_measured_provider_prefers_reported_figures() {
        let fund = acme_fund_iii();
        let provider = MeasuredMetricsProvider::new().with_metrics(
            fund.key(),
            MeasuredMetrics {
                called_pct: dec!(88),
                dpi_pct: dec!(60),
                rvpi_pct: dec!(90),
                net_moic: dec!(1.7),
                net_irr: dec!(16.4),
                as_of_date: "2025-03-31".to_string(),
            },
        );

        let metrics = provider.resolve(&fund);
        assert_eq!(metrics.source, MetricsSource::Measured);
        assert_eq!(metrics.remaining_value, dec!(450));
        assert_eq!(metrics.as_of_date, "2025-03-31");

        let other = Fund::new("Acme Capital", "Acme Fund IV").with_size(dec!(800), "USD");
        let metrics = provider.resolve(&other);
        assert_eq!(metrics.source, MetricsSource::Fallback);
        assert_eq!(metrics.remaining_value, dec!(560));
    }
}
