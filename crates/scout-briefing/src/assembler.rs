//! Briefing assembly entry point.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use scout_core::{FundKey, Repository, ScoutError, ScoutResult};

use crate::blocks::{Briefing, TableStyle, TitleBlock};
use crate::metrics::{FallbackMetricsProvider, MetricsProvider};
use crate::sections::SectionComposer;

/// Cover page text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingHeader {
    /// Organization name on the first line.
    pub organization: String,
    /// Document subtitle on the second line.
    pub subtitle: String,
}

impl Default for BriefingHeader {
    fn default() -> Self {
        Self {
            organization: "Fairview Capital Group".to_string(),
            subtitle: "Secondary Candidate Briefing".to_string(),
        }
    }
}

/// Assembles briefings from a repository snapshot.
///
/// Assembly is a pure function of the snapshot and the target identity: the
/// same inputs always give the same blocks.
///
/// # Example
///
/// ```rust
/// use scout_briefing::BriefingAssembler;
/// use scout_core::{Fund, FundKey, Repository};
/// use rust_decimal_macros::dec;
///
/// let repo = Repository::builder()
///     .add_fund(Fund::new("Acme Capital", "Acme Fund III").with_size(dec!(500), "USD"))
///     .build();
///
/// let briefing = BriefingAssembler::new()
///     .assemble(&FundKey::new("Acme Capital", "Acme Fund III"), &repo)
///     .unwrap();
/// assert_eq!(briefing.sections.len(), 7);
/// ```
pub struct BriefingAssembler {
    metrics: Box<dyn MetricsProvider>,
    header: BriefingHeader,
}

impl Default for BriefingAssembler {
    fn default() -> Self {
        Self {
            metrics: Box::new(FallbackMetricsProvider::new()),
            header: BriefingHeader::default(),
        }
    }
}

impl std::fmt::Debug for BriefingAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BriefingAssembler")
            .field("metrics", &self.metrics.name())
            .field("header", &self.header)
            .finish()
    }
}

impl BriefingAssembler {
    /// Creates an assembler with the fallback metrics provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the metrics provider.
    #[must_use]
    pub fn with_metrics_provider(mut self, provider: impl MetricsProvider + 'static) -> Self {
        self.metrics = Box::new(provider);
        self
    }

    /// Replaces the cover page text.
    #[must_use]
    pub fn with_header(mut self, header: BriefingHeader) -> Self {
        self.header = header;
        self
    }

    /// Assembles the briefing for one fund.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::FundNotFound`] if the registry has no fund with
    /// this identity. Nothing else can fail.
    pub fn assemble(&self, key: &FundKey, repo: &Repository) -> ScoutResult<Briefing> {
        let fund = repo
            .find_fund(key)
            .ok_or_else(|| ScoutError::fund_not_found(&key.gp, &key.fund))?;

        info!(gp = %fund.gp, fund = %fund.name, provider = self.metrics.name(), "Assembling briefing");

        let metrics = self.metrics.resolve(fund);
        debug!(
            source = ?metrics.source,
            remaining_value = %metrics.remaining_value,
            "Metrics resolved"
        );

        let sections = SectionComposer::new(repo, fund, &metrics).compose();

        Ok(Briefing {
            fund: fund.key(),
            title: TitleBlock {
                organization: self.header.organization.clone(),
                subtitle: self.header.subtitle.clone(),
                subject: fund.key().to_string(),
            },
            sections,
            table_style: TableStyle::default(),
        })
    }
}

/// Assembles a briefing with the default header and fallback metrics.
pub fn assemble_briefing(key: &FundKey, repo: &Repository) -> ScoutResult<Briefing> {
    BriefingAssembler::default().assemble(key, repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use scout_core::Fund;

    fn repo() -> Repository {
        Repository::builder()
            .add_fund(
                Fund::new("Acme Capital", "Acme Fund III")
                    .with_vintage(2019)
                    .with_size(dec!(500), "USD"),
            )
            .build()
    }

    #[test]
    fn test_unknown_fund() {
        let err = assemble_briefing(&FundKey::new("Acme Capital", "Acme Fund IX"), &repo()).unwrap_err();
        assert_eq!(err, ScoutError::fund_not_found("Acme Capital", "Acme Fund IX"));
    }

    #[test]
    fn test_title_block() {
        let briefing = assemble_briefing(&FundKey::new("Acme Capital", "Acme Fund III"), &repo()).unwrap();
        assert_eq!(briefing.title.organization, "Fairview Capital Group");
        assert_eq!(briefing.title.subtitle, "Secondary Candidate Briefing");
        assert_eq!(briefing.title.subject, "Acme Capital — Acme Fund III");
        assert_eq!(briefing.file_stem(), "Acme Capital - Acme Fund III - Briefing");
    }

    #[test]
    fn test_custom_header() {
        let assembler = BriefingAssembler::new().with_header(BriefingHeader {
            organization: "Northwind Secondaries".into(),
            subtitle: "Investment Committee Pre-read".into(),
        });
        let briefing = assembler
            .assemble(&FundKey::new("Acme Capital", "Acme Fund III"), &repo())
            .unwrap();
        assert_eq!(briefing.title.organization, "Northwind Secondaries");
        assert_eq!(briefing.title.subtitle, "Investment Committee Pre-read");
    }
}
