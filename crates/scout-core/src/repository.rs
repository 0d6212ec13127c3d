//! Read-only data repository.
//!
//! A [`Repository`] is an immutable snapshot of every source table. It is
//! built once at process start and handed by reference to whatever needs it;
//! there is no global cache.

use std::collections::{BTreeSet, HashSet};

use tracing::warn;

use crate::filter::FundFilter;
use crate::types::{
    Contact, Fund, FundKey, LpCommitment, NewsItem, PortfolioInvestment, TrackRecord,
};

/// Immutable snapshot of the source tables.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    funds: Vec<Fund>,
    track_records: Vec<TrackRecord>,
    portfolio: Vec<PortfolioInvestment>,
    lps: Vec<LpCommitment>,
    contacts: Vec<Contact>,
    news: Vec<NewsItem>,
}

impl Repository {
    /// Returns a builder for a new repository.
    #[must_use]
    pub fn builder() -> RepositoryBuilder {
        RepositoryBuilder::new()
    }

    /// The fund registry, in source order.
    pub fn funds(&self) -> &[Fund] {
        &self.funds
    }

    /// Every track record row, in source order.
    pub fn track_records(&self) -> &[TrackRecord] {
        &self.track_records
    }

    /// Every portfolio investment, in source order.
    pub fn portfolio(&self) -> &[PortfolioInvestment] {
        &self.portfolio
    }

    /// Every LP commitment, in source order.
    pub fn lps(&self) -> &[LpCommitment] {
        &self.lps
    }

    /// Every contact, in source order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Every news item, in source order.
    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    /// Looks up a fund by identity.
    ///
    /// Identity is assumed unique. If the registry holds duplicates the first
    /// one in source order wins.
    pub fn find_fund(&self, key: &FundKey) -> Option<&Fund> {
        self.funds.iter().find(|f| f.matches(key))
    }

    /// Track record rows for a GP, in source order.
    pub fn track_records_for_gp<'a>(&'a self, gp: &'a str) -> impl Iterator<Item = &'a TrackRecord> {
        self.track_records.iter().filter(move |r| r.gp == gp)
    }

    /// Portfolio investments held by a fund, in source order.
    pub fn investments_for_fund<'a>(
        &'a self,
        fund: &'a str,
    ) -> impl Iterator<Item = &'a PortfolioInvestment> {
        self.portfolio.iter().filter(move |p| p.fund == fund)
    }

    /// LP commitments to a fund, in source order.
    pub fn lps_for_fund<'a>(&'a self, fund: &'a str) -> impl Iterator<Item = &'a LpCommitment> {
        self.lps.iter().filter(move |l| l.fund == fund)
    }

    /// Contacts at a GP, in source order.
    pub fn contacts_for_gp<'a>(&'a self, gp: &'a str) -> impl Iterator<Item = &'a Contact> {
        self.contacts.iter().filter(move |c| c.gp == gp)
    }

    /// Fund identities that occur more than once, in order of first repeat.
    pub fn duplicate_keys(&self) -> Vec<FundKey> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for fund in &self.funds {
            let key = fund.key();
            if !seen.insert(key.clone()) && reported.insert(key.clone()) {
                duplicates.push(key);
            }
        }
        duplicates
    }

    /// Funds matching a filter, in source order.
    pub fn shortlist(&self, filter: &FundFilter) -> Vec<&Fund> {
        self.funds.iter().filter(|f| filter.matches(f)).collect()
    }

    /// Distinct geographies, sorted.
    pub fn geographies(&self) -> Vec<&str> {
        distinct(self.funds.iter().map(|f| f.geography.as_str()))
    }

    /// Distinct strategies, sorted.
    pub fn strategies(&self) -> Vec<&str> {
        distinct(self.funds.iter().map(|f| f.strategy.as_str()))
    }

    /// Earliest and latest vintage in the registry.
    pub fn vintage_range(&self) -> Option<(i32, i32)> {
        let min = self.funds.iter().map(|f| f.vintage).min()?;
        let max = self.funds.iter().map(|f| f.vintage).max()?;
        Some((min, max))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

/// Builder for constructing a [`Repository`].
///
/// # Example
///
/// ```rust
/// use scout_core::{Fund, Repository};
///
/// let repo = Repository::builder()
///     .add_fund(Fund::new("Acme Capital", "Acme Fund III"))
///     .build();
/// assert_eq!(repo.funds().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RepositoryBuilder {
    funds: Vec<Fund>,
    track_records: Vec<TrackRecord>,
    portfolio: Vec<PortfolioInvestment>,
    lps: Vec<LpCommitment>,
    contacts: Vec<Contact>,
    news: Vec<NewsItem>,
}

impl RepositoryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fund.
    #[must_use]
    pub fn add_fund(mut self, fund: Fund) -> Self {
        self.funds.push(fund);
        self
    }

    /// Sets the fund registry (replacing any existing).
    #[must_use]
    pub fn funds(mut self, funds: Vec<Fund>) -> Self {
        self.funds = funds;
        self
    }

    /// Adds a track record row.
    #[must_use]
    pub fn add_track_record(mut self, record: TrackRecord) -> Self {
        self.track_records.push(record);
        self
    }

    /// Sets the track records (replacing any existing).
    #[must_use]
    pub fn track_records(mut self, records: Vec<TrackRecord>) -> Self {
        self.track_records = records;
        self
    }

    /// Adds a portfolio investment.
    #[must_use]
    pub fn add_investment(mut self, investment: PortfolioInvestment) -> Self {
        self.portfolio.push(investment);
        self
    }

    /// Sets the portfolio investments (replacing any existing).
    #[must_use]
    pub fn portfolio(mut self, portfolio: Vec<PortfolioInvestment>) -> Self {
        self.portfolio = portfolio;
        self
    }

    /// Adds an LP commitment.
    #[must_use]
    pub fn add_lp(mut self, lp: LpCommitment) -> Self {
        self.lps.push(lp);
        self
    }

    /// Sets the LP commitments (replacing any existing).
    #[must_use]
    pub fn lps(mut self, lps: Vec<LpCommitment>) -> Self {
        self.lps = lps;
        self
    }

    /// Adds a contact.
    #[must_use]
    pub fn add_contact(mut self, contact: Contact) -> Self {
        self.contacts.push(contact);
        self
    }

    /// Sets the contacts (replacing any existing).
    #[must_use]
    pub fn contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    /// Adds a news item.
    #[must_use]
    pub fn add_news(mut self, item: NewsItem) -> Self {
        self.news.push(item);
        self
    }

    /// Sets the news items (replacing any existing).
    #[must_use]
    pub fn news(mut self, news: Vec<NewsItem>) -> Self {
        self.news = news;
        self
    }

    /// Freezes the snapshot.
    ///
    /// Duplicate fund identities are tolerated (lookups take the first match)
    /// but each one is logged.
    #[must_use]
    pub fn build(self) -> Repository {
        let repo = Repository {
            funds: self.funds,
            track_records: self.track_records,
            portfolio: self.portfolio,
            lps: self.lps,
            contacts: self.contacts,
            news: self.news,
        };

        for key in repo.duplicate_keys() {
            warn!(gp = %key.gp, fund = %key.fund, "Duplicate fund identity; first match wins");
        }

        repo
    }
}
