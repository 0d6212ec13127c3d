//! Section composition.
//!
//! Each section filters the snapshot against the target fund or its GP,
//! orders the result and lays it out as a table. Joins that come back empty
//! get a single placeholder row so the table keeps its shape; the track record
//! is the one exception and falls back to a sentence instead.

use std::cmp::Reverse;

use rust_decimal_macros::dec;

use scout_core::format::{format_amount, PLACEHOLDER};
use scout_core::{Fund, NewsItem, Repository, TrackRecord};

use crate::blocks::{Section, Table};
use crate::metrics::BriefingMetrics;

/// Number of news items shown.
pub const NEWS_LIMIT: usize = 5;

/// Paragraph shown when a GP has no prior funds on file.
pub const NO_TRACK_RECORD: &str = "No prior fund data available in demo dataset.";

/// Section titles, in document order.
pub const SECTION_TITLES: [&str; 7] = [
    "GP Overview",
    "Target Fund Overview",
    "Track Record (Prior Funds)",
    "Recent Developments / GP News",
    "Target Fund Investments",
    "Target Fund LPs",
    "Key Contacts",
];

/// Builds the seven sections for one target fund.
#[derive(Debug, Clone, Copy)]
pub struct SectionComposer<'a> {
    repo: &'a Repository,
    fund: &'a Fund,
    metrics: &'a BriefingMetrics,
}

impl<'a> SectionComposer<'a> {
    /// Creates a composer over a snapshot, a target fund and its metrics.
    pub fn new(repo: &'a Repository, fund: &'a Fund, metrics: &'a BriefingMetrics) -> Self {
        Self {
            repo,
            fund,
            metrics,
        }
    }

    /// All seven sections, in order.
    pub fn compose(&self) -> Vec<Section> {
        vec![
            self.gp_overview(),
            self.fund_overview(),
            self.track_record(),
            self.news(),
            self.investments(),
            self.lps(),
            self.contacts(),
        ]
    }

    /// 1. GP-level attributes of the target fund.
    pub fn gp_overview(&self) -> Section {
        let fund = self.fund;
        let mut table = Table::new(&[("Field", dec!(5)), ("Details", dec!(10))]);
        for (field, details) in [
            ("GP Name", fund.gp.clone()),
            ("Strategy", fund.strategy.clone()),
            ("Geography (HQ/Focus)", fund.geography.clone()),
            ("Most Recent Vintage", fund.vintage.to_string()),
            ("Recent Fund Size", format_amount(fund.fund_size, &fund.currency)),
            ("Website", PLACEHOLDER.to_string()),
            ("Placement Agent (per Preqin)", PLACEHOLDER.to_string()),
            ("Office Locations", PLACEHOLDER.to_string()),
            ("Investment Team (key names)", "See Key Contacts".to_string()),
        ] {
            table.push_row([field.to_string(), details]);
        }
        Section::new(1, SECTION_TITLES[0]).with_table(table)
    }

    /// 2. Target fund size plus resolved metrics.
    pub fn fund_overview(&self) -> Section {
        let fund = self.fund;
        let m = self.metrics;
        let mut table = Table::new(&[("Metric", dec!(5)), ("Value", dec!(10))]);
        for (metric, value) in [
            ("Vintage", fund.vintage.to_string()),
            ("Fund Size", format_amount(fund.fund_size, &fund.currency)),
            ("Called (%)", m.called_pct.to_string()),
            ("DPI (%)", m.dpi_pct.to_string()),
            ("RVPI (%)", m.rvpi_pct.to_string()),
            ("Remaining Value", m.remaining_value_display()),
            ("Net MOIC", m.net_moic.to_string()),
            ("Net IRR", m.net_irr_display()),
            ("As of Date", m.as_of_date.clone()),
        ] {
            table.push_row([metric.to_string(), value]);
        }
        Section::new(2, SECTION_TITLES[1]).with_table(table)
    }

    /// 3. The GP's prior funds, newest vintage first.
    pub fn track_record(&self) -> Section {
        let section = Section::new(3, SECTION_TITLES[2]);
        let records = sorted_track_records(self.repo, &self.fund.gp);
        if records.is_empty() {
            return section.with_text(NO_TRACK_RECORD);
        }

        let mut table = Table::new(&[
            ("Fund", dec!(5)),
            ("Vintage", dec!(2)),
            ("Size", dec!(3)),
            ("Called%", dec!(2)),
            ("DPI%", dec!(2)),
            ("RVPI%", dec!(2)),
            ("MOIC", dec!(2)),
            ("IRR%", dec!(2)),
            ("As of", dec!(3)),
        ]);
        for r in records {
            table.push_row([
                r.fund.clone(),
                r.vintage.to_string(),
                format_amount(r.fund_size, &r.currency),
                r.called_pct.to_string(),
                r.dpi_pct.to_string(),
                r.rvpi_pct.to_string(),
                r.moic.to_string(),
                r.irr.to_string(),
                r.as_of_date.clone(),
            ]);
        }
        section.with_table(table)
    }

    /// 4. Latest news across the whole dataset.
    ///
    /// News is not filtered by GP.
    pub fn news(&self) -> Section {
        let mut table = Table::new(&[
            ("Date", dec!(2.5)),
            ("Headline", dec!(7)),
            ("Implication", dec!(6)),
            ("Source", dec!(4)),
        ]);
        for item in latest_news(self.repo) {
            table.push_row([
                item.date.format("%Y-%m-%d").to_string(),
                item.headline.clone(),
                item.implication.clone(),
                item.source.clone(),
            ]);
        }
        Section::new(4, SECTION_TITLES[3]).with_table(table)
    }

    /// 5. Companies held by the target fund.
    pub fn investments(&self) -> Section {
        let mut table = Table::new(&[
            ("Company", dec!(4)),
            ("Entry Date", dec!(3)),
            ("Industry", dec!(4)),
            ("Status", dec!(2)),
            ("Website", dec!(6)),
        ]);
        for p in self.repo.investments_for_fund(&self.fund.name) {
            table.push_row([
                p.company.clone(),
                p.entry_date.clone(),
                p.industry.clone(),
                p.status.clone(),
                p.website.clone(),
            ]);
        }
        table.fill_if_empty();
        Section::new(5, SECTION_TITLES[4]).with_table(table)
    }

    /// 6. LPs committed to the target fund.
    pub fn lps(&self) -> Section {
        let mut table = Table::new(&[("LP Name", dec!(7)), ("Type", dec!(4)), ("Role", dec!(3))]);
        for l in self.repo.lps_for_fund(&self.fund.name) {
            table.push_row([l.lp.clone(), l.lp_type.clone(), l.role.clone()]);
        }
        table.fill_if_empty();
        Section::new(6, SECTION_TITLES[5]).with_table(table)
    }

    /// 7. People at the GP.
    pub fn contacts(&self) -> Section {
        let mut table = Table::new(&[
            ("Name", dec!(5)),
            ("Title", dec!(5)),
            ("Email", dec!(5)),
            ("LinkedIn", dec!(5)),
        ]);
        for c in self.repo.contacts_for_gp(&self.fund.gp) {
            table.push_row([
                c.name.clone(),
                c.title.clone(),
                c.email.clone(),
                c.linkedin.clone(),
            ]);
        }
        table.fill_if_empty();
        Section::new(7, SECTION_TITLES[6]).with_table(table)
    }
}

/// A GP's track record, vintage descending. Equal vintages keep source order.
pub fn sorted_track_records<'a>(repo: &'a Repository, gp: &'a str) -> Vec<&'a TrackRecord> {
    let mut records: Vec<_> = repo.track_records_for_gp(gp).collect();
    records.sort_by_key(|r| Reverse(r.vintage));
    records
}

/// The [`NEWS_LIMIT`] most recent news items. Equal dates keep source order.
pub fn latest_news(repo: &Repository) -> Vec<&NewsItem> {
    let mut news: Vec<_> = repo.news().iter().collect();
    news.sort_by_key(|n| Reverse(n.date));
    news.truncate(NEWS_LIMIT);
    news
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FallbackMetricsProvider, MetricsProvider};

    fn track(gp: &str, fund: &str, vintage: i32) -> TrackRecord {
        TrackRecord {
            gp: gp.into(),
            fund: fund.into(),
            vintage,
            fund_size: dec!(100),
            currency: "USD".into(),
            ..TrackRecord::default()
        }
    }

    #[test]
    fn test_track_record_sort_is_stable() {
        let repo = Repository::builder()
            .add_track_record(track("Acme", "A", 2012))
            .add_track_record(track("Acme", "B", 2018))
            .add_track_record(track("Other", "X", 2030))
            .add_track_record(track("Acme", "C", 2012))
            .add_track_record(track("Acme", "D", 2018))
            .build();

        let funds: Vec<_> = sorted_track_records(&repo, "Acme")
            .iter()
            .map(|r| r.fund.as_str())
            .collect();
        assert_eq!(funds, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_gp_overview_rows() {
        let repo = Repository::default();
        let fund = Fund::new("Acme Capital", "Acme Fund III")
            .with_strategy("Buyout")
            .with_geography("North America")
            .with_vintage(2019)
            .with_size(dec!(500), "USD");
        let metrics = FallbackMetricsProvider::new().resolve(&fund);
        let section = SectionComposer::new(&repo, &fund, &metrics).gp_overview();

        let table = section.tables().next().unwrap();
        assert_eq!(table.header(), vec!["Field", "Details"]);
        assert_eq!(table.rows.len(), 9);
        assert_eq!(table.rows[3], vec!["Most Recent Vintage", "2019"]);
        assert_eq!(table.rows[4], vec!["Recent Fund Size", "500 USD"]);
        assert_eq!(table.rows[5], vec!["Website", "—"]);
        assert_eq!(table.rows[8], vec!["Investment Team (key names)", "See Key Contacts"]);
    }
}
