//! Property tests for fund shortlisting.

use proptest::prelude::*;
use rust_decimal::Decimal;
use scout_core::prelude::*;

const GEOGRAPHIES: &[&str] = &["North America", "Europe", "Asia"];
const STRATEGIES: &[&str] = &["Buyout", "Growth", "Venture"];

fn arb_fund() -> impl Strategy<Value = Fund> {
    (0..GEOGRAPHIES.len(), 0..STRATEGIES.len(), 2005i32..2025, 1u32..5000).prop_map(
        |(g, s, vintage, size)| {
            Fund::new("GP", format!("Fund {vintage}"))
                .with_geography(GEOGRAPHIES[g])
                .with_strategy(STRATEGIES[s])
                .with_vintage(vintage)
                .with_size(Decimal::from(size), "USD")
        },
    )
}

proptest! {
    #[test]
    fn shortlist_only_returns_matching_funds(
        funds in prop::collection::vec(arb_fund(), 0..40),
        g in 0..GEOGRAPHIES.len(),
        from in 2005i32..2025,
        span in 0i32..10,
    ) {
        let repo = Repository::builder().funds(funds.clone()).build();
        let filter = FundFilter::new()
            .with_geography(GEOGRAPHIES[g])
            .with_vintages(Some(from), Some(from + span));

        let shortlist = repo.shortlist(&filter);
        for fund in &shortlist {
            prop_assert_eq!(fund.geography.as_str(), GEOGRAPHIES[g]);
            prop_assert!(fund.vintage >= from && fund.vintage <= from + span);
        }

        let expected = funds.iter().filter(|f| filter.matches(f)).count();
        prop_assert_eq!(shortlist.len(), expected);
    }

    #[test]
    fn unfiltered_shortlist_is_whole_registry(funds in prop::collection::vec(arb_fund(), 0..40)) {
        let repo = Repository::builder().funds(funds.clone()).build();
        let shortlist: Vec<Fund> = repo.shortlist(&FundFilter::new()).into_iter().cloned().collect();
        prop_assert_eq!(shortlist, funds);
    }
}
