use super::*;
use crate::content::strategies::{StrategyId, strategy_option};

#[test]
fn two_ad_sets_of_five_ads_each() {
    assert_eq!(AD_SET_PLANS.len(), 2);
    for plan in AD_SET_PLANS {
        assert_eq!(plan.products.len(), 5, "{}", plan.name);
    }
}

#[test]
fn plan_agrees_with_consolidated_footprint() {
    let footprint = strategy_option(StrategyId::Consolidated).structure;
    assert_eq!(AD_SET_PLANS.len() as u32, footprint.ad_sets);

    let total: u32 = AD_SET_PLANS.iter().map(|p| p.products.len() as u32).sum();
    assert_eq!(total, footprint.total_ads);
}

#[test]
fn ad_set_accents_are_distinct() {
    assert_ne!(AD_SET_PLANS[0].accent, AD_SET_PLANS[1].accent);
}
