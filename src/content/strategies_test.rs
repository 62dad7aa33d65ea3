use super::*;

#[test]
fn two_options_in_display_order() {
    assert_eq!(STRATEGY_OPTIONS.len(), 2);
    assert_eq!(STRATEGY_OPTIONS[0].id, StrategyId::Consolidated);
    assert_eq!(STRATEGY_OPTIONS[1].id, StrategyId::Segmented);
}

#[test]
fn lookup_returns_matching_option() {
    assert_eq!(
        strategy_option(StrategyId::Consolidated).id,
        StrategyId::Consolidated
    );
    assert_eq!(
        strategy_option(StrategyId::Segmented).id,
        StrategyId::Segmented
    );
}

#[test]
fn consolidated_option_carries_full_editorial_lists() {
    let option = strategy_option(StrategyId::Consolidated);
    assert_eq!(option.advantages.len(), 7);
    assert_eq!(option.disadvantages.len(), 3);
    assert_eq!(option.score, 92);
    assert_eq!(option.complexity, ComplexityTier::Easy);
    assert_eq!(option.budget_efficiency, "Excellente");
}

#[test]
fn segmented_option_carries_full_editorial_lists() {
    let option = strategy_option(StrategyId::Segmented);
    assert_eq!(option.advantages.len(), 4);
    assert_eq!(option.disadvantages.len(), 6);
    assert_eq!(option.score, 68);
    assert_eq!(option.complexity, ComplexityTier::Advanced);
}

#[test]
fn exactly_one_option_is_recommended() {
    let recommended: Vec<_> = STRATEGY_OPTIONS.iter().filter(|o| o.recommended).collect();
    assert_eq!(recommended.len(), 1);
    assert_eq!(recommended[0].id, StrategyId::Consolidated);
}

#[test]
fn recommended_option_outscores_the_alternative() {
    let winner = strategy_option(StrategyId::Consolidated);
    let runner_up = strategy_option(StrategyId::Segmented);
    assert!(winner.score > runner_up.score);
}

#[test]
fn footprint_totals_are_consistent() {
    for option in STRATEGY_OPTIONS {
        let s = option.structure;
        assert_eq!(s.ad_sets * s.ads_per_set, s.total_ads, "{}", option.name);
        assert!(option.score <= 100);
    }
}

#[test]
fn consolidated_footprint_matches_campaign_plan() {
    let s = strategy_option(StrategyId::Consolidated).structure;
    assert_eq!(s.ad_sets, 2);
    assert_eq!(s.ads_per_set, 5);
    assert_eq!(s.total_ads, 10);
}

#[test]
fn slugs_are_stable_dom_hooks() {
    assert_eq!(StrategyId::Consolidated.as_str(), "consolidee");
    assert_eq!(StrategyId::Segmented.as_str(), "segmentee");
}

#[test]
fn complexity_labels_are_french() {
    assert_eq!(ComplexityTier::Easy.label(), "Facile");
    assert_eq!(ComplexityTier::Medium.label(), "Moyen");
    assert_eq!(ComplexityTier::Advanced.label(), "Avancé");
}
