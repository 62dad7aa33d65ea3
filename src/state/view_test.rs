use super::*;

#[test]
fn opens_on_the_recommendation_section() {
    let state = ViewState::default();
    assert_eq!(state.expanded_section, Some(SectionId::Recommendation));
    assert_eq!(state.selected_strategy, None);
}

#[test]
fn toggle_section_expands_then_collapses() {
    let mut state = ViewState {
        expanded_section: None,
        selected_strategy: None,
    };

    state.toggle_section(SectionId::Budget);
    assert!(state.is_expanded(SectionId::Budget));

    state.toggle_section(SectionId::Budget);
    assert_eq!(state.expanded_section, None);
}

#[test]
fn expanding_a_section_collapses_the_open_one() {
    let mut state = ViewState::default();
    assert!(state.is_expanded(SectionId::Recommendation));

    state.toggle_section(SectionId::Checklist);
    assert!(state.is_expanded(SectionId::Checklist));
    assert!(!state.is_expanded(SectionId::Recommendation));
}

#[test]
fn double_toggle_always_ends_collapsed() {
    let mut state = ViewState::default();
    state.toggle_section(SectionId::Comparison);
    state.toggle_section(SectionId::Comparison);
    assert_eq!(state.expanded_section, None);

    // And from the all-collapsed state as well.
    state.toggle_section(SectionId::Comparison);
    state.toggle_section(SectionId::Comparison);
    assert_eq!(state.expanded_section, None);
}

#[test]
fn toggle_strategy_selects_then_clears() {
    let mut state = ViewState::default();

    state.toggle_strategy(StrategyId::Consolidated);
    assert!(state.is_selected(StrategyId::Consolidated));
    assert!(state.any_strategy_selected());

    state.toggle_strategy(StrategyId::Consolidated);
    assert_eq!(state.selected_strategy, None);
    assert!(!state.any_strategy_selected());
}

#[test]
fn selecting_one_card_deselects_the_other() {
    let mut state = ViewState::default();

    state.toggle_strategy(StrategyId::Consolidated);
    state.toggle_strategy(StrategyId::Segmented);

    assert!(state.is_selected(StrategyId::Segmented));
    assert!(!state.is_selected(StrategyId::Consolidated));
}

#[test]
fn selection_does_not_disturb_expansion() {
    let mut state = ViewState::default();

    state.toggle_strategy(StrategyId::Segmented);
    assert!(state.is_expanded(SectionId::Recommendation));

    state.toggle_section(SectionId::Comparison);
    assert!(state.is_selected(StrategyId::Segmented));
}
