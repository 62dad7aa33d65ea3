use super::*;
use crate::content::strategies::{STRATEGY_OPTIONS, StrategyId, strategy_option};

const ITEMS: &[&str] = &["a", "b", "c", "d", "e", "f", "g"];

#[test]
fn unselected_cards_preview_three_advantages() {
    let visible = visible_items(ITEMS, false, ADVANTAGE_PREVIEW);
    assert_eq!(visible, &["a", "b", "c"]);
}

#[test]
fn selected_cards_reveal_everything() {
    let visible = visible_items(ITEMS, true, ADVANTAGE_PREVIEW);
    assert_eq!(visible.len(), ITEMS.len());
}

#[test]
fn short_lists_are_never_truncated() {
    let short: &[&str] = &["a", "b"];
    assert_eq!(visible_items(short, false, ADVANTAGE_PREVIEW), short);
}

#[test]
fn hint_counts_the_hidden_tail() {
    // Consolidated card: 7 advantages, 3 previewed.
    assert_eq!(overflow_hint(7, ADVANTAGE_PREVIEW, false), Some(4));
    // Consolidated card: 3 disadvantages, 2 previewed.
    assert_eq!(overflow_hint(3, DISADVANTAGE_PREVIEW, false), Some(1));
}

#[test]
fn hint_disappears_while_any_card_is_selected() {
    assert_eq!(overflow_hint(7, ADVANTAGE_PREVIEW, true), None);
}

#[test]
fn hint_absent_when_nothing_is_hidden() {
    assert_eq!(overflow_hint(3, ADVANTAGE_PREVIEW, false), None);
    assert_eq!(overflow_hint(2, ADVANTAGE_PREVIEW, false), None);
}

#[test]
fn both_authored_cards_overflow_their_previews() {
    for option in STRATEGY_OPTIONS {
        assert!(option.advantages.len() > ADVANTAGE_PREVIEW, "{}", option.name);
        assert!(
            option.disadvantages.len() > DISADVANTAGE_PREVIEW,
            "{}",
            option.name
        );
    }
}

#[test]
fn score_tone_switches_at_eighty() {
    assert_eq!(score_tone(92), "strong");
    assert_eq!(score_tone(80), "strong");
    assert_eq!(score_tone(79), "caution");
    assert_eq!(score_tone(68), "caution");
}

#[test]
fn tones_match_the_authored_options() {
    let winner = strategy_option(StrategyId::Consolidated);
    assert_eq!(complexity_tone(winner.complexity), "positive");
    assert_eq!(efficiency_tone(winner.budget_efficiency), "positive");

    let runner_up = strategy_option(StrategyId::Segmented);
    assert_eq!(complexity_tone(runner_up.complexity), "negative");
    assert_eq!(efficiency_tone(runner_up.budget_efficiency), "caution");
}
