use super::*;

#[test]
fn four_bands_from_small_to_large() {
    assert_eq!(BUDGET_BANDS.len(), 4);
    assert_eq!(BUDGET_BANDS[0].daily_budget, "50-100€/jour");
    assert_eq!(BUDGET_BANDS[3].daily_budget, "500€+/jour");
}

#[test]
fn smallest_band_backs_the_recommended_structure() {
    let band = &BUDGET_BANDS[0];
    assert_eq!(band.recommended_sets, "2 ad sets");
    assert_eq!(band.tone, ConfidenceTone::Positive);
}

#[test]
fn confidence_weakens_as_set_count_grows() {
    assert_eq!(BUDGET_BANDS[2].tone, ConfidenceTone::Caution);
    assert_eq!(BUDGET_BANDS[3].tone, ConfidenceTone::Info);
}
