use super::*;

#[test]
fn four_tips_with_distinct_icons() {
    assert_eq!(PRO_TIPS.len(), 4);
    for (i, a) in PRO_TIPS.iter().enumerate() {
        for b in &PRO_TIPS[i + 1..] {
            assert_ne!(a.icon, b.icon);
        }
    }
}
