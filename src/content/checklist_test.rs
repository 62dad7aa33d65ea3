use super::*;

#[test]
fn ten_steps_all_filled_in() {
    assert_eq!(LAUNCH_STEPS.len(), 10);
    for step in LAUNCH_STEPS {
        assert!(!step.task.is_empty());
        assert!(!step.category.is_empty());
    }
}

#[test]
fn structure_comes_before_optimisation() {
    assert_eq!(LAUNCH_STEPS[0].category, "Structure");
    assert_eq!(LAUNCH_STEPS[9].category, "Optimisation");
}
