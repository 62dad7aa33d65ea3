use super::*;

#[test]
fn zero_samples_hit_the_range_floors() {
    let style = particle_style(0.0, 0.0, 0.0, 0.0);
    assert_eq!(style.left_vw, 0.0);
    assert_eq!(style.duration_s, 7.0);
    assert_eq!(style.opacity, 0.4);
    assert_eq!(style.font_size_px, 10.0);
}

#[test]
fn unit_samples_hit_the_range_ceilings() {
    let style = particle_style(1.0, 1.0, 1.0, 1.0);
    assert_eq!(style.left_vw, 100.0);
    assert_eq!(style.duration_s, 10.0);
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.font_size_px, 20.0);
}

#[test]
fn mid_samples_stay_inside_the_ranges() {
    let style = particle_style(0.5, 0.5, 0.5, 0.5);
    assert!(style.left_vw > 0.0 && style.left_vw < 100.0);
    assert!(style.duration_s > 7.0 && style.duration_s < 10.0);
    assert!(style.opacity > 0.4 && style.opacity < 1.0);
    assert!(style.font_size_px > 10.0 && style.font_size_px < 20.0);
}

#[test]
fn style_attribute_lists_every_property() {
    let rendered = style_attribute(&particle_style(0.25, 0.5, 0.75, 1.0));
    assert_eq!(
        rendered,
        "left: 25.00vw; animation-duration: 8.50s; opacity: 0.85; font-size: 20.0px;"
    );
}

#[test]
fn population_settles_at_twenty_flakes() {
    assert_eq!(steady_state_count(), 20);
}

#[test]
fn lifetime_is_a_whole_number_of_spawn_intervals() {
    assert_eq!(LIFETIME_MS % SPAWN_INTERVAL_MS, 0);
}
