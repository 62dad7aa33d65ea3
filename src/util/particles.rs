//! Snowflake particle maths and DOM spawning for the festive overlay.
//!
//! DESIGN
//! ======
//! The overlay is decorative and owns no reactive state. A `gloo` interval
//! (held by the `Snowfall` component) calls `spawn_snowflake` on a fixed
//! cadence; each flake is a throwaway DOM node animated purely by CSS, armed
//! with a one-shot removal timeout. With one spawn every `SPAWN_INTERVAL_MS`
//! and removal after `LIFETIME_MS`, the live population settles at
//! `steady_state_count` regardless of how long the page stays open.
//!
//! The random-to-style mapping is split out as a pure function so the
//! authored ranges are testable without a DOM.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use gloo_timers::callback::Timeout;

/// Milliseconds between flake spawns.
pub const SPAWN_INTERVAL_MS: u32 = 500;

/// Milliseconds a flake lives before it removes itself.
pub const LIFETIME_MS: u32 = 10_000;

/// Inline style inputs for one spawned flake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    /// Horizontal spawn position in viewport-width units.
    pub left_vw: f64,
    /// Fall duration in seconds.
    pub duration_s: f64,
    pub opacity: f64,
    pub font_size_px: f64,
}

/// Map four unit-interval samples onto the authored style ranges.
///
/// Position spans the full viewport width; duration lands in 7-10 s,
/// opacity in 0.4-1.0 and glyph size in 10-20 px.
#[must_use]
pub fn particle_style(r_left: f64, r_duration: f64, r_opacity: f64, r_size: f64) -> ParticleStyle {
    ParticleStyle {
        left_vw: r_left * 100.0,
        duration_s: r_duration * 3.0 + 7.0,
        opacity: r_opacity * 0.6 + 0.4,
        font_size_px: r_size * 10.0 + 10.0,
    }
}

/// Render a flake's `style` attribute value.
#[must_use]
pub fn style_attribute(style: &ParticleStyle) -> String {
    format!(
        "left: {:.2}vw; animation-duration: {:.2}s; opacity: {:.2}; font-size: {:.1}px;",
        style.left_vw, style.duration_s, style.opacity, style.font_size_px
    )
}

/// Live flakes once spawning and removal balance out.
#[must_use]
pub fn steady_state_count() -> u32 {
    LIFETIME_MS / SPAWN_INTERVAL_MS
}

/// Append one flake to `document.body` and arm its removal timeout.
///
/// Quietly does nothing outside a browser document; element-creation
/// failures are logged and skipped so the interval keeps ticking.
pub fn spawn_snowflake() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(flake) = document.create_element("div") else {
        leptos::logging::warn!("snowflake: element creation failed");
        return;
    };

    flake.set_class_name("snowflake");
    flake.set_inner_html("❄");

    let style = particle_style(
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
    );
    let _ = flake.set_attribute("style", &style_attribute(&style));
    let _ = body.append_child(&flake);

    Timeout::new(LIFETIME_MS, move || {
        flake.remove();
    })
    .forget();
}
