//! Festive snowfall overlay.
//!
//! Owns the spawn interval for `util::particles`: one flake every tick while
//! mounted, nothing afterwards. The interval handle lives inside the effect's
//! closure, so disposing the component drops the handle and cancels the
//! timer. Flakes already airborne sit on `document.body` with their own
//! removal timeouts and finish their descent on their own.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::util::particles;

/// Invisible component that runs the snowflake spawner while mounted.
#[component]
pub fn Snowfall() -> impl IntoView {
    let spawner = Rc::new(RefCell::new(None::<Interval>));

    Effect::new(move || {
        if spawner.borrow().is_some() {
            return;
        }
        let tick = Interval::new(particles::SPAWN_INTERVAL_MS, particles::spawn_snowflake);
        *spawner.borrow_mut() = Some(tick);
    });
}
