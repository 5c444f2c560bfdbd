//! Window scroll position and the effects driven by it.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use tracing::warn;

/// Scroll offset past which the navbar turns solid.
pub(crate) const SOLID_NAVBAR_OFFSET: f64 = 50.0;

/// Rate at which the hero background scrolls relative to the page.
pub(crate) const PARALLAX_RATE: f64 = 0.5;

pub(crate) fn navbar_is_solid(scroll_y: f64) -> bool {
    scroll_y > SOLID_NAVBAR_OFFSET
}

/// CSS value for the hero's `background-position-y`.
pub(crate) fn parallax_offset(scroll_y: f64) -> String {
    format!("{}px", scroll_y * PARALLAX_RATE)
}

/// Keep `scroll_y` in step with the window's vertical scroll offset.
#[cfg(target_arch = "wasm32")]
pub(crate) fn install_scroll_listener(scroll_y: RwSignal<f64>) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(window) = web_sys::window() else {
        return;
    };

    let source = window.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        scroll_y.set(source.scroll_y().unwrap_or_default());
    });

    if window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .is_err()
    {
        warn!("unable to listen for scroll events");
        return;
    }

    // Lives as long as the page.
    callback.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn install_scroll_listener(_scroll_y: RwSignal<f64>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_turns_solid_strictly_past_threshold() {
        assert!(!navbar_is_solid(0.0));
        assert!(!navbar_is_solid(50.0));
        assert!(navbar_is_solid(50.5));
    }

    #[test]
    fn hero_background_moves_at_half_speed() {
        assert_eq!(parallax_offset(0.0), "0px");
        assert_eq!(parallax_offset(300.0), "150px");
        assert_eq!(parallax_offset(45.0), "22.5px");
    }
}
