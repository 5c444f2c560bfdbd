//! Ice-cream icon that flies from an add button to the cart.

use leptos::{prelude::*, task};

use crate::dom;

/// Delay before the icon starts moving.
pub(crate) const FLIGHT_DELAY_MS: i32 = 100;

/// How long the icon travels before it is removed.
pub(crate) const FLIGHT_DURATION_MS: i32 = 500;

/// Distance of the landing point from the right edge of the viewport.
const LANDING_INSET_X: f64 = 50.0;

/// Distance of the landing point from the top of the viewport.
const LANDING_TOP: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Flight {
    pub(crate) id: u64,
    from: (f64, f64),
    to: (f64, f64),
    launched: bool,
}

impl Flight {
    pub(crate) fn new(id: u64, from: (f64, f64), viewport_width: f64) -> Self {
        Self {
            id,
            from,
            to: landing_point(viewport_width),
            launched: false,
        }
    }

    /// Inline style placing the icon at its current end of the path.
    pub(crate) fn style(&self) -> String {
        let (left, top) = if self.launched { self.to } else { self.from };
        let scale = if self.launched { 1.5 } else { 1.0 };

        format!("left: {left}px; top: {top}px; transform: scale({scale});")
    }
}

pub(crate) fn landing_point(viewport_width: f64) -> (f64, f64) {
    (viewport_width - LANDING_INSET_X, LANDING_TOP)
}

/// Start a flight from `origin`; does nothing when the origin is unknown.
pub(crate) fn launch(flights: RwSignal<Vec<Flight>>, origin: Option<(f64, f64)>) {
    let (Some(from), Some(viewport_width)) = (origin, dom::viewport_width()) else {
        return;
    };

    let id = flights.with_untracked(|current| {
        current
            .iter()
            .map(|flight| flight.id)
            .max()
            .map_or(0, |id| id.saturating_add(1))
    });

    flights.update(|current| current.push(Flight::new(id, from, viewport_width)));

    task::spawn_local(async move {
        dom::wait_for_timeout(FLIGHT_DELAY_MS).await;

        flights.update(|current| {
            if let Some(flight) = current.iter_mut().find(|flight| flight.id == id) {
                flight.launched = true;
            }
        });

        dom::wait_for_timeout(FLIGHT_DURATION_MS).await;

        flights.update(|current| current.retain(|flight| flight.id != id));
    });
}

/// Icons currently in flight.
#[component]
pub(crate) fn FlightLayer(flights: RwSignal<Vec<Flight>>) -> impl IntoView {
    view! {
        <div class="flight-layer" aria-hidden="true">
            <For each=move || flights.get() key=|flight| flight.id let:flight>
                <i
                    class="fas fa-ice-cream flying-icon"
                    style=move || {
                        flights
                            .with(|current| {
                                current.iter().find(|candidate| candidate.id == flight.id).map(Flight::style)
                            })
                            .unwrap_or_default()
                    }
                ></i>
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_near_top_right_corner() {
        assert_eq!(landing_point(1280.0), (1230.0, 20.0));
    }

    #[test]
    fn starts_at_origin_and_moves_once_launched() {
        let mut flight = Flight::new(3, (120.0, 480.0), 1000.0);

        assert_eq!(
            flight.style(),
            "left: 120px; top: 480px; transform: scale(1);"
        );

        flight.launched = true;

        assert_eq!(
            flight.style(),
            "left: 950px; top: 20px; transform: scale(1.5);"
        );
    }
}
