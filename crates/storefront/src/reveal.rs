//! Fade-in of page blocks the first time they scroll into view.
//!
//! Elements carrying [`REVEAL_CLASS`] start hidden and shifted down; the observer adds
//! [`REVEALED_CLASS`] once they intersect the viewport and stops watching them.

#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};

use leptos::prelude::*;

use crate::menu::MenuState;

pub(crate) const REVEAL_CLASS: &str = "reveal";

pub(crate) const REVEALED_CLASS: &str = "reveal-visible";

/// Selector for blocks still waiting to be revealed.
pub(crate) fn pending_selector() -> String {
    format!(".{REVEAL_CLASS}:not(.{REVEALED_CLASS})")
}

#[cfg(target_arch = "wasm32")]
type RevealIntersectionObserver = (
    web_sys::IntersectionObserver,
    wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
);

/// Watch reveal blocks, re-scanning the page whenever the menu changes.
#[cfg(target_arch = "wasm32")]
pub(crate) fn install_reveal_observer(menu: RwSignal<MenuState>) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let reveal_observer = Rc::new(RefCell::new(None::<RevealIntersectionObserver>));

    Effect::new({
        let reveal_observer = Rc::clone(&reveal_observer);

        move |_| {
            menu.track();

            if let Some((observer, _callback)) = reveal_observer.borrow_mut().take() {
                observer.disconnect();
            }

            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };

            let Ok(targets) = document.query_selector_all(&pending_selector()) else {
                return;
            };

            if targets.length() == 0 {
                return;
            }

            let observer_callback = Closure::<
                dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
            >::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for index in 0..entries.length() {
                        let Ok(entry) = entries
                            .get(index)
                            .dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };

                        if !entry.is_intersecting() {
                            continue;
                        }

                        let target = entry.target();

                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.0));

            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                observer_callback.as_ref().unchecked_ref(),
                &options,
            ) else {
                return;
            };

            for index in 0..targets.length() {
                let Some(node) = targets.item(index) else {
                    continue;
                };

                let Ok(element) = node.dyn_into::<web_sys::Element>() else {
                    continue;
                };

                observer.observe(&element);
            }

            reveal_observer.replace(Some((observer, observer_callback)));
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn install_reveal_observer(_menu: RwSignal<MenuState>) {}
