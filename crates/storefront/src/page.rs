use leptos::prelude::*;
use scoop::{controller::CartPage, render::CartDisplay};

use crate::dom;

/// Cart page backed by signals the components render from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SignalPage {
    pub(crate) cart: RwSignal<CartDisplay>,
    pub(crate) overlay_open: RwSignal<bool>,
}

impl SignalPage {
    pub(crate) fn new() -> Self {
        Self {
            cart: RwSignal::new(CartDisplay::default()),
            overlay_open: RwSignal::new(false),
        }
    }
}

impl CartPage for SignalPage {
    fn show_cart(&self, display: CartDisplay) {
        self.cart.set(display);
    }

    fn navigate_to(&self, url: &str) {
        dom::navigate(url);
    }

    fn notify(&self, message: &str) {
        dom::alert(message);
    }

    fn open_cart_overlay(&self) {
        self.overlay_open.set(true);
    }
}
