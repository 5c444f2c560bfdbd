//! Cart rendering
//!
//! Turns a [`CartSnapshot`] into the view model a front-end paints. Rendering is pure: the
//! same snapshot always yields the same view, and nothing here touches the page.

use crate::{
    cart::{CartSnapshot, ProductId},
    money::{format_amount, format_price},
};

/// Message shown in place of the cart when it cannot be loaded.
pub const CART_LOAD_ERROR: &str = "Error loading cart items. Please try again.";

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Product the removal control targets.
    pub product_id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price in the shop currency.
    pub price: String,

    /// Number of units.
    pub quantity: u32,

    /// Line total, two decimals.
    pub line_total: String,

    /// Customisation summary, if any.
    pub detail: Option<String>,
}

impl CartRow {
    /// Price-times-quantity caption, e.g. `₹2.50 x 2`.
    pub fn price_caption(&self) -> String {
        format!("{} x {}", self.price, self.quantity)
    }

    /// Accessible label for the removal control.
    pub fn remove_label(&self) -> String {
        format!("Remove {} from cart", self.name)
    }
}

/// Fully rendered cart contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Lines, top to bottom.
    pub rows: Vec<CartRow>,

    /// Grand total, two decimals.
    pub total: String,

    /// Whether the checkout control is shown.
    pub checkout_visible: bool,
}

impl Default for CartView {
    fn default() -> Self {
        render(&CartSnapshot::default())
    }
}

/// What the cart display area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartDisplay {
    /// The rendered cart.
    Items(CartView),

    /// A visible error indicator replacing the cart.
    Error(String),
}

impl CartDisplay {
    /// The error indicator used for failed cart loads.
    pub fn load_error() -> Self {
        Self::Error(CART_LOAD_ERROR.to_string())
    }

    /// Whether the checkout control should be shown.
    pub fn checkout_visible(&self) -> bool {
        matches!(self, Self::Items(view) if view.checkout_visible)
    }
}

impl Default for CartDisplay {
    fn default() -> Self {
        Self::Items(CartView::default())
    }
}

/// Render a cart snapshot.
pub fn render(snapshot: &CartSnapshot) -> CartView {
    let rows = snapshot
        .items()
        .iter()
        .map(|item| CartRow {
            product_id: item.id,
            name: item.name.clone(),
            price: format_price(item.price),
            quantity: item.quantity,
            line_total: format_amount(item.total),
            detail: item
                .customization
                .as_ref()
                .and_then(|customization| customization.summary()),
        })
        .collect();

    CartView {
        rows,
        total: format_amount(snapshot.grand_total()),
        checkout_visible: !snapshot.is_empty(),
    }
}
