//! Terminal rendering of cart views.

use std::{
    cell::{Cell, RefCell},
    io::Write,
};

use scoop::prelude::*;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use tracing::{debug, warn};

/// A [`CartPage`] that writes to a terminal stream.
#[derive(Debug)]
pub(crate) struct TerminalPage<W> {
    out: RefCell<W>,
    overlay_opened: Cell<bool>,
}

impl<W: Write> TerminalPage<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            overlay_opened: Cell::new(false),
        }
    }

    /// Whether a command asked for the cart overlay.
    #[cfg(test)]
    pub(crate) fn overlay_opened(&self) -> bool {
        self.overlay_opened.get()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out.into_inner()
    }

    pub(crate) fn emit(&self, text: &str) {
        if let Err(error) = writeln!(self.out.borrow_mut(), "{text}") {
            warn!(%error, "failed to write to terminal");
        }
    }
}

impl<W: Write> CartPage for TerminalPage<W> {
    fn show_cart(&self, display: CartDisplay) {
        match display {
            CartDisplay::Items(view) => self.emit(&cart_table(&view)),
            CartDisplay::Error(message) => self.emit(&format!("error: {message}")),
        }
    }

    fn navigate_to(&self, url: &str) {
        self.emit(&format!("Your session has expired. Sign in at {url}"));
    }

    fn notify(&self, message: &str) {
        self.emit(&format!("! {message}"));
    }

    fn open_cart_overlay(&self) {
        debug!("cart overlay requested");

        self.overlay_opened.set(true);
    }
}

/// Render a cart view as a table followed by the total and checkout hint.
pub(crate) fn cart_table(view: &CartView) -> String {
    if view.rows.is_empty() {
        return format!("Your cart is empty.\nTotal: {}", view.total);
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Item", "Price", "Qty", "Total"].map(String::from));

    for row in &view.rows {
        let name = match &row.detail {
            Some(detail) => format!("{}\n{detail}", row.name),
            None => row.name.clone(),
        };

        builder.push_record([
            row.product_id.to_string(),
            name,
            row.price.clone(),
            row.quantity.to_string(),
            row.line_total.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    let checkout = if view.checkout_visible {
        "Ready to check out."
    } else {
        ""
    };

    format!("{table}\nTotal: {}\n{checkout}", view.total)
        .trim_end()
        .to_string()
}
