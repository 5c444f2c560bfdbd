//! Scoop prelude.
//!
//! Convenience exports for storefront front-ends.

pub use crate::{
    api::{
        AddToCart, ApiError, CommandOutcome, StorefrontApi, http::HttpStorefrontApi,
    },
    cart::{CartItem, CartSnapshot, Customization, ProductId, ToppingId},
    catalog::{CategoryControl, CategoryFilter, MenuEntry, MenuView, Product, filter_by_category},
    config::{ConfigError, CsrfToken, StorefrontConfig},
    contact::{ContactForm, ContactOutcome, ContactReceipt, submit_contact},
    controller::{CartController, CartPage, MutationOutcome, RefreshOutcome},
    money::{format_amount, format_price},
    render::{CartDisplay, CartRow, CartView, render},
};
