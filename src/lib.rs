//! Scoop
//!
//! Scoop is the storefront client for an ice-cream parlour: it keeps the cart in step with the
//! shop's JSON API, renders cart snapshots, filters the menu by category and submits contact
//! messages.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod controller;
pub mod money;
pub mod prelude;
pub mod render;
