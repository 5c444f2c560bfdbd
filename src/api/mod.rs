//! Shop JSON API
//!
//! [`StorefrontApi`] is the seam between the controllers and the network. The
//! [`http::HttpStorefrontApi`] implementation talks to the shop over HTTP; tests substitute a
//! mock.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::{
    cart::{CartItem, ProductId},
    catalog::Product,
    contact::{ContactForm, ContactReceipt},
};

pub use errors::ApiError;

pub mod errors;
pub mod http;

/// Path of the cart contents endpoint.
pub const CART_ITEMS_PATH: &str = "api/cart/items";

/// Path of the add-to-cart endpoint.
pub const CART_ADD_PATH: &str = "api/cart/add";

/// Path of the remove-from-cart endpoint.
pub const CART_REMOVE_PATH: &str = "api/cart/remove";

/// Path of the contact form endpoint.
pub const CONTACT_PATH: &str = "api/contact";

/// Path of the menu endpoint.
pub const CATALOG_PATH: &str = "api/ice-creams";

/// Status value the shop uses for an accepted command.
pub const SUCCESS_STATUS: &str = "success";

/// Body of an add-to-cart command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    /// Product to add.
    pub product_id: ProductId,

    /// Units to add.
    pub quantity: u32,
}

impl AddToCart {
    /// A single unit of `product_id`.
    pub fn single(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}

/// Body of a remove-from-cart command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromCart {
    /// Product whose line is removed.
    pub product_id: ProductId,
}

/// Status envelope returned by cart commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// `"success"` or an error status.
    pub status: String,

    /// Human-readable explanation.
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a cart command the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The server applied the command.
    Applied,

    /// The server refused the command.
    Rejected {
        /// Server-provided reason.
        message: String,
    },
}

impl From<CommandResponse> for CommandOutcome {
    fn from(response: CommandResponse) -> Self {
        if response.status == SUCCESS_STATUS {
            Self::Applied
        } else {
            Self::Rejected {
                message: response.message.unwrap_or(response.status),
            }
        }
    }
}

/// Envelope of the cart contents endpoint; the server's own `total` is not read.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CartItemsResponse {
    pub(crate) items: Vec<CartItem>,
}

/// Operations the storefront performs against the shop.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// Fetch the current cart lines.
    async fn cart_items(&self) -> Result<Vec<CartItem>, ApiError>;

    /// Add units of a product to the cart.
    async fn add_to_cart(&self, command: AddToCart) -> Result<CommandOutcome, ApiError>;

    /// Remove a product's line from the cart.
    async fn remove_from_cart(&self, product_id: ProductId) -> Result<CommandOutcome, ApiError>;

    /// Submit the contact form.
    async fn submit_contact(&self, form: ContactForm) -> Result<ContactReceipt, ApiError>;

    /// Fetch the menu.
    async fn catalog(&self) -> Result<Vec<Product>, ApiError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn success_status_is_applied() -> TestResult {
        let response: CommandResponse = serde_json::from_str(r#"{"status": "success"}"#)?;

        assert_eq!(CommandOutcome::from(response), CommandOutcome::Applied);

        Ok(())
    }

    #[test]
    fn other_status_carries_message() -> TestResult {
        let response: CommandResponse =
            serde_json::from_str(r#"{"status": "error", "message": "Out of stock"}"#)?;

        assert_eq!(
            CommandOutcome::from(response),
            CommandOutcome::Rejected {
                message: "Out of stock".to_string()
            }
        );

        Ok(())
    }

    #[test]
    fn add_to_cart_serializes_product_and_quantity() -> TestResult {
        let body = serde_json::to_value(AddToCart::single(7))?;

        assert_eq!(body, serde_json::json!({"product_id": 7, "quantity": 1}));

        Ok(())
    }

    #[test]
    fn cart_items_envelope_ignores_server_total() -> TestResult {
        let response: CartItemsResponse = serde_json::from_str(
            r#"{"items": [{"id": 1, "name": "Vanilla", "price": 2.5, "quantity": 2, "total": 5.0}], "total": 99}"#,
        )?;

        assert_eq!(response.items.len(), 1);

        Ok(())
    }
}
