//! Cart view controller
//!
//! The server owns the cart. Every command is followed by a full re-fetch, and every fetch
//! replaces the whole cart display; nothing is cached or diffed between renders.

use tracing::{debug, info, warn};

use crate::{
    api::{AddToCart, ApiError, CommandOutcome, StorefrontApi},
    cart::{CartSnapshot, ProductId},
    config::StorefrontConfig,
    render::{CartDisplay, render},
};

/// Generic notice for an add that never reached the server.
pub const ADD_FAILURE: &str = "Error adding item to cart";

/// Generic notice for a removal that never reached the server.
pub const REMOVE_FAILURE: &str = "Error removing item from cart";

/// Page effects the controller drives.
pub trait CartPage {
    /// Replace the cart display area.
    fn show_cart(&self, display: CartDisplay);

    /// Navigate the whole page to `url`.
    fn navigate_to(&self, url: &str);

    /// Show a blocking notification.
    fn notify(&self, message: &str);

    /// Open the cart overlay.
    fn open_cart_overlay(&self);
}

/// Result of a cart refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The cart was rendered with this many lines.
    Rendered(usize),

    /// The session expired and the page was sent to the login view.
    RedirectedToLogin,

    /// The error indicator was shown.
    Failed,
}

/// Result of an add or remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server applied the command and the cart was refreshed.
    Applied(RefreshOutcome),

    /// The server refused the command; its message was shown.
    Rejected,

    /// The request failed; a generic notice was shown and the cart left as it was.
    Failed,
}

/// Keeps the cart display in step with the server.
#[derive(Debug)]
pub struct CartController<A, P> {
    api: A,
    page: P,
    login_url: String,
}

impl<A: StorefrontApi, P: CartPage> CartController<A, P> {
    /// Creates a controller over `api` driving `page`.
    pub fn new(api: A, page: P, config: &StorefrontConfig) -> Self {
        Self {
            api,
            page,
            login_url: config.login_url(),
        }
    }

    /// The API the controller talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The page the controller drives.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Re-fetch the cart and replace the cart display.
    pub async fn refresh_cart(&self) -> RefreshOutcome {
        match self.api.cart_items().await {
            Ok(items) => {
                let snapshot = CartSnapshot::new(items);
                let lines = snapshot.len();

                debug!(lines, "rendering cart");

                self.page.show_cart(CartDisplay::Items(render(&snapshot)));

                RefreshOutcome::Rendered(lines)
            }
            Err(ApiError::Unauthorized) => {
                info!(url = %self.login_url, "cart session expired, redirecting to login");

                self.page.navigate_to(&self.login_url);

                RefreshOutcome::RedirectedToLogin
            }
            Err(error) => {
                warn!(%error, "failed to load cart");

                self.page.show_cart(CartDisplay::load_error());

                RefreshOutcome::Failed
            }
        }
    }

    /// Add one unit of `product_id`, then refresh and open the cart overlay.
    pub async fn add_item(&self, product_id: ProductId) -> MutationOutcome {
        let result = self.api.add_to_cart(AddToCart::single(product_id)).await;

        match self.settle(result, ADD_FAILURE, product_id).await {
            MutationOutcome::Applied(refresh) => {
                self.page.open_cart_overlay();

                MutationOutcome::Applied(refresh)
            }
            outcome => outcome,
        }
    }

    /// Remove the line for `product_id`, then refresh.
    pub async fn remove_item(&self, product_id: ProductId) -> MutationOutcome {
        let result = self.api.remove_from_cart(product_id).await;

        self.settle(result, REMOVE_FAILURE, product_id).await
    }

    async fn settle(
        &self,
        result: Result<CommandOutcome, ApiError>,
        failure: &str,
        product_id: ProductId,
    ) -> MutationOutcome {
        match result {
            Ok(CommandOutcome::Applied) => MutationOutcome::Applied(self.refresh_cart().await),
            Ok(CommandOutcome::Rejected { message }) => {
                info!(product_id, %message, "cart command rejected");

                self.page.notify(&format!("{failure}: {message}"));

                MutationOutcome::Rejected
            }
            Err(error) => {
                warn!(product_id, %error, "cart command failed");

                self.page.notify(failure);

                MutationOutcome::Failed
            }
        }
    }
}
