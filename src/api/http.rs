//! HTTP client for the shop's JSON API.

use async_trait::async_trait;
use reqwest::{
    Client, Method, RequestBuilder, Response, StatusCode,
    header::{ACCEPT, COOKIE},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    api::{
        AddToCart, ApiError, CART_ADD_PATH, CART_ITEMS_PATH, CART_REMOVE_PATH, CATALOG_PATH,
        CONTACT_PATH, CartItemsResponse, CommandOutcome, CommandResponse, RemoveFromCart,
        StorefrontApi,
    },
    cart::{CartItem, ProductId},
    catalog::Product,
    config::{CSRF_HEADER, StorefrontConfig},
    contact::{ContactForm, ContactReceipt},
};

/// [`StorefrontApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    config: StorefrontConfig,
    http: Client,
}

impl HttpStorefrontApi {
    /// Create a new client from the given configuration.
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.config.endpoint(path)?;

        debug!(%method, %url, "sending storefront request");

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json");

        if let Some(cookie) = self.config.session_cookie() {
            request = request.header(COOKIE, cookie);
        }

        Ok(request)
    }

    fn mutation(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        let request = self.request(Method::POST, path)?;

        Ok(match self.config.csrf_token() {
            Some(token) => request.header(CSRF_HEADER, token.as_str()),
            None => {
                warn!(path, "sending mutating request without an anti-forgery token");
                request
            }
        })
    }

    /// Decode a read response, mapping 401 and other failures to errors.
    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Decode a command response. Failed commands still carry a status envelope, so the body
    /// is read whatever the HTTP status.
    async fn command(&self, path: &str, body: &impl Serialize) -> Result<CommandOutcome, ApiError> {
        let response = self.mutation(path)?.json(body).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let text = response.text().await?;

        match serde_json::from_str::<CommandResponse>(&text) {
            Ok(envelope) => Ok(envelope.into()),
            Err(error) if status.is_success() => Err(ApiError::Decode(error)),
            Err(_) => Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}

#[async_trait(?Send)]
impl StorefrontApi for HttpStorefrontApi {
    async fn cart_items(&self) -> Result<Vec<CartItem>, ApiError> {
        let response = self.request(Method::GET, CART_ITEMS_PATH)?.send().await?;
        let envelope: CartItemsResponse = Self::read(response).await?;

        debug!(lines = envelope.items.len(), "fetched cart items");

        Ok(envelope.items)
    }

    async fn add_to_cart(&self, command: AddToCart) -> Result<CommandOutcome, ApiError> {
        self.command(CART_ADD_PATH, &command).await
    }

    async fn remove_from_cart(&self, product_id: ProductId) -> Result<CommandOutcome, ApiError> {
        self.command(CART_REMOVE_PATH, &RemoveFromCart { product_id })
            .await
    }

    async fn submit_contact(&self, form: ContactForm) -> Result<ContactReceipt, ApiError> {
        let response = self.mutation(CONTACT_PATH)?.json(&form).send().await?;

        Self::read(response).await
    }

    async fn catalog(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.request(Method::GET, CATALOG_PATH)?.send().await?;

        Self::read(response).await
    }
}
