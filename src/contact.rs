//! Contact form submissions

use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::StorefrontApi;

/// Notification shown when a contact message could not be sent.
pub const CONTACT_FAILURE: &str = "There was an error sending your message. Please try again.";

/// How long the confirmation banner stays on screen.
pub const CONFIRMATION_DISPLAY: Duration = Duration::from_secs(5);

/// Contact form fields, sent as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactForm(BTreeMap<String, String>);

impl ContactForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Value of a field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether no fields are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContactForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// The shop's acknowledgement of a contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    /// Message to show the visitor.
    pub message: String,

    /// Server status, when reported.
    #[serde(default)]
    pub status: Option<String>,

    /// Server timestamp, when reported.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Outcome of a contact submission, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Show `message` as a confirmation and reset the form.
    Sent {
        /// Confirmation text from the shop.
        message: String,
    },

    /// Show a blocking notification; the form keeps its contents.
    Failed {
        /// Notification text.
        message: String,
    },
}

/// Submit a contact form.
pub async fn submit_contact<A>(api: &A, form: ContactForm) -> ContactOutcome
where
    A: StorefrontApi + ?Sized,
{
    match api.submit_contact(form).await {
        Ok(receipt) => {
            info!(timestamp = receipt.timestamp.as_deref(), "contact message sent");

            ContactOutcome::Sent {
                message: receipt.message,
            }
        }
        Err(error) => {
            warn!(%error, "contact message failed");

            ContactOutcome::Failed {
                message: CONTACT_FAILURE.to_string(),
            }
        }
    }
}
