//! Cart snapshots

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Identifier of a product line in the cart.
pub type ProductId = u64;

/// Topping identifier as stored by the shop: a number, or the string a form checkbox posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToppingId {
    /// Numeric identifier.
    Number(u64),

    /// Identifier kept as posted.
    Text(String),
}

/// Optional customisation the shop attaches to a cart line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    /// Cup size, e.g. `"large"`.
    #[serde(default)]
    pub size: Option<String>,

    /// Serving container, e.g. `"waffle cone"`.
    #[serde(default)]
    pub container: Option<String>,

    /// Selected topping identifiers.
    #[serde(default)]
    pub topping_ids: Vec<ToppingId>,

    /// Free-form notes for the kitchen.
    #[serde(default)]
    pub extra_notes: Option<String>,
}

impl Customization {
    /// Short one-line description of the customisation, if it has any content.
    pub fn summary(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        if let Some(size) = self.size.as_deref().filter(|size| !size.is_empty()) {
            parts.push(size.to_string());
        }

        if let Some(container) = self.container.as_deref().filter(|value| !value.is_empty()) {
            parts.push(container.to_string());
        }

        match self.topping_ids.len() {
            0 => {}
            1 => parts.push("1 topping".to_string()),
            count => parts.push(format!("{count} toppings")),
        }

        if let Some(notes) = self.extra_notes.as_deref().map(str::trim)
            && !notes.is_empty()
        {
            parts.push(format!("\u{201c}{notes}\u{201d}"));
        }

        (!parts.is_empty()).then(|| parts.join(" · "))
    }
}

/// A single line of the server-side cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product the line refers to.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Decimal,

    /// Number of units.
    pub quantity: u32,

    /// Line total as computed by the server.
    pub total: Decimal,

    /// Customisation, present for made-to-order lines.
    ///
    /// A customisation that does not decode is dropped rather than failing the line.
    #[serde(
        default,
        deserialize_with = "lenient_customization",
        skip_serializing_if = "Option::is_none"
    )]
    pub customization: Option<Customization>,
}

fn lenient_customization<'de, D>(deserializer: D) -> Result<Option<Customization>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match serde_json::from_value(value) {
        Ok(customization) => Ok(Some(customization)),
        Err(error) => {
            debug!(%error, "ignoring unreadable cart line customisation");

            Ok(None)
        }
    }
}

/// The cart as last reported by the server, in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    items: Vec<CartItem>,
}

impl CartSnapshot {
    /// Creates a snapshot from the items returned by the server.
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Returns the lines in server order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every line's `total`.
    ///
    /// Any aggregate the server sends alongside the items is ignored.
    pub fn grand_total(&self) -> Decimal {
        self.items.iter().map(|item| item.total).sum()
    }
}

impl From<Vec<CartItem>> for CartSnapshot {
    fn from(items: Vec<CartItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use testresult::TestResult;

    use super::*;

    fn item(id: ProductId, price: &str, quantity: u32, total: &str) -> TestResult<CartItem> {
        Ok(CartItem {
            id,
            name: format!("Flavour {id}"),
            price: Decimal::from_str(price)?,
            quantity,
            total: Decimal::from_str(total)?,
            customization: None,
        })
    }

    #[test]
    fn grand_total_sums_line_totals() -> TestResult {
        let snapshot = CartSnapshot::new(vec![
            item(1, "2.50", 2, "5.00")?,
            item(2, "1.25", 3, "3.75")?,
            item(3, "0.10", 1, "0.10")?,
        ]);

        assert_eq!(snapshot.grand_total(), Decimal::from_str("8.85")?);
        assert_eq!(snapshot.len(), 3);

        Ok(())
    }

    #[test]
    fn grand_total_trusts_line_totals_over_price_times_quantity() -> TestResult {
        let snapshot = CartSnapshot::new(vec![item(1, "2.50", 2, "4.00")?]);

        assert_eq!(snapshot.grand_total(), Decimal::from_str("4.00")?);

        Ok(())
    }

    #[test]
    fn empty_snapshot_totals_zero() {
        let snapshot = CartSnapshot::default();

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn deserializes_server_item_with_float_amounts() -> TestResult {
        let item: CartItem = serde_json::from_str(
            r#"{"id": 1, "name": "Vanilla", "price": 2.5, "quantity": 2, "total": 5.0}"#,
        )?;

        assert_eq!(item.price, Decimal::from_str("2.5")?);
        assert_eq!(item.total, Decimal::from(5));
        assert!(item.customization.is_none());

        Ok(())
    }

    #[test]
    fn topping_ids_posted_as_strings_still_decode() -> TestResult {
        let item: CartItem = serde_json::from_str(
            r#"{"id": 3, "name": "Sundae", "price": 150, "quantity": 1, "total": 150,
                "customization": {"size": "large", "container": "cone",
                                  "topping_ids": ["1", "4"], "extra_notes": ""}}"#,
        )?;

        let customization = item.customization.ok_or("customisation was dropped")?;

        assert_eq!(
            customization.topping_ids,
            [
                ToppingId::Text("1".to_string()),
                ToppingId::Text("4".to_string())
            ]
        );
        assert_eq!(
            customization.summary().as_deref(),
            Some("large · cone · 2 toppings")
        );

        Ok(())
    }

    #[test]
    fn malformed_customization_keeps_the_line() -> TestResult {
        for customization in [r#""large cone""#, r#"{"size": 3}"#, r#"{"topping_ids": {"a": 1}}"#] {
            let item: CartItem = serde_json::from_str(&format!(
                r#"{{"id": 3, "name": "Sundae", "price": 150, "quantity": 2, "total": 300,
                    "customization": {customization}}}"#
            ))?;

            assert_eq!(item.quantity, 2);
            assert!(item.customization.is_none(), "kept {customization}");
        }

        Ok(())
    }

    #[test]
    fn null_customization_is_absent() -> TestResult {
        let item: CartItem = serde_json::from_str(
            r#"{"id": 1, "name": "Vanilla", "price": 2.5, "quantity": 1, "total": 2.5,
                "customization": null}"#,
        )?;

        assert!(item.customization.is_none());

        Ok(())
    }

    #[test]
    fn customization_summary_lists_present_choices() {
        let customization = Customization {
            size: Some("large".to_string()),
            container: Some("waffle cone".to_string()),
            topping_ids: vec![ToppingId::Number(1), ToppingId::Text("4".to_string())],
            extra_notes: Some("  no nuts ".to_string()),
        };

        assert_eq!(
            customization.summary().as_deref(),
            Some("large · waffle cone · 2 toppings · \u{201c}no nuts\u{201d}")
        );
    }

    #[test]
    fn empty_customization_has_no_summary() {
        let customization = Customization {
            extra_notes: Some("   ".to_string()),
            ..Customization::default()
        };

        assert_eq!(customization.summary(), None);
    }
}
