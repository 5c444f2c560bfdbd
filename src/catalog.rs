//! Menu catalogue and category filtering

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::ProductId;

/// Category token that selects every product.
pub const ALL_CATEGORIES: &str = "all";

/// A product on the menu, as served by `/api/ice-creams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, used for cart commands.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Marketing copy.
    #[serde(default)]
    pub description: Option<String>,

    /// Shelf price.
    pub price: Decimal,

    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Category tag.
    pub category: String,

    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
}

/// The category a menu is filtered to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every product.
    #[default]
    All,

    /// Show products tagged with this category.
    Only(String),
}

impl CategoryFilter {
    /// Parse a category token, treating [`ALL_CATEGORIES`] as the sentinel.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(token.to_string())
        }
    }

    /// Token identifying the control for this filter.
    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Whether a product tagged with `category` is shown under this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

/// A category control in the menu sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryControl {
    /// Token passed back when the control is activated.
    pub token: String,

    /// Display label.
    pub label: String,

    /// Whether the control carries the active emphasis.
    pub active: bool,
}

/// Visibility of one product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Product the card shows.
    pub product_id: ProductId,

    /// Whether the card is displayed.
    pub visible: bool,
}

/// Result of filtering the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// Category controls, `all` first.
    pub controls: Vec<CategoryControl>,

    /// Card visibility, in catalogue order.
    pub entries: Vec<MenuEntry>,
}

impl MenuView {
    /// Identifiers of the visible products.
    pub fn visible_ids(&self) -> Vec<ProductId> {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.product_id)
            .collect()
    }

    /// Whether the given product is visible.
    pub fn is_visible(&self, product_id: ProductId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.product_id == product_id && entry.visible)
    }
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();

    for product in products {
        if !seen.iter().any(|category| category == &product.category) {
            seen.push(product.category.clone());
        }
    }

    seen
}

/// Filter the menu to a category.
///
/// Only the control matching `filter` is active; cards are visible when their category matches,
/// or unconditionally for [`CategoryFilter::All`].
pub fn filter_by_category(products: &[Product], filter: &CategoryFilter) -> MenuView {
    let controls = std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories(products))
        .map(|token| CategoryControl {
            label: category_label(&token),
            active: token == filter.token(),
            token,
        })
        .collect();

    let entries = products
        .iter()
        .map(|product| MenuEntry {
            product_id: product.id,
            visible: filter.matches(&product.category),
        })
        .collect();

    MenuView { controls, entries }
}

/// Human label for a category token: first letter upper-cased, `_`/`-` as spaces.
pub fn category_label(token: &str) -> String {
    let spaced = token.replace(['_', '-'], " ");
    let mut chars = spaced.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
