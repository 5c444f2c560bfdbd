//! CLI commands

use std::io::Write;

use clap::Subcommand;
use scoop::{catalog::category_label, prelude::*};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::page::TerminalPage;

/// Storefront actions.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show the cart
    Cart,

    /// Add one unit of a product to the cart
    Add {
        /// Product identifier
        product_id: ProductId,
    },

    /// Remove a product's line from the cart
    Remove {
        /// Product identifier
        product_id: ProductId,
    },

    /// List the menu, optionally filtered to one category
    Menu {
        /// Category token, or `all`
        #[arg(short, long, default_value = ALL_CATEGORY_TOKEN)]
        category: String,
    },

    /// Send a message through the contact form
    Contact {
        /// Form field as `name=value`; repeat for each field
        #[arg(short, long = "field", value_parser = parse_field, required = true)]
        fields: Vec<(String, String)>,
    },
}

const ALL_CATEGORY_TOKEN: &str = scoop::catalog::ALL_CATEGORIES;

/// Parse a `name=value` pair, splitting on the first `=`.
pub(crate) fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;

    let name = name.trim();

    if name.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Run a command against the shop.
pub(crate) async fn run<W: Write>(
    command: Command,
    controller: &CartController<HttpStorefrontApi, TerminalPage<W>>,
) -> Result<(), String> {
    match command {
        Command::Cart => expect_rendered(controller.refresh_cart().await),
        Command::Add { product_id } => expect_applied(controller.add_item(product_id).await),
        Command::Remove { product_id } => {
            expect_applied(controller.remove_item(product_id).await)
        }
        Command::Menu { category } => {
            let products = controller
                .api()
                .catalog()
                .await
                .map_err(|error| format!("failed to load menu: {error}"))?;

            let view = filter_by_category(&products, &CategoryFilter::from_token(&category));

            controller.page().emit(&menu_table(&products, &view));

            Ok(())
        }
        Command::Contact { fields } => {
            let form: ContactForm = fields.into_iter().collect();

            match submit_contact(controller.api(), form).await {
                ContactOutcome::Sent { message } => {
                    controller.page().emit(&message);

                    Ok(())
                }
                ContactOutcome::Failed { message } => Err(message),
            }
        }
    }
}

fn expect_rendered(outcome: RefreshOutcome) -> Result<(), String> {
    match outcome {
        RefreshOutcome::Rendered(_) => Ok(()),
        RefreshOutcome::RedirectedToLogin => Err("not signed in".to_string()),
        RefreshOutcome::Failed => Err("could not load the cart".to_string()),
    }
}

fn expect_applied(outcome: MutationOutcome) -> Result<(), String> {
    match outcome {
        MutationOutcome::Applied(refresh) => expect_rendered(refresh),
        MutationOutcome::Rejected => Err("the shop refused the change".to_string()),
        MutationOutcome::Failed => Err("could not reach the shop".to_string()),
    }
}

/// Render the visible products, with the category controls as a header line.
pub(crate) fn menu_table(products: &[Product], view: &MenuView) -> String {
    let controls = view
        .controls
        .iter()
        .map(|control| {
            if control.active {
                format!("[{}]", control.label)
            } else {
                control.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Category", "Price", "Stock"].map(String::from));

    for product in products.iter().filter(|product| view.is_visible(product.id)) {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            category_label(&product.category),
            format_price(product.price),
            product.stock.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    format!("{controls}\n{table}")
}
