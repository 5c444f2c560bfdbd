//! Scoop storefront CLI

use std::{io, process};

use scoop::prelude::*;
use tracing::error;

use crate::{config::CliConfig, page::TerminalPage};

mod commands;
mod config;
mod logging;
mod page;

/// Scoop CLI entry point
#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(message) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{message}");
        }

        process::exit(1);
    }

    let storefront = match config.shop.storefront() {
        Ok(storefront) => storefront,
        Err(config_error) => {
            error!("invalid shop configuration: {config_error}");

            process::exit(2);
        }
    };

    let controller = CartController::new(
        HttpStorefrontApi::new(storefront.clone()),
        TerminalPage::new(io::stdout()),
        &storefront,
    );

    if let Err(message) = commands::run(config.command, &controller).await {
        error!("{message}");

        process::exit(1);
    }
}
