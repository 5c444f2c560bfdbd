//! CLI configuration

use clap::Parser;

use crate::{
    commands::Command,
    config::{logging::LoggingConfig, shop::ShopConfig},
};

pub(crate) mod logging;
pub(crate) mod shop;

/// Scoop storefront CLI configuration
#[derive(Debug, Parser)]
#[command(name = "scoop", about = "Ice-cream parlour storefront client", long_about = None)]
pub(crate) struct CliConfig {
    /// Shop connection settings.
    #[command(flatten)]
    pub(crate) shop: ShopConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Action to perform.
    #[command(subcommand)]
    pub(crate) command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_flattened_sections_and_subcommand() -> TestResult {
        let config = CliConfig::try_parse_from([
            "scoop",
            "--base-url",
            "http://localhost:5000",
            "--csrf-token",
            "abc",
            "--log-level",
            "debug",
            "add",
            "7",
        ])?;

        assert_eq!(config.shop.base_url, "http://localhost:5000");
        assert_eq!(config.logging.log_level, "debug");
        assert!(matches!(config.command, Command::Add { product_id: 7 }));

        Ok(())
    }

    #[test]
    fn contact_fields_parse_as_pairs() -> TestResult {
        let config = CliConfig::try_parse_from([
            "scoop",
            "contact",
            "--field",
            "name=Asha",
            "--field",
            "message=Hello = hi",
        ])?;

        let Command::Contact { fields } = config.command else {
            return Err("expected contact command".into());
        };

        assert_eq!(
            fields,
            vec![
                ("name".to_string(), "Asha".to_string()),
                ("message".to_string(), "Hello = hi".to_string()),
            ]
        );

        Ok(())
    }

    #[test]
    fn malformed_contact_field_is_rejected() {
        let result = CliConfig::try_parse_from(["scoop", "contact", "--field", "no-equals"]);

        assert!(result.is_err());
    }
}
