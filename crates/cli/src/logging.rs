//! Logging subscriber initialisation.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::logging::{LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr so command output stays pipeable.
pub(crate) fn init(config: &LoggingConfig) -> Result<(), String> {
    let registry = tracing_subscriber::registry().with(build_env_filter(config));

    let result = match config.log_format {
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(true).with_writer(io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .try_init(),
    };

    result.map_err(|error| format!("failed to initialise logging: {error}"))
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn",
            config.log_level
        ))
    })
}
