//! Tracing setup: env-filtered, bunyan-formatted JSON lines.

use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::error::AppError;

/// Build a subscriber writing to stdout. `RUST_LOG` overrides `default_filter`.
pub fn get_subscriber(name: &str, default_filter: &str) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(name.to_string(), std::io::stdout);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Install the subscriber globally. Fails if one is already installed.
pub fn init_tracing(name: &str, default_filter: &str) -> Result<(), AppError> {
    set_global_default(get_subscriber(name, default_filter))
        .map_err(|e| AppError::Config(format!("Failed to set tracing subscriber: {}", e)))
}
