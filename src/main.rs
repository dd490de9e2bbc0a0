//! postal-distance - postal code lookup service.
//!
//! Resolves Japanese postal codes through an external geocoding API and
//! reports how far the matched address is from Tokyo Station.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postal_distance::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let default_filter = if cli::is_verbose() {
        "postal_distance=info,tower_http=debug"
    } else {
        "postal_distance=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::run().await
}
