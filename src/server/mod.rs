//! HTTP surface for postal code lookups.
//!
//! - `GET /address?postal_code=<code>`: geocode and measure the distance to Tokyo Station
//! - `GET /address/access_logs`: request counts per postal code
//! - `GET /health`: liveness probe

mod handlers;
mod routes;

pub use handlers::{AccessLogsResponse, ApiError};
pub use routes::create_router;

use std::sync::Arc;

use crate::config::Settings;
use crate::services::{AddressService, GeocodeClient};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub address: AddressService,
}

impl AppState {
    /// Wire the geocoding client and the SQLite access log from settings.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let ctx = settings.create_db_context()?;
        let geocoder = GeocodeClient::from_settings(settings)?;

        Ok(Self {
            address: AddressService::new(Arc::new(geocoder), Arc::new(ctx.access_logs())),
        })
    }

    pub fn from_service(address: AddressService) -> Self {
        Self { address }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let host = host.trim_start_matches('[').trim_end_matches(']');
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
