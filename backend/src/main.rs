//! Service entry-point: loads configuration, wires adapters and serves HTTP.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use nearby_eats::inbound::http::health::HealthState;
use nearby_eats::settings::ServiceSettings;
use server::{ServerConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load()
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|error| io::Error::other(format!("invalid bind address: {error}")))?;

    let http_state = build_http_state(&settings).await?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, http_state))?;
    info!(%bind_addr, "listening");
    server.await
}
