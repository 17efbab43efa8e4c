//! Scholar backend entry point.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use scholar::inbound::http::health::HealthState;
use scholar::inbound::http::session_config::fingerprint::key_fingerprint;
use scholar::inbound::http::session_config::{BuildMode, session_settings_from_env};
use scholar::settings::AppSettings;
use server::{ServerConfig, create_server};

fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}

fn load_server_config() -> std::io::Result<ServerConfig> {
    let settings = AppSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        "session signing key loaded"
    );

    let config = ServerConfig::from_settings(&settings, session).map_err(std::io::Error::other)?;
    info!(
        storage = %settings.storage,
        data_dir = %settings.data_dir().display(),
        "settings loaded"
    );
    Ok(config)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();
    let config = load_server_config()?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &config)?;
    info!(addr = %config.bind_addr(), "scholar listening");
    let outcome = server.await;
    health_state.mark_unhealthy();
    info!("scholar stopped");
    outcome
}
