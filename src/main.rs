//! setoran-engine server
//!
//! Loads configuration, builds the router and serves the setoran API.

use setoran_engine::api::{create_router, AppState};
use setoran_engine::config::ConfigLoader;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setoran_engine=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let config_dir =
        std::env::var("SETORAN_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?.with_env_overrides()?;

    tracing::info!(
        config_dir = %config_dir,
        unit_price = %config.unit_price(),
        "Configuration loaded"
    );

    let addr = config.bind_address();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("setoran-engine listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
