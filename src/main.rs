// region:    --- Imports
use dotenvy::dotenv;
use furniture_registry::clock::SystemClock;
use furniture_registry::config::AppConfig;
use furniture_registry::furniture::FurnitureRegistry;
use furniture_registry::server;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> invalid configuration: {}", "Main", e);
            return Err(e.into());
        }
    };

    let store = match server::build_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!("{:<12} --> store initialization failed: {:?}", "Main", e);
            return Err(e.into());
        }
    };
    info!("{:<12} --> store ready", "Main");

    let registry = Arc::new(FurnitureRegistry::new(store, Arc::new(SystemClock)));
    let router = server::build_router(registry, &config);

    let listener = TcpListener::bind(&config.bind_addr).await?;

    if let Err(err) = server::serve(listener, router).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
