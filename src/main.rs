use crate::app_config::AppConfig;
use crate::gardena::GardenaApi;
use crate::metrics::Metrics;
use crate::monitor::Monitor;
use crate::secrets::Credentials;
use std::path::Path;
use std::sync::Arc;
use tokio::task;
use tracing::info;

mod app_config;
mod device;
mod gardena;
mod metrics;
mod monitor;
mod secrets;
mod server;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪴 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let credentials = Credentials::from_directory(Path::new(config.secrets().directory()))?;
    let mut api = GardenaApi::new(&config, credentials)?;
    api.authenticate().await?;
    info!("✅  Authenticated against the Gardena smart system api");

    let metrics = Arc::new(Metrics::new()?);
    let mut monitor = Monitor::new(api, config.exporter().gateway_ip().map(str::to_string), metrics.clone());
    monitor.initialize_location_metrics().await?;
    info!("✅  Discovered all devices");

    let interval = config.exporter().interval();
    task::spawn(async move {
        monitor.run(interval).await;
    });
    info!("✅  Initialized endpoint health monitor");

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    server::serve(metrics, config.exporter().port()).await?;

    Ok(())
}
