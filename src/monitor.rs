use crate::gardena::{ApiError, GardenaApi};
use crate::metrics::Metrics;
use crate::state::{Store, StoreError};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Performs the one-time device discovery and the periodic endpoint health
/// checks, feeding both into the metrics registry.
pub struct Monitor {
    api: GardenaApi,
    store: Store,
    gateway_ip: Option<String>,
    metrics: Arc<Metrics>,
    probe: Client,
}

impl Monitor {
    pub fn new(api: GardenaApi, gateway_ip: Option<String>, metrics: Arc<Metrics>) -> Self {
        Monitor {
            api,
            store: Store::new(),
            gateway_ip,
            metrics,
            probe: Client::new(),
        }
    }

    /// Queries all locations, stores every location's devices and exports the
    /// location count and the per-device gauges. Runs once at startup; any
    /// failure here is fatal because a partially built store is not a
    /// trustworthy snapshot.
    #[instrument(skip_all)]
    pub async fn initialize_location_metrics(&mut self) -> Result<(), InitializeError> {
        info!("🌱 Loading locations...");
        let locations = self.api.get_locations().await?;
        self.metrics.set_locations_total(self.api.base_url(), locations.data.len() as f64);

        for location in &locations.data {
            let state = self.api.get_initial_state_for(location).await?;
            self.store.store_devices(&state)?;
        }
        for device in self.store.devices() {
            self.metrics.export_device(device);
        }

        info!("🌱 Loading locations... OK, {} location(s), {} device(s)", locations.data.len(), self.store.len());
        Ok(())
    }

    /// One health-check tick: probes the api health endpoint and, when a
    /// gateway ip is configured, the gateway bridge device. Failures are
    /// reflected as 0 in the health gauge and never abort the loop.
    #[instrument(skip_all)]
    pub async fn monitor_endpoint_health(&self) {
        let timer = self.metrics.health_check_timer();

        let api_health_url = self.api.api_health_url();
        let up = check_health(&self.probe, &api_health_url).await;
        self.metrics.set_endpoint_health("api", &api_health_url, up);

        if let Some(ip) = &self.gateway_ip {
            let gateway_url = format!("http://{ip}");
            let up = check_health(&self.probe, &gateway_url).await;
            self.metrics.set_endpoint_health("gateway", &gateway_url, up);
        }

        timer.observe_duration();
    }

    /// Sequential sleep loop; ticks never overlap because the body is awaited
    /// to completion before sleeping.
    pub async fn run(self, interval: Duration) {
        loop {
            self.monitor_endpoint_health().await;
            sleep(interval).await;
        }
    }
}

/// A bare GET expecting a 200; anything else counts as unhealthy.
async fn check_health(client: &Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) if response.status() == StatusCode::OK => true,
        Ok(response) => {
            warn!("⚠️ Endpoint '{}' returned status code {}", url, response.status());
            false
        }
        Err(e) => {
            warn!("⚠️ Querying endpoint '{}' failed: {}", url, e);
            false
        }
    }
}

#[derive(Error, Debug)]
pub enum InitializeError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::secrets::Credentials;

    fn api(base_url: String) -> GardenaApi {
        let config = AppConfigBuilder::new().base_url(base_url).build();
        GardenaApi::new(
            &config,
            Credentials {
                client_id: "<some-client-id>".to_string(),
                client_secret: "<some-client-secret>".to_string(),
            },
        )
        .expect("client should build")
    }

    #[tokio::test]
    async fn initialize_location_metrics_fills_the_store_and_the_registry() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/locations")
            .with_status(200)
            .with_body(include_str!("../tests/resources/locations.json"))
            .create_async()
            .await;
        server
            .mock("GET", "/locations/123abc")
            .with_status(200)
            .with_body(include_str!("../tests/resources/location.json"))
            .create_async()
            .await;

        let metrics = Arc::new(Metrics::new()?);
        let mut monitor = Monitor::new(api(server.url()), None, metrics.clone());

        monitor.initialize_location_metrics().await?;

        assert_eq!(monitor.store.len(), 2);
        let rendered = metrics.render()?;
        assert!(rendered.contains(&format!(r#"gardena_smart_system_locations_total{{endpoint="{}"}} 1"#, server.url())));
        assert!(rendered.contains(r#"name="Sensor01""#));

        Ok(())
    }

    #[tokio::test]
    async fn a_failing_initial_load_is_propagated() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/locations").with_status(500).create_async().await;

        let metrics = Arc::new(Metrics::new().expect("registry should build"));
        let mut monitor = Monitor::new(api(server.url()), None, metrics);

        let result = monitor.initialize_location_metrics().await;

        assert!(matches!(result, Err(InitializeError::Api(ApiError::UnexpectedStatus { status: 500, .. }))));
    }

    #[tokio::test]
    async fn monitor_endpoint_health_exports_up_and_down() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/health").with_status(200).create_async().await;

        let metrics = Arc::new(Metrics::new()?);
        // The gateway probe points at the same mock server, which answers 501
        // for unmatched paths.
        let gateway_addr = server.host_with_port();
        let monitor = Monitor::new(api(server.url()), Some(gateway_addr.clone()), metrics.clone());

        monitor.monitor_endpoint_health().await;

        let rendered = metrics.render()?;
        assert!(rendered.contains(&format!(r#"gardena_smart_system_endpoint_health{{addr="{}/health",endpoint="api"}} 1"#, server.url())));
        assert!(rendered.contains(&format!(r#"gardena_smart_system_endpoint_health{{addr="http://{gateway_addr}",endpoint="gateway"}} 0"#)));

        Ok(())
    }
}
