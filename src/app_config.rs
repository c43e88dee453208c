use config::Config;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.smart.gardena.dev/v1";
const DEFAULT_AUTH_URL: &str = "https://api.authentication.husqvarnagroup.dev/v1/oauth2/token";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    exporter: Exporter,
    secrets: Secrets,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)
            .unwrap()
            .set_default("api.auth_url", DEFAULT_AUTH_URL)
            .unwrap()
            .set_default("api.timeout_seconds", 10)
            .unwrap()
            .set_default("exporter.port", 9093)
            .unwrap()
            .set_default("exporter.interval_seconds", 30)
            .unwrap()
            .set_default("secrets.directory", "/etc/secrets/gardena-smart-system-exporter")
            .unwrap()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    pub fn secrets(&self) -> &Secrets {
        &self.secrets
    }
}

#[derive(Debug, Deserialize)]
pub struct Api {
    base_url: String,
    auth_url: String,
    timeout_seconds: u64,
}

impl Api {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Deserialize)]
pub struct Exporter {
    port: u16,
    interval_seconds: u64,
    gateway_ip: Option<String>,
}

impl Exporter {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    pub fn gateway_ip(&self) -> Option<&str> {
        self.gateway_ip.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Secrets {
    directory: String,
}

impl Secrets {
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api: Api {
                    base_url: DEFAULT_BASE_URL.to_string(),
                    auth_url: DEFAULT_AUTH_URL.to_string(),
                    timeout_seconds: 10,
                },
                exporter: Exporter {
                    port: 9093,
                    interval_seconds: 30,
                    gateway_ip: None,
                },
                secrets: Secrets {
                    directory: "/etc/secrets/gardena-smart-system-exporter".to_string(),
                },
            },
        }
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.config.api.base_url = url;
        self
    }

    pub fn auth_url(mut self, url: String) -> Self {
        self.config.api.auth_url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
