use crate::app_config::AppConfig;
use crate::gardena::response::{Location, Locations, State};
use crate::gardena::session::Session;
use crate::secrets::Credentials;
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

const LOCATIONS_PATH: &str = "/locations";
const HEALTH_PATH: &str = "/health";

/// Client for the Gardena smart system api. Built once by a fallible
/// constructor; base url, auth url and the underlying http client never change
/// afterwards. Requests reuse the session's cached token and do not
/// re-authenticate on their own, so token freshness is only guaranteed right
/// after the startup authentication.
#[derive(Debug)]
pub struct GardenaApi {
    base_url: String,
    auth_url: String,
    http: Client,
    session: Session,
}

impl GardenaApi {
    pub fn new(config: &AppConfig, credentials: Credentials) -> Result<GardenaApi, ApiError> {
        if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        let http = Client::builder().timeout(config.api().timeout()).build()?;

        Ok(GardenaApi {
            base_url: config.api().base_url().to_string(),
            auth_url: config.api().auth_url().to_string(),
            http,
            session: Session::new(credentials),
        })
    }

    pub async fn authenticate(&mut self) -> Result<(), ApiError> {
        self.session.authenticate(&self.http, &self.auth_url).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }

    #[instrument(skip(self))]
    pub async fn get_locations(&self) -> Result<Locations, ApiError> {
        self.get_json(LOCATIONS_PATH).await
    }

    #[instrument(skip_all, fields(location = %location.id))]
    pub async fn get_initial_state_for(&self, location: &Location) -> Result<State, ApiError> {
        self.get_json(&format!("{LOCATIONS_PATH}/{}", location.id)).await
    }

    /// Issues a GET against the base url plus the given path, attaching the
    /// api key and the cached bearer token.
    async fn query(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .get(&url)
            .header("X-Api-Key", self.session.client_id())
            .header(header::AUTHORIZATION, self.session.access_token())
            .send()
            .await
            .map_err(|source| ApiError::Transport { url, source })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.query(path).await?;
        let url = response.url().to_string();
        if response.status() != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                status: response.status().as_u16(),
                url,
            });
        }
        response.json::<T>().await.map_err(|source| ApiError::Decode { url, source })
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("client id or client secret is empty")]
    MissingCredentials,
    #[error("unable to build the http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("request to '{url}' failed: {source}")]
    Transport { url: String, source: reqwest::Error },
    #[error("unexpected status code {status} from '{url}'")]
    UnexpectedStatus { status: u16, url: String },
    #[error("unable to decode the response from '{url}': {source}")]
    Decode { url: String, source: reqwest::Error },
}
