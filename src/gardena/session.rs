use crate::gardena::client::ApiError;
use crate::gardena::response::AuthResponse;
use crate::secrets::Credentials;
use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Client;
use tracing::{debug, instrument};

/// Tokens are refreshed this long before their actual expiry.
const REFRESH_MARGIN_SECONDS: i64 = 60;

/// The cached bearer token, its expiry and the credentials used to obtain it.
/// Mutated only by a successful authentication; read on every outgoing request.
#[derive(Debug)]
pub struct Session {
    client_id: String,
    client_secret: String,
    access_token: String,
    user_id: String,
    token_expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Session {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            access_token: String::new(),
            user_id: String::new(),
            token_expires_at: None,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Performs the client-credentials token exchange against the given
    /// endpoint, unless a cached token is still within its validity. On
    /// success the session stores `<token type> <token>`, the user id and the
    /// expiry. No retries; a failure is terminal for the calling operation.
    #[instrument(skip_all)]
    pub async fn authenticate(&mut self, http: &Client, auth_url: &str) -> Result<(), ApiError> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        if self.token_is_valid() {
            debug!("Cached access token is still valid, skipping token exchange");
            return Ok(());
        }

        let response = http
            .post(auth_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: auth_url.to_string(),
                source,
            })?;

        let auth = response.json::<AuthResponse>().await.map_err(|source| ApiError::Decode {
            url: auth_url.to_string(),
            source,
        })?;

        self.access_token = format!("{} {}", auth.token_type, auth.access_token);
        self.user_id = auth.user_id;
        self.token_expires_at = Some(Utc::now() + TimeDelta::seconds(auth.expires_in));
        debug!("Acquired an access token for user '{}'", self.user_id);
        Ok(())
    }

    fn token_is_valid(&self) -> bool {
        let Some(expires_at) = self.token_expires_at else {
            return false;
        };
        !self.access_token.is_empty() && Utc::now() < expires_at - TimeDelta::seconds(REFRESH_MARGIN_SECONDS)
    }
}
