use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CLIENT_ID_FILE: &str = "client-id";
const CLIENT_SECRET_FILE: &str = "client-secret";

/// The two opaque strings required for the client-credentials token exchange,
/// read from the mounted secret files.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Reads the `client-id` and `client-secret` files from the given
    /// directory, trimming one trailing newline from each.
    pub fn from_directory(directory: &Path) -> Result<Credentials, SecretsError> {
        Ok(Credentials {
            client_id: read_secret(directory.join(CLIENT_ID_FILE))?,
            client_secret: read_secret(directory.join(CLIENT_SECRET_FILE))?,
        })
    }
}

fn read_secret(path: PathBuf) -> Result<String, SecretsError> {
    let raw = fs::read_to_string(&path).map_err(|source| SecretsError::Unreadable { path, source })?;
    Ok(raw.strip_suffix('\n').unwrap_or(&raw).to_string())
}

#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("unable to read secret file at '{path}': {source}")]
    Unreadable { path: PathBuf, source: std::io::Error },
}
