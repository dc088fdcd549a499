//! Credentials and OAuth settings, read from the environment.
//!
//! A `.env` file in the working directory is loaded first if one exists, so
//! the secrets can live in an untracked file next to the binary.

use std::{fmt, path::PathBuf};

use crate::error::ShuffleError;

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";

pub const SCOPES: [&str; 3] = [
    "playlist-read-private",
    "playlist-modify-public",
    "playlist-modify-private",
];

const CLIENT_ID_VARS: (&str, &str) = ("RSPOTIFY_CLIENT_ID", "client_id");
const CLIENT_SECRET_VARS: (&str, &str) = ("RSPOTIFY_CLIENT_SECRET", "client_secret");
const REDIRECT_URI_VAR: &str = "RSPOTIFY_REDIRECT_URI";
const CACHE_PATH_VAR: &str = "RSPOTIFY_CACHE_PATH";

#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Where the OAuth token is cached; `None` keeps rspotify's default.
    pub token_cache_path: Option<PathBuf>,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ShuffleError> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ShuffleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |(primary, fallback): (&'static str, &'static str)| {
            get(primary)
                .or_else(|| get(fallback))
                .ok_or(ShuffleError::MissingCredential { primary, fallback })
        };

        Ok(Self {
            client_id: required(CLIENT_ID_VARS)?,
            client_secret: required(CLIENT_SECRET_VARS)?,
            redirect_uri: get(REDIRECT_URI_VAR).unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_owned()),
            token_cache_path: get(CACHE_PATH_VAR).map(PathBuf::from),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("token_cache_path", &self.token_cache_path)
            .finish()
    }
}
