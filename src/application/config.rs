use crate::constants::{DEFAULT_API_URL, DEFAULT_LOGIN_ROUTE, DEFAULT_TIMEOUT_SECS, REFRESH_PATH};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every relative request path is resolved against
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Headers sent with every request
    pub default_headers: BTreeMap<String, String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the token refresh flow
pub struct AuthConfig {
    /// Path of the refresh endpoint, relative to the base URL
    pub refresh_path: String,
    /// Route of the login view reported when the session is lost
    pub login_route: String,
    /// File used by the persistent credential store, if any
    pub token_file: Option<PathBuf>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the ATS API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment, loading `.env` first
    ///
    /// | Variable          | Default                        |
    /// |-------------------|--------------------------------|
    /// | `ATS_API_URL`     | `http://localhost:8000/api/v1` |
    /// | `ATS_API_TIMEOUT` | `30`                           |
    /// | `ATS_LOGIN_ROUTE` | `/auth`                        |
    /// | `ATS_TOKEN_FILE`  | unset (in-memory store)        |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("ATS_API_URL", String::from(DEFAULT_API_URL));

        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: get_env_or_default("ATS_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                default_headers: default_headers(),
            },
            auth: AuthConfig {
                refresh_path: String::from(REFRESH_PATH),
                login_route: get_env_or_default(
                    "ATS_LOGIN_ROUTE",
                    String::from(DEFAULT_LOGIN_ROUTE),
                ),
                token_file: get_env_or_none::<PathBuf>("ATS_TOKEN_FILE"),
            },
        }
    }

    /// Creates a configuration pointing at `base_url`, every other field at its default
    ///
    /// The environment is not consulted, which makes this the constructor of choice in tests.
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
                default_headers: default_headers(),
            },
            auth: AuthConfig {
                refresh_path: String::from(REFRESH_PATH),
                login_route: String::from(DEFAULT_LOGIN_ROUTE),
                token_file: None,
            },
        }
    }

    /// Resolves `path` against the base URL
    ///
    /// Absolute URLs are returned unchanged.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.rest_api.base_url, path)
        }
    }

    /// Full URL of the refresh endpoint
    #[must_use]
    pub fn refresh_url(&self) -> String {
        self.url_for(&self.auth.refresh_path)
    }
}

fn default_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert(
        String::from("Content-Type"),
        String::from("application/json"),
    );
    headers
}
