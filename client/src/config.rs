//! Client configuration: base URL and bearer token.

use thiserror::Error;
use url::Url;

/// Public endpoint of the lore API.
pub const DEFAULT_BASE_URL: &str = "https://the-one-api.dev/v2/";

/// Bearer token for the lore API.
///
/// The `Debug` impl redacts the secret so tokens never leak into logs.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Expose the raw secret. Only the request builder should need this.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Process-start configuration for [`LoreClient`](crate::LoreClient).
///
/// There is no process-wide mutable state: the token and base URL are plain
/// values handed to the constructor.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub token: ApiToken,
}

#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The token contains bytes that cannot appear in an HTTP header.
    #[error("API token is not a valid header value")]
    InvalidToken,
    /// The base URL cannot carry path segments (e.g. `data:` URLs).
    #[error("base URL {0} cannot be a request base")]
    UnusableBaseUrl(Url),
    #[error("failed to build HTTP client")]
    Http(#[source] reqwest::Error),
}

impl ClientConfig {
    /// Configuration pointing at the public API.
    #[must_use]
    pub fn new(token: ApiToken) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            token,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiToken, ClientConfig, DEFAULT_BASE_URL};

    #[test]
    fn debug_output_redacts_the_token() {
        let token = ApiToken::new("super-secret");
        let printed = format!("{token:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("***"));
    }

    #[test]
    fn default_config_targets_the_public_api() {
        let config = ClientConfig::new(ApiToken::new("t"));
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
    }
}
