//! HTTP gateway client for the Tolkien-lore API.
//!
//! # Architecture
//!
//! [`LoreClient`] is the single point of HTTP access to the external resource
//! service. It owns one pooled [`reqwest::Client`] bound to a fixed base URL,
//! with a `Bearer` authorization header applied to every request. One async
//! method exists per resource endpoint and per resource/sub-resource
//! relationship; all of them decode into the types from [`arda_types`].
//!
//! Two upstream quirks are preserved deliberately:
//!
//! - singular lookups (`/book/{id}`, `/movie/{id}`, ...) still return the
//!   paged [`Paged`] envelope;
//! - `/quotes/random` returns a bare [`Quote`], asymmetric with everything
//!   else.
//!
//! # Resource lifecycle
//!
//! The connection pool lives inside the client value. Cloning a
//! [`LoreClient`] is cheap and shares the pool, which is safe for concurrent
//! use by any number of simultaneous requests; the pool is torn down exactly
//! once when the last clone drops, regardless of how many requests were
//! issued or failed.
//!
//! # Errors
//!
//! Every request surfaces a typed [`ApiError`] distinguishing transport
//! failures, non-2xx statuses (with the code and a capped body excerpt), and
//! decode failures.

mod config;
mod error;
mod query;

pub use config::{ApiToken, ClientBuildError, ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use query::Query;

pub use arda_types;

use arda_types::{Book, Chapter, Character, EntityId, Movie, Paged, Quote};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT_SECS: u64 = 30;
const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_MAX_IDLE_PER_HOST: usize = 8;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Gateway to the lore API. See the crate docs for the full contract.
#[derive(Debug, Clone)]
pub struct LoreClient {
    http: reqwest::Client,
    base_url: Url,
}

impl LoreClient {
    /// Build a client from process-start configuration.
    ///
    /// The bearer token is baked into the default header map (marked
    /// sensitive so it never shows up in debug output) and sent on every
    /// request.
    pub fn new(config: ClientConfig) -> Result<Self, ClientBuildError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ClientBuildError::UnusableBaseUrl(config.base_url));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token.expose()))
            .map_err(|_| ClientBuildError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth);
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
            .default_headers(default_headers)
            .build()
            .map_err(ClientBuildError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Resolve path segments against the base URL, percent-encoding as needed.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("base URL validated in constructor")
            .pop_if_empty()
            .extend(segments);
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &Query,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments);
        tracing::debug!(%url, "issuing GET");

        let request = query.apply(self.http.get(url.clone()));
        let response = request.send().await.map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = error::read_capped_error_body(response).await;
            tracing::warn!(%url, %status, "request failed");
            return Err(ApiError::Status { status, body });
        }

        let body = response.text().await.map_err(ApiError::Transport)?;
        tracing::debug!(%url, %status, bytes = body.len(), "response received");
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    // --- Books ---

    pub async fn books(&self, query: &Query) -> Result<Paged<Book>, ApiError> {
        self.get_json(&["book"], query).await
    }

    /// Look up one book. The upstream API wraps even singular lookups in the
    /// paged envelope, so this returns a [`Paged`] with (at most) one doc.
    pub async fn book(&self, id: &EntityId) -> Result<Paged<Book>, ApiError> {
        self.get_json(&["book", id.as_str()], &Query::new()).await
    }

    pub async fn book_chapters(
        &self,
        book_id: &EntityId,
        query: &Query,
    ) -> Result<Paged<Chapter>, ApiError> {
        self.get_json(&["book", book_id.as_str(), "chapter"], query)
            .await
    }

    // --- Movies ---

    pub async fn movies(&self, query: &Query) -> Result<Paged<Movie>, ApiError> {
        self.get_json(&["movie"], query).await
    }

    /// Singular lookup; same envelope quirk as [`Self::book`].
    pub async fn movie(&self, id: &EntityId) -> Result<Paged<Movie>, ApiError> {
        self.get_json(&["movie", id.as_str()], &Query::new()).await
    }

    pub async fn movie_quotes(
        &self,
        movie_id: &EntityId,
        query: &Query,
    ) -> Result<Paged<Quote>, ApiError> {
        self.get_json(&["movie", movie_id.as_str(), "quote"], query)
            .await
    }

    // --- Characters ---

    pub async fn characters(&self, query: &Query) -> Result<Paged<Character>, ApiError> {
        self.get_json(&["character"], query).await
    }

    /// Singular lookup; same envelope quirk as [`Self::book`].
    pub async fn character(&self, id: &EntityId) -> Result<Paged<Character>, ApiError> {
        self.get_json(&["character", id.as_str()], &Query::new())
            .await
    }

    pub async fn character_quotes(
        &self,
        character_id: &EntityId,
        query: &Query,
    ) -> Result<Paged<Quote>, ApiError> {
        self.get_json(&["character", character_id.as_str(), "quote"], query)
            .await
    }

    // --- Quotes ---

    pub async fn quotes(&self, query: &Query) -> Result<Paged<Quote>, ApiError> {
        self.get_json(&["quote"], query).await
    }

    /// Singular lookup; same envelope quirk as [`Self::book`].
    pub async fn quote(&self, id: &EntityId) -> Result<Paged<Quote>, ApiError> {
        self.get_json(&["quote", id.as_str()], &Query::new()).await
    }

    /// One random quote. Unlike every other endpoint this returns a bare
    /// [`Quote`], not an envelope. An upstream asymmetry, kept as-is.
    pub async fn random_quote(&self, query: &Query) -> Result<Quote, ApiError> {
        self.get_json(&["quotes", "random"], query).await
    }

    // --- Chapters ---

    pub async fn chapters(&self, query: &Query) -> Result<Paged<Chapter>, ApiError> {
        self.get_json(&["chapter"], query).await
    }

    /// Singular lookup; same envelope quirk as [`Self::book`].
    pub async fn chapter(&self, id: &EntityId) -> Result<Paged<Chapter>, ApiError> {
        self.get_json(&["chapter", id.as_str()], &Query::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiToken, ClientConfig, LoreClient};
    use url::Url;

    fn test_client(base: &str) -> LoreClient {
        let config = ClientConfig::new(ApiToken::new("test"))
            .with_base_url(Url::parse(base).expect("valid URL"));
        LoreClient::new(config).expect("client builds")
    }

    #[test]
    fn endpoint_joins_segments_under_base_path() {
        let client = test_client("https://example.com/v2/");
        let url = client.endpoint(&["book", "b1", "chapter"]);
        assert_eq!(url.as_str(), "https://example.com/v2/book/b1/chapter");
    }

    #[test]
    fn endpoint_handles_base_without_trailing_slash() {
        let client = test_client("https://example.com/v2");
        let url = client.endpoint(&["movie"]);
        assert_eq!(url.as_str(), "https://example.com/v2/movie");
    }

    #[test]
    fn endpoint_percent_encodes_ids() {
        let client = test_client("https://example.com/v2/");
        let url = client.endpoint(&["book", "a b"]);
        assert_eq!(url.as_str(), "https://example.com/v2/book/a%20b");
    }

    #[test]
    fn cannot_be_a_base_urls_are_rejected() {
        let config = ClientConfig::new(ApiToken::new("test"))
            .with_base_url(Url::parse("data:text/plain,hi").expect("valid URL"));
        assert!(LoreClient::new(config).is_err());
    }
}
