//! Typed client for the ticketing REST API.
//!
//! One async method per endpoint, grouped by concern (`auth`, `events`,
//! `tickets`). All methods share a single `reqwest::Client` and a
//! configurable base URL; responses are decoded straight into the wire types
//! of [`crate::models`].

mod auth;
mod error;
mod events;
mod tickets;

pub use error::{ApiError, ApiResult};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Ticketing API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Maps a non-2xx response to [`ApiError::Status`], taking the message
    /// from the JSON body's `error` field when the server provides one.
    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<error::ServerMessage>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        Err(ApiError::Status { status, message })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn read_unit(response: Response) -> ApiResult<()> {
        Self::check(response).await?;
        Ok(())
    }
}
