//! Admin API client for the Snuba admin service.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::*;

/// Longest error body kept in [`ApiError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Errors that can occur when communicating with the admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Admin API client.
///
/// A thin adapter: every call is a single GET with no retries, caching or
/// request timeout. Endpoint paths are appended to the base URL verbatim, so
/// the base should end with `/`.
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: Client,
    base_url: String,
}

impl AdminApiClient {
    /// Create a new admin API client.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();

        let parsed =
            Url::parse(&base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        if !base_url.ends_with('/') {
            warn!(%base_url, "base URL does not end with '/', endpoint paths are appended verbatim");
        }

        let client = Client::builder().build().map_err(ApiError::Http)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET an endpoint and decode its JSON body.
    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = self.endpoint(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            if e.is_connect() {
                ApiError::Connection(format!("Cannot connect to {}", url))
            } else {
                ApiError::Http(e)
            }
        })?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "backend returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%url, error = %e, "malformed response body");
            ApiError::Parse(e.to_string())
        })
    }

    /// Get all runtime config values.
    pub async fn get_configs(&self) -> Result<ConfigMap, ApiError> {
        self.get("configs").await
    }

    /// Get the predefined ClickHouse system queries, in backend order.
    pub async fn get_queries(&self) -> Result<Vec<SystemQuery>, ApiError> {
        self.get("clickhouse_queries").await
    }
}

/// Cut an error body down to [`MAX_ERROR_BODY`] bytes on a char boundary.
fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push('…');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_verbatim() {
        let client = AdminApiClient::new("http://localhost:1219/").unwrap();
        assert_eq!(client.endpoint("configs"), "http://localhost:1219/configs");

        let client = AdminApiClient::new("http://localhost:1219/admin").unwrap();
        assert_eq!(client.endpoint("configs"), "http://localhost:1219/adminconfigs");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            AdminApiClient::new("/"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            AdminApiClient::new("ftp://localhost/"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short".to_string()), "short");

        let long = "é".repeat(MAX_ERROR_BODY);
        let cut = truncate_body(long);
        assert!(cut.len() <= MAX_ERROR_BODY + '…'.len_utf8());
        assert!(cut.ends_with('…'));
    }
}
