//! HTTP client for the Storefront GraphQL API.

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use crate::config::StorefrontApiConfig;

use super::{GraphQlResponse, StorefrontError};

/// Header carrying the Storefront API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Client for the Storefront GraphQL API.
///
/// Performs exactly one outbound network call per invocation: no retries,
/// no caching, no rate limiting. A successful transport response is
/// returned as the parsed envelope unmodified, GraphQL-level `errors`
/// included; inspecting those is the caller's responsibility.
#[derive(Clone)]
pub struct StorefrontClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl StorefrontClient {
    /// Create a new Storefront API client from connection configuration.
    #[must_use]
    pub fn new(config: &StorefrontApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.api_url.clone(),
            access_token: config.access_token.expose_secret().to_string(),
        }
    }

    /// Create a client from process-wide environment configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the required variables are missing.
    pub fn from_env() -> Result<Self, crate::config::ConfigError> {
        Ok(Self::new(&StorefrontApiConfig::from_env()?))
    }

    /// Execute a GraphQL request.
    ///
    /// Sends `{"query": ..., "variables": ...}` as a JSON POST body with
    /// the access-token header and parses the response into the caller's
    /// expected payload shape.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Http`] when the request fails at the
    ///   connection level
    /// - [`StorefrontError::Status`] when the transport returns a
    ///   non-success status; the body is not inspected further
    /// - [`StorefrontError::Parse`] when the body is not valid JSON of
    ///   the expected shape
    #[instrument(skip(self, query, variables))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<GraphQlResponse<T>, StorefrontError> {
        let request_body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Storefront API returned non-success status");
            return Err(StorefrontError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // Read as text first for better diagnostics on malformed bodies
        let response_text = response.text().await?;
        match serde_json::from_str(&response_text) {
            Ok(envelope) => Ok(envelope),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Storefront GraphQL response"
                );
                Err(StorefrontError::Parse(e))
            }
        }
    }
}
