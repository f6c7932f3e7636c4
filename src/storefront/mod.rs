//! Storefront GraphQL API client.
//!
//! # Architecture
//!
//! - Raw query documents sent over `reqwest`; the client is schema-agnostic
//!   and never interprets GraphQL semantics beyond serialization
//! - The remote API is the source of truth - NO local sync, direct calls
//! - GraphQL-level `errors` are returned to the caller inside the response
//!   envelope, never swallowed or auto-retried
//!
//! # Example
//!
//! ```rust,ignore
//! use goodmarket_storefront::storefront::{StorefrontApi, StorefrontClient};
//!
//! let client = StorefrontClient::new(&config.api);
//!
//! // List featured products
//! let envelope = client.list_products().await?;
//!
//! // Create a cart for one variant
//! let envelope = client.cart_create("gid://shopify/ProductVariant/123", 1).await?;
//! ```

mod api;
mod client;
pub mod queries;
pub mod types;

pub use api::StorefrontApi;
pub use client::StorefrontClient;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the Storefront API.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// HTTP request failed at the connection level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The transport returned a non-success status.
    #[error("Storefront API error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Response envelope returned by every GraphQL call.
///
/// `data` and `errors` may both be populated; callers decide what a
/// partial-error response means for them.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Payload for the requested operation, when the server produced one.
    pub data: Option<T>,
    /// GraphQL-level errors reported alongside (or instead of) the data.
    pub errors: Option<Vec<GraphQlError>>,
}

impl<T> GraphQlResponse<T> {
    /// True when the envelope carries at least one GraphQL-level error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// Concatenated error messages, or `None` when the error list is empty.
    #[must_use]
    pub fn error_messages(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// A GraphQL error returned by the Storefront API.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    #[serde(default)]
    pub locations: Option<Vec<GraphQlErrorLocation>>,
    /// Path to the error in the response.
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::Status {
            status: 502,
            status_text: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Storefront API error: 502 Bad Gateway");
    }

    #[test]
    fn test_error_messages_joined() {
        let envelope: GraphQlResponse<()> = GraphQlResponse {
            data: None,
            errors: Some(vec![
                GraphQlError {
                    message: "Field not found".to_string(),
                    locations: None,
                    path: None,
                },
                GraphQlError {
                    message: "Invalid ID".to_string(),
                    locations: None,
                    path: None,
                },
            ]),
        };
        assert!(envelope.has_errors());
        assert_eq!(
            envelope.error_messages().unwrap(),
            "Field not found, Invalid ID"
        );
    }

    #[test]
    fn test_empty_error_list_is_not_an_error() {
        let envelope: GraphQlResponse<()> = GraphQlResponse {
            data: None,
            errors: Some(vec![]),
        };
        assert!(!envelope.has_errors());
        assert!(envelope.error_messages().is_none());
    }

    #[test]
    fn test_envelope_deserializes_errors_with_locations_and_path() {
        let body = serde_json::json!({
            "data": null,
            "errors": [{
                "message": "syntax error",
                "locations": [{"line": 5, "column": 10}],
                "path": ["products", 0]
            }]
        });

        let envelope: GraphQlResponse<serde_json::Value> =
            serde_json::from_value(body).unwrap();
        let errors = envelope.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "syntax error");
        assert_eq!(errors[0].locations.as_ref().unwrap()[0].line, 5);
        assert_eq!(errors[0].path.as_ref().unwrap().len(), 2);
    }
}
