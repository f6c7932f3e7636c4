//! Checkout action handler.
//!
//! Creates a cart with one line item and redirects to the externally
//! hosted checkout URL. The redirect is an ordinary value of
//! [`CheckoutOutcome`], not a thrown signal, so it cannot be mistaken
//! for a failure by error-handling paths.

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;
use crate::storefront::StorefrontApi;

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    /// Merchandise identifier of the variant to purchase.
    #[serde(default)]
    pub variant_id: String,
}

/// Structured error body returned when checkout cannot proceed.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckoutError {
    pub error: String,
}

/// Terminal results of the checkout action.
#[derive(Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Hand the browser off to the externally hosted checkout URL.
    Redirect(String),
    /// Checkout could not proceed; no cart redirect happens.
    Error(String),
}

impl IntoResponse for CheckoutOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(url) => Redirect::to(&url).into_response(),
            Self::Error(error) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(CheckoutError { error }),
            )
                .into_response(),
        }
    }
}

/// Create a cart with one line of quantity one and resolve the outcome.
///
/// Failure precedence: missing variant id (no network call), transport
/// errors, GraphQL-level errors, mutation user errors, missing checkout
/// URL. Each invocation creates a new cart; there is no deduplication.
pub(crate) async fn create_checkout(api: &dyn StorefrontApi, variant_id: &str) -> CheckoutOutcome {
    if variant_id.is_empty() {
        return CheckoutOutcome::Error("Variant ID is missing.".to_string());
    }

    let envelope = match api.cart_create(variant_id, 1).await {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::error!("Cart creation request failed: {e}");
            return CheckoutOutcome::Error(
                "An unexpected error occurred during checkout.".to_string(),
            );
        }
    };

    if let Some(messages) = envelope.error_messages() {
        tracing::error!("GraphQL errors during cart creation: {messages}");
        return CheckoutOutcome::Error(
            "Failed to create cart due to GraphQL errors.".to_string(),
        );
    }

    let payload = envelope.data.and_then(|data| data.cart_create);

    if let Some(payload) = payload {
        if !payload.user_errors.is_empty() {
            let messages = payload
                .user_errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!("User errors on cart creation: {messages}");
            return CheckoutOutcome::Error(format!("Could not create cart: {messages}"));
        }

        if let Some(cart) = payload.cart
            && !cart.checkout_url.is_empty()
        {
            return CheckoutOutcome::Redirect(cart.checkout_url);
        }
    }

    CheckoutOutcome::Error("Failed to get checkout URL.".to_string())
}

/// Handle the checkout form submission.
#[instrument(skip(state, form))]
pub async fn checkout(State(state): State<AppState>, Form(form): Form<CheckoutForm>) -> Response {
    create_checkout(state.api(), form.variant_id.trim()).await.into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::storefront::types::{CartCreateData, ProductDetailData, ProductsData};
    use crate::storefront::{GraphQlResponse, StorefrontError};

    use super::*;

    struct StubApi {
        response: serde_json::Value,
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubApi {
        fn with_response(response: serde_json::Value) -> Self {
            Self {
                response,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl StorefrontApi for StubApi {
        async fn list_products(
            &self,
        ) -> Result<GraphQlResponse<ProductsData>, StorefrontError> {
            unimplemented!("not used by checkout tests")
        }

        async fn product_by_handle(
            &self,
            _handle: &str,
        ) -> Result<GraphQlResponse<ProductDetailData>, StorefrontError> {
            unimplemented!("not used by checkout tests")
        }

        async fn cart_create(
            &self,
            _variant_id: &str,
            quantity: i64,
        ) -> Result<GraphQlResponse<CartCreateData>, StorefrontError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(quantity, 1);
            if self.fail {
                return Err(StorefrontError::Status {
                    status: 500,
                    status_text: "Internal Server Error".to_string(),
                });
            }
            Ok(serde_json::from_value(self.response.clone()).unwrap())
        }
    }

    #[tokio::test]
    async fn test_missing_variant_id_makes_no_network_call() {
        let api = StubApi::with_response(serde_json::Value::Null);

        let outcome = create_checkout(&api, "").await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Error("Variant ID is missing.".to_string())
        );
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_structured_error() {
        let api = StubApi {
            response: serde_json::Value::Null,
            fail: true,
            calls: AtomicUsize::new(0),
        };

        let outcome = create_checkout(&api, "gid://shopify/ProductVariant/42").await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Error("An unexpected error occurred during checkout.".to_string())
        );
    }

    #[tokio::test]
    async fn test_graphql_errors_block_the_redirect() {
        let api = StubApi::with_response(serde_json::json!({
            "data": null,
            "errors": [{"message": "Throttled"}]
        }));

        let outcome = create_checkout(&api, "gid://shopify/ProductVariant/42").await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Error("Failed to create cart due to GraphQL errors.".to_string())
        );
    }

    #[tokio::test]
    async fn test_user_errors_are_joined_into_one_message() {
        let api = StubApi::with_response(serde_json::json!({
            "data": {"cartCreate": {
                "cart": null,
                "userErrors": [{"field": null, "message": "Insufficient stock"}]
            }}
        }));

        let outcome = create_checkout(&api, "gid://shopify/ProductVariant/42").await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Error("Could not create cart: Insufficient stock".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_checkout_url_is_a_structured_error() {
        let api = StubApi::with_response(serde_json::json!({
            "data": {"cartCreate": {"cart": null, "userErrors": []}}
        }));

        let outcome = create_checkout(&api, "gid://shopify/ProductVariant/42").await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Error("Failed to get checkout URL.".to_string())
        );
    }

    #[tokio::test]
    async fn test_success_redirects_to_checkout_url() {
        let api = StubApi::with_response(serde_json::json!({
            "data": {"cartCreate": {
                "cart": {
                    "id": "gid://shopify/Cart/abc",
                    "checkoutUrl": "https://shop.example/checkout/abc"
                },
                "userErrors": []
            }}
        }));

        let outcome = create_checkout(&api, "gid://shopify/ProductVariant/42").await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Redirect("https://shop.example/checkout/abc".to_string())
        );
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }
}
