//! Object-safe seam between page/action logic and the remote API.
//!
//! Handlers depend on `Arc<dyn StorefrontApi>` rather than the concrete
//! client so tests can substitute a stub implementation.

use async_trait::async_trait;

use super::queries::{CART_CREATE_MUTATION, PRODUCTS_QUERY, PRODUCT_BY_HANDLE_QUERY};
use super::types::{CartCreateData, ProductDetailData, ProductsData};
use super::{GraphQlResponse, StorefrontClient, StorefrontError};

/// One method per remote operation the storefront performs.
///
/// Every method returns the full response envelope so callers can inspect
/// GraphQL-level errors themselves; domain validation (missing variants,
/// missing checkout URL) happens in the page/action layer.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Fetch the first six products for the listing page.
    async fn list_products(&self) -> Result<GraphQlResponse<ProductsData>, StorefrontError>;

    /// Fetch one product by its handle.
    async fn product_by_handle(
        &self,
        handle: &str,
    ) -> Result<GraphQlResponse<ProductDetailData>, StorefrontError>;

    /// Create a cart with a single line item for the given variant.
    async fn cart_create(
        &self,
        variant_id: &str,
        quantity: i64,
    ) -> Result<GraphQlResponse<CartCreateData>, StorefrontError>;
}

#[async_trait]
impl StorefrontApi for StorefrontClient {
    async fn list_products(&self) -> Result<GraphQlResponse<ProductsData>, StorefrontError> {
        self.request(PRODUCTS_QUERY, None).await
    }

    async fn product_by_handle(
        &self,
        handle: &str,
    ) -> Result<GraphQlResponse<ProductDetailData>, StorefrontError> {
        self.request(
            PRODUCT_BY_HANDLE_QUERY,
            Some(serde_json::json!({ "handle": handle })),
        )
        .await
    }

    async fn cart_create(
        &self,
        variant_id: &str,
        quantity: i64,
    ) -> Result<GraphQlResponse<CartCreateData>, StorefrontError> {
        let input = serde_json::json!({
            "lines": [{
                "merchandiseId": variant_id,
                "quantity": quantity,
            }],
        });
        self.request(CART_CREATE_MUTATION, Some(serde_json::json!({ "input": input })))
            .await
    }
}
