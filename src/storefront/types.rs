//! Wire types for the Storefront API responses.
//!
//! These mirror the shapes the queries in [`super::queries`] select, edge
//! and node wrappers included. View models live in the route modules.

use serde::Deserialize;

// =============================================================================
// Connection Types
// =============================================================================

/// Relay-style connection wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

/// A single edge in a connection.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// The first node in the connection, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.edges.first().map(|edge| &edge.node)
    }
}

// =============================================================================
// Shared Node Types
// =============================================================================

/// Monetary amount with currency code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// Minimum variant price as selected by the listing query (amount only).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPrice {
    pub amount: String,
}

/// Product image node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    /// CDN URL of the transformed image.
    pub transformed_src: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

// =============================================================================
// Product Listing
// =============================================================================

/// Payload of the products-listing query.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsData {
    pub products: Connection<ProductSummaryNode>,
}

/// One product as selected by the listing query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryNode {
    pub title: String,
    pub handle: String,
    pub description: String,
    pub price_range: ListingPriceRange,
    pub images: Connection<ImageNode>,
}

/// Price range as selected by the listing query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPriceRange {
    pub min_variant_price: ListingPrice,
}

// =============================================================================
// Product Detail
// =============================================================================

/// Payload of the product-by-handle query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailData {
    pub product_by_handle: Option<ProductDetailNode>,
}

/// Full product detail as selected by the product-by-handle query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailNode {
    pub id: String,
    pub title: String,
    pub description_html: String,
    pub price_range: PriceRange,
    pub images: Connection<ImageNode>,
    pub variants: Connection<VariantNode>,
}

/// Price range with currency information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_variant_price: Money,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantNode {
    /// Merchandise identifier, required for cart operations.
    pub id: String,
    pub price: Money,
    /// Variant title, e.g. "Small / Red".
    pub title: String,
}

// =============================================================================
// Cart Creation
// =============================================================================

/// Payload of the cartCreate mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreateData {
    pub cart_create: Option<CartCreatePayload>,
}

/// Result of the cartCreate mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreatePayload {
    pub cart: Option<CartNode>,
    #[serde(default)]
    pub user_errors: Vec<CartUserError>,
}

/// The created cart; referenced only to obtain the checkout redirect.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartNode {
    pub id: String,
    pub checkout_url: String,
}

/// Domain-level error reported by a cart mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CartUserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}
