//! Product detail route handler.
//!
//! Every render resolves to one of four terminal outcomes, evaluated in
//! order: error panel, not-found panel, unavailable panel, or the full
//! detail view. The evaluation is a pure function over the response
//! envelope so each path is testable without a network.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::filters;
use crate::state::{AppState, CachedPage};
use crate::storefront::GraphQlResponse;
use crate::storefront::types::ProductDetailData;

/// Variant title Shopify assigns to single-variant products; suppressed
/// in the detail view.
const DEFAULT_VARIANT_TITLE: &str = "Default Title";

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// Product detail display data for templates.
#[derive(Clone)]
pub struct ProductDetailView {
    pub handle: String,
    pub title: String,
    /// Raw HTML description, rendered unescaped.
    pub description_html: String,
    /// Price formatted with the product's own currency.
    pub price: String,
    /// Merchandise identifier of the first variant, bound to the
    /// checkout control.
    pub variant_id: String,
    /// Variant title, suppressed when it equals the generic default.
    pub variant_title: Option<String>,
    pub image: Option<ImageView>,
}

/// Terminal render outcomes for the detail page.
pub enum ProductPageOutcome {
    /// Transport or GraphQL-level failure; carries concatenated messages.
    Error(String),
    /// No product exists for the requested handle.
    NotFound,
    /// Product exists but has no variant with a usable identifier.
    Unavailable,
    /// Full detail view.
    Ready(Box<ProductDetailView>),
}

// =============================================================================
// Currency Formatting
// =============================================================================

/// Symbol for well-known currency codes.
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" | "CAD" | "AUD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        "JPY" => Some("\u{a5}"),
        _ => None,
    }
}

/// Format a decimal amount string with its currency code.
///
/// Known codes render with their symbol (`$19.99`); others fall back to
/// the code itself (`SGD 13.50`). Yen has no minor unit.
fn format_currency(amount: &str, code: &str) -> String {
    let Ok(value) = amount.parse::<f64>() else {
        return format!("{code} {amount}");
    };
    match currency_symbol(code) {
        Some(symbol) if code == "JPY" => format!("{symbol}{value:.0}"),
        Some(symbol) => format!("{symbol}{value:.2}"),
        None => format!("{code} {value:.2}"),
    }
}

// =============================================================================
// Outcome Evaluation
// =============================================================================

/// Evaluate the four terminal outcomes, in order, for one envelope.
fn evaluate_detail(
    handle: &str,
    envelope: &GraphQlResponse<ProductDetailData>,
) -> ProductPageOutcome {
    if let Some(messages) = envelope.error_messages() {
        return ProductPageOutcome::Error(messages);
    }

    let Some(product) = envelope
        .data
        .as_ref()
        .and_then(|data| data.product_by_handle.as_ref())
    else {
        return ProductPageOutcome::NotFound;
    };

    let Some(variant) = product.variants.first().filter(|v| !v.id.is_empty()) else {
        return ProductPageOutcome::Unavailable;
    };

    let price = &product.price_range.min_variant_price;
    let view = ProductDetailView {
        handle: handle.to_string(),
        title: product.title.clone(),
        description_html: product.description_html.clone(),
        price: format_currency(&price.amount, &price.currency_code),
        variant_id: variant.id.clone(),
        variant_title: Some(variant.title.clone())
            .filter(|title| !title.is_empty() && title != DEFAULT_VARIANT_TITLE),
        image: product.images.first().map(|img| ImageView {
            url: img.transformed_src.clone(),
            alt: img
                .alt_text
                .clone()
                .unwrap_or_else(|| product.title.clone()),
        }),
    };

    ProductPageOutcome::Ready(Box::new(view))
}

/// Load the detail outcome for a handle, honoring the revalidation window.
///
/// Only ready views are cached; the other outcomes are re-evaluated on
/// every request so an outage never pins an error panel for an hour.
pub(crate) async fn load_detail(state: &AppState, handle: &str) -> ProductPageOutcome {
    let cache_key = format!("product:{handle}");

    if let Some(CachedPage::Product(view)) = state.pages().get(&cache_key).await {
        return ProductPageOutcome::Ready(view);
    }

    let outcome = match state.api().product_by_handle(handle).await {
        Ok(envelope) => evaluate_detail(handle, &envelope),
        Err(e) => {
            tracing::error!("Failed to fetch product {handle}: {e}");
            ProductPageOutcome::Error(e.to_string())
        }
    };

    if let ProductPageOutcome::Ready(view) = &outcome {
        state
            .pages()
            .insert(cache_key, CachedPage::Product(view.clone()))
            .await;
    }

    outcome
}

// =============================================================================
// Templates
// =============================================================================

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
}

/// Error panel shown when fetching product data failed.
#[derive(Template, WebTemplate)]
#[template(path = "products/error.html")]
pub struct ProductErrorTemplate {
    pub details: String,
}

/// Panel shown when no product exists for the handle.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate;

/// Panel shown when the product has no purchasable variant.
#[derive(Template, WebTemplate)]
#[template(path = "products/unavailable.html")]
pub struct ProductUnavailableTemplate;

/// Display the product detail page.
#[instrument(skip(state), fields(handle = %handle))]
pub async fn show(State(state): State<AppState>, Path(handle): Path<String>) -> Response {
    match load_detail(&state, &handle).await {
        ProductPageOutcome::Error(details) => ProductErrorTemplate { details }.into_response(),
        ProductPageOutcome::NotFound => ProductNotFoundTemplate.into_response(),
        ProductPageOutcome::Unavailable => ProductUnavailableTemplate.into_response(),
        ProductPageOutcome::Ready(view) => ProductShowTemplate { product: *view }.into_response(),
    }
}
