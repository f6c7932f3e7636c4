//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::{AppState, CachedPage};
use crate::storefront::types::ProductsData;

/// Fallback image for products without one.
const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Cache key for the featured product cards.
const FEATURED_CACHE_KEY: &str = "home:featured";

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub handle: String,
    pub title: String,
    pub href: String,
    pub price: String,
    pub description: String,
    pub image_src: String,
    pub image_alt: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured products for the grid.
    pub products: Vec<ProductCardView>,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format a listing price as a fixed-currency string.
fn format_list_price(amount: &str) -> String {
    amount.parse::<f64>().map_or_else(
        |_| format!("S${amount}"),
        |amount| format!("S${amount:.2}"),
    )
}

/// Map the listing payload into display cards.
fn card_views(data: &ProductsData) -> Vec<ProductCardView> {
    data.products
        .edges
        .iter()
        .map(|edge| {
            let node = &edge.node;
            let image = node.images.first();
            ProductCardView {
                handle: node.handle.clone(),
                title: node.title.clone(),
                href: format!("/products/{}", node.handle),
                price: format_list_price(&node.price_range.min_variant_price.amount),
                description: node.description.clone(),
                image_src: image.map_or_else(
                    || PLACEHOLDER_IMAGE.to_string(),
                    |img| img.transformed_src.clone(),
                ),
                image_alt: image
                    .and_then(|img| img.alt_text.clone())
                    .unwrap_or_else(|| node.title.clone()),
            }
        })
        .collect()
}

/// Static sample products shown when the remote list is unusable.
///
/// The product section must never render empty or broken.
fn fallback_products() -> Vec<ProductCardView> {
    vec![
        ProductCardView {
            handle: "focus-paper-refill".to_string(),
            title: "Focus Paper Refill".to_string(),
            href: "#".to_string(),
            price: "$13".to_string(),
            description: "3 sizes available".to_string(),
            image_src:
                "https://fastly.picsum.photos/id/1070/600/600.jpg?hmac=WdshjrfPzYB1b5i82jm_qYAORJjBjhd2lNyC6c1rFdw"
                    .to_string(),
            image_alt: "Person using a pen to cross a task off a productivity paper card."
                .to_string(),
        },
        ProductCardView {
            handle: "productivity-planner".to_string(),
            title: "Productivity Planner".to_string(),
            href: "#".to_string(),
            price: "$22".to_string(),
            description: "Undated weekly layout".to_string(),
            image_src:
                "https://fastly.picsum.photos/id/868/600/600.jpg?hmac=z_O3S-q7nYD9UC8Ki10KwUY2xnLgKFnHqkSWLu37YQ8"
                    .to_string(),
            image_alt: "Open planner on a desk with a pen placed on top.".to_string(),
        },
        ProductCardView {
            handle: "task-management-notebook".to_string(),
            title: "Task Management Notebook".to_string(),
            href: "#".to_string(),
            price: "$18".to_string(),
            description: "Hardcover, 120 pages".to_string(),
            image_src:
                "https://fastly.picsum.photos/id/783/600/600.jpg?hmac=zpPpcRXoJELFXXp2dyVDwa6dd82RJ7s8v5M_4uEw8vU"
                    .to_string(),
            image_alt: "Notebook with task checklists written and highlighted.".to_string(),
        },
    ]
}

// =============================================================================
// Handler
// =============================================================================

/// Load the featured product cards, honoring the revalidation window.
///
/// Only successful, non-empty card lists are cached; fallback renders are
/// re-evaluated on every request.
pub(crate) async fn featured_products(state: &AppState) -> Vec<ProductCardView> {
    if let Some(CachedPage::Featured(cards)) = state.pages().get(FEATURED_CACHE_KEY).await {
        return cards;
    }

    let cards = match state.api().list_products().await {
        Ok(envelope) => {
            // A partial-error response with usable data still populates
            // the page; the errors are only logged.
            if let Some(messages) = envelope.error_messages() {
                tracing::warn!("GraphQL errors in product listing: {messages}");
            }
            envelope.data.as_ref().map(card_views).unwrap_or_default()
        }
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            Vec::new()
        }
    };

    if cards.is_empty() {
        return fallback_products();
    }

    state
        .pages()
        .insert(
            FEATURED_CACHE_KEY.to_string(),
            CachedPage::Featured(cards.clone()),
        )
        .await;

    cards
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        products: featured_products(&state).await,
    }
}
