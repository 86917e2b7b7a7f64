//! Handlers for the public catalog: `/shop` search and product reviews.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use reboot_core::catalog::{round_average, SearchQuery, RECENT_REVIEW_LIMIT};
use reboot_core::error::CoreError;
use reboot_core::money::format_currency;
use reboot_core::types::DbId;
use reboot_db::models::product::ProductWithRating;
use reboot_db::models::review::ReviewWithAuthor;
use reboot_db::repositories::{ProductRepo, ReviewRepo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /shop`.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    pub search: Option<String>,
}

/// One product in a catalog listing.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub price_display: String,
    pub image: String,
    /// Rounded to one decimal; `0` without reviews.
    pub avg_rating: f64,
    pub review_count: i64,
    /// Newest reviews first, at most [`RECENT_REVIEW_LIMIT`].
    pub reviews: Vec<ReviewWithAuthor>,
}

impl ProductListing {
    fn new(product: ProductWithRating, reviews: Vec<ReviewWithAuthor>) -> Self {
        Self {
            id: product.id,
            price_display: format_currency(product.price),
            avg_rating: round_average(product.avg_rating),
            review_count: product.review_count,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            reviews,
        }
    }
}

/// Body of `GET /shop`.
#[derive(Debug, Serialize)]
pub struct ShopResults {
    /// The trimmed search term; empty when listing everything.
    pub query: String,
    pub result_count: usize,
    pub products: Vec<ProductListing>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/shop?search=
///
/// Case-insensitive substring search over product names and descriptions.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<ShopQuery>,
) -> AppResult<Json<DataResponse<ShopResults>>> {
    let query = SearchQuery::new(params.search.as_deref());
    let products = ProductRepo::search(&state.pool, &query).await?;

    let ids: Vec<DbId> = products.iter().map(|p| p.id).collect();
    let mut reviews_by_product: HashMap<DbId, Vec<ReviewWithAuthor>> = HashMap::new();
    for review in ReviewRepo::recent_for_products(&state.pool, &ids, RECENT_REVIEW_LIMIT).await? {
        reviews_by_product
            .entry(review.product_id)
            .or_default()
            .push(review);
    }

    let products: Vec<ProductListing> = products
        .into_iter()
        .map(|product| {
            let reviews = reviews_by_product.remove(&product.id).unwrap_or_default();
            ProductListing::new(product, reviews)
        })
        .collect();

    tracing::debug!(query = ?query.term(), results = products.len(), "Catalog search");

    Ok(Json(DataResponse {
        data: ShopResults {
            query: query.term().unwrap_or_default().to_string(),
            result_count: products.len(),
            products,
        },
    }))
}

/// GET /api/v1/products/{id}/reviews
///
/// Every review of a product, newest first.
pub async fn product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ReviewWithAuthor>>>> {
    ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    let reviews = ReviewRepo::list_for_product(&state.pool, product_id).await?;
    Ok(Json(DataResponse { data: reviews }))
}
