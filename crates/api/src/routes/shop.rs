//! Public catalog routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::shop;
use crate::state::AppState;

/// Routes merged at the API root.
///
/// ```text
/// GET    /shop                      -> search
/// GET    /products/{id}/reviews     -> product_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shop", get(shop::search))
        .route("/products/{id}/reviews", get(shop::product_reviews))
}
