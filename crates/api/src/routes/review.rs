//! Route definitions for the `/reviews` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// POST   /                          -> submit_review (form-encoded)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(review::submit_review))
}
