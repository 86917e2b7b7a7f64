pub mod approval;
pub mod auth;
pub mod booking;
pub mod health;
pub mod notification;
pub mod review;
pub mod shop;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
///
/// /shop                              catalog search (public)
/// /products/{id}/reviews             reviews of one product (public)
///
/// /reviews                           submit a review (auth required)
/// /bookings                          list, create (auth required)
/// /notifications                     list, unread count, mark read (auth required)
///
/// /admin/approvals                   pending list, submit decision (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(shop::router())
        .nest("/reviews", review::router())
        .nest("/bookings", booking::router())
        .nest("/notifications", notification::router())
        .nest("/admin/approvals", approval::router())
}
