//! Route definitions for the `/bookings` resource.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET    /                          -> list_bookings
/// POST   /                          -> create_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(booking::list_bookings).post(booking::create_booking),
    )
}
