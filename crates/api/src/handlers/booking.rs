//! Handlers for the `/bookings` resource (repair appointments).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reboot_db::models::booking::{Booking, CreateBooking};
use reboot_db::repositories::BookingRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/bookings
///
/// Book a repair slot for the caller. The booking starts `pending` and waits
/// for an admin decision.
pub async fn create_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<DataResponse<Booking>>)> {
    input.validate()?;

    let booking = BookingRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(
        booking_id = booking.id,
        user_id = auth.user_id,
        date = %booking.date,
        "Booking created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

/// GET /api/v1/bookings
///
/// The caller's bookings, newest first, with any rejection reason in
/// `status_message`.
pub async fn list_bookings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Booking>>>> {
    let bookings = BookingRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}
