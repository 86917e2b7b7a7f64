//! Handler for review submission from the storefront orders page.
//!
//! The storefront script reads `{ "success": bool, "error"?: string }`, so this
//! endpoint answers with that shape for every failure, a missing login
//! included, instead of the usual error envelope.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use reboot_core::error::CoreError;
use reboot_core::review::validate_review;
use reboot_core::status::order_is_reviewable;
use reboot_core::types::DbId;
use reboot_db::models::review::CreateReview;
use reboot_db::repositories::{OrderRepo, ReviewRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{is_unique_violation, AppError};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const GENERIC_FAILURE: &str = "Failed to submit review. Please try again.";
const LOGIN_REQUIRED: &str = "Please log in to submit a review.";

/// Form body for `POST /reviews`. Fields stay raw so bad input gets a
/// `success: false` answer rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    pub order_id: Option<String>,
    pub rating: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewSubmission {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReviewSubmission {
    fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                error: None,
            },
            Err(error) => Self {
                success: false,
                error: Some(error),
            },
        }
    }
}

/// POST /api/v1/reviews
///
/// Review one of the caller's own orders. The product comes from the order.
/// Anonymous callers get `401` with `success: false`.
pub async fn submit_review(
    auth: Result<AuthUser, AppError>,
    State(state): State<AppState>,
    Form(form): Form<ReviewForm>,
) -> (StatusCode, Json<ReviewSubmission>) {
    let Ok(auth) = auth else {
        let refused = ReviewSubmission::from_result(Err(LOGIN_REQUIRED.to_string()));
        return (StatusCode::UNAUTHORIZED, Json(refused));
    };

    let result = record_review(&state.pool, auth.user_id, &form).await;
    if let Err(error) = &result {
        tracing::info!(user_id = auth.user_id, error = %error, "Review refused");
    }
    (StatusCode::OK, Json(ReviewSubmission::from_result(result)))
}

async fn record_review(pool: &PgPool, user_id: DbId, form: &ReviewForm) -> Result<(), String> {
    let order_id = form
        .order_id
        .as_deref()
        .and_then(|raw| raw.trim().parse::<DbId>().ok())
        .filter(|id| *id > 0)
        .ok_or("Invalid order.")?;
    let rating = form
        .rating
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i16>().ok())
        .ok_or("Please select a rating.")?;
    let comment = form.comment.as_deref().unwrap_or_default().trim();

    validate_review(rating, comment).map_err(|err| match err {
        CoreError::Validation(msg) => msg,
        other => other.to_string(),
    })?;

    let order = OrderRepo::find_for_user(pool, order_id, user_id)
        .await
        .map_err(|err| {
            tracing::error!(order_id, error = %err, "Failed to load order for review");
            GENERIC_FAILURE
        })?
        .ok_or("Order not found.")?;

    if !order_is_reviewable(&order.status) {
        return Err("This order cannot be reviewed yet.".into());
    }

    let input = CreateReview {
        user_id,
        product_id: order.product_id,
        order_id,
        rating,
        comment: comment.to_string(),
    };
    match ReviewRepo::create(pool, &input).await {
        Ok(review) => {
            tracing::info!(
                review_id = review.id,
                order_id,
                product_id = review.product_id,
                rating,
                "Review submitted"
            );
            Ok(())
        }
        Err(err) if is_unique_violation(&err, "uq_reviews_order_id") => {
            Err("You have already reviewed this order.".into())
        }
        Err(err) => {
            tracing::error!(order_id, error = %err, "Failed to insert review");
            Err(GENERIC_FAILURE.into())
        }
    }
}
