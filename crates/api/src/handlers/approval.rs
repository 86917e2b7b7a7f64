//! Handlers for the admin approvals page (`/admin/approvals`).
//!
//! Submissions never fail with an HTTP error: every result, including
//! validation and database failures, becomes an [`ApprovalOutcome`] carried
//! back to the list as `?flash=<outcome>`.

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::{Form, Json};
use reboot_core::approval::{ApprovalOutcome, Decision, Flash};
use reboot_core::money::format_currency;
use reboot_db::models::approval::{ApprovalForm, PendingBooking, PendingOrder};
use reboot_db::repositories::ApprovalRepo;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Absolute path of the approvals list, the target of every redirect.
pub const APPROVALS_PATH: &str = "/api/v1/admin/approvals";

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/approvals`.
#[derive(Debug, Deserialize)]
pub struct ApprovalsQuery {
    pub flash: Option<String>,
}

/// A pending order with display-formatted money columns.
#[derive(Debug, Serialize)]
pub struct PendingOrderView {
    #[serde(flatten)]
    pub order: PendingOrder,
    pub price_display: String,
    pub total_display: String,
}

impl From<PendingOrder> for PendingOrderView {
    fn from(order: PendingOrder) -> Self {
        Self {
            price_display: format_currency(order.product_price),
            total_display: format_currency(order.total),
            order,
        }
    }
}

/// Body of `GET /admin/approvals`.
#[derive(Debug, Serialize)]
pub struct ApprovalsPage {
    pub flash: Option<Flash>,
    pub pending_orders: Vec<PendingOrderView>,
    pub pending_bookings: Vec<PendingBooking>,
}

/// Redirect target carrying `outcome` as the flash.
pub fn flash_location(outcome: ApprovalOutcome) -> String {
    format!("{APPROVALS_PATH}?flash={}", outcome.as_str())
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// Apply a validated decision and report how it went.
///
/// Zero rows updated means the row is missing or already left `pending`.
/// Database errors are logged here and reduced to
/// [`ApprovalOutcome::PersistenceFailed`].
pub async fn apply_decision(pool: &PgPool, decision: &Decision) -> ApprovalOutcome {
    let kind = decision.kind.as_str();
    match ApprovalRepo::apply(pool, decision).await {
        Ok(Some(row)) => {
            tracing::info!(
                kind,
                id = row.id,
                user_id = row.user_id,
                status = decision.target_status(),
                "Approval applied"
            );
            decision.applied_outcome()
        }
        Ok(None) => {
            tracing::info!(kind, id = decision.id, "Approval target is no longer pending");
            ApprovalOutcome::NotPending
        }
        Err(err) => {
            tracing::error!(kind, id = decision.id, error = %err, "Failed to apply approval");
            ApprovalOutcome::PersistenceFailed
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/approvals
///
/// Pending orders (newest `order_date` first) and pending bookings (newest
/// `created_at` first), plus the flash named by `?flash=`, if known.
pub async fn list_pending(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ApprovalsQuery>,
) -> AppResult<Json<DataResponse<ApprovalsPage>>> {
    let flash = params
        .flash
        .as_deref()
        .and_then(ApprovalOutcome::parse)
        .map(ApprovalOutcome::flash);

    let pending_orders = ApprovalRepo::pending_orders(&state.pool)
        .await?
        .into_iter()
        .map(PendingOrderView::from)
        .collect();
    let pending_bookings = ApprovalRepo::pending_bookings(&state.pool).await?;

    Ok(Json(DataResponse {
        data: ApprovalsPage {
            flash,
            pending_orders,
            pending_bookings,
        },
    }))
}

/// POST /api/v1/admin/approvals
///
/// Form fields `type`, `id`, `action`, `reason`. Always answers
/// `303 See Other` back to the list.
pub async fn submit_decision(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<ApprovalForm>,
) -> Redirect {
    let outcome = match Decision::from_form(
        form.kind.as_deref(),
        form.id.as_deref(),
        form.action.as_deref(),
        form.reason.as_deref(),
    ) {
        Ok(decision) => apply_decision(&state.pool, &decision).await,
        Err(outcome) => {
            tracing::warn!(
                admin_id = admin.user_id,
                outcome = outcome.as_str(),
                "Approval submission refused"
            );
            outcome
        }
    };

    Redirect::to(&flash_location(outcome))
}
