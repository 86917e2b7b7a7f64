//! Route definitions for the admin approvals page.
//!
//! All endpoints require the `admin` role.

use axum::routing::get;
use axum::Router;

use crate::handlers::approval;
use crate::state::AppState;

/// Routes mounted at `/admin/approvals`.
///
/// ```text
/// GET    /?flash=                   -> list_pending
/// POST   /                          -> submit_decision (form, 303 back to GET)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(approval::list_pending).post(approval::submit_decision),
    )
}
