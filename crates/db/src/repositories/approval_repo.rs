//! Repository for the pending-approval transition on `orders` and `bookings`.

use reboot_core::approval::{Decision, TransitionTable};
use reboot_core::status::STATUS_PENDING;
use reboot_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::approval::{PendingBooking, PendingOrder, TransitionedRow};
use crate::models::notification::CreateNotification;
use crate::repositories::NotificationRepo;

/// Provides the approval transition and the pending queues.
pub struct ApprovalRepo;

impl ApprovalRepo {
    /// Move a row out of `pending` in a single conditional statement.
    ///
    /// Returns `None` when the row does not exist or is no longer pending; in
    /// that case nothing was written. Of two concurrent callers for the same
    /// row, at most one receives `Some`.
    pub async fn transition_pending(
        conn: &mut PgConnection,
        table: &'static TransitionTable,
        id: DbId,
        new_status: &str,
        status_message: Option<&str>,
    ) -> Result<Option<TransitionedRow>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} \
             SET status = $1, status_message = COALESCE($2, status_message), updated_at = NOW() \
             WHERE id = $3 AND status = $4 \
             RETURNING id, user_id",
            table = table.table,
        );
        sqlx::query_as::<_, TransitionedRow>(&query)
            .bind(new_status)
            .bind(status_message)
            .bind(id)
            .bind(STATUS_PENDING)
            .fetch_optional(conn)
            .await
    }

    /// Apply a validated decision and notify the row's owner.
    ///
    /// The transition and the notification insert share one transaction, so
    /// a notification exists exactly when the status changed. Returns `None`
    /// if the row was not pending.
    pub async fn apply(
        pool: &PgPool,
        decision: &Decision,
    ) -> Result<Option<TransitionedRow>, sqlx::Error> {
        let table = decision.table();
        let mut tx = pool.begin().await?;

        let Some(row) = Self::transition_pending(
            &mut tx,
            table,
            decision.id,
            decision.target_status(),
            decision.status_message(),
        )
        .await?
        else {
            tx.rollback().await?;
            tracing::debug!(table = table.table, id = decision.id, "No pending row to transition");
            return Ok(None);
        };

        let (title, body) = decision.notification();
        NotificationRepo::create(
            &mut *tx,
            &CreateNotification {
                user_id: row.user_id,
                title,
                body: &body,
                related_type: table.related_type,
                related_id: row.id,
            },
        )
        .await?;

        tx.commit().await?;
        Ok(Some(row))
    }

    /// Orders still awaiting approval, newest first.
    pub async fn pending_orders(pool: &PgPool) -> Result<Vec<PendingOrder>, sqlx::Error> {
        sqlx::query_as::<_, PendingOrder>(
            "SELECT o.id, o.user_id, o.order_date, o.quantity, o.total, o.shipping_fee,
                    u.name AS customer_name, p.name AS product_name, p.price AS product_price
             FROM orders o
             JOIN users u ON u.id = o.user_id
             JOIN products p ON p.id = o.product_id
             WHERE o.status = $1
             ORDER BY o.order_date DESC, o.id DESC",
        )
        .bind(STATUS_PENDING)
        .fetch_all(pool)
        .await
    }

    /// Bookings still awaiting approval, newest first.
    pub async fn pending_bookings(pool: &PgPool) -> Result<Vec<PendingBooking>, sqlx::Error> {
        sqlx::query_as::<_, PendingBooking>(
            "SELECT id, user_id, name, contact, phone_model, issue, date, time, created_at
             FROM bookings
             WHERE status = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(STATUS_PENDING)
        .fetch_all(pool)
        .await
    }
}
