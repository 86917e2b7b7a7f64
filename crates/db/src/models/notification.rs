//! Notification entity models and DTOs.

use reboot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub body: String,
    pub related_type: String,
    pub related_id: DbId,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotification<'a> {
    pub user_id: DbId,
    pub title: &'a str,
    pub body: &'a str,
    pub related_type: &'a str,
    pub related_id: DbId,
}
