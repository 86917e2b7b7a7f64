//! Product review models.

use reboot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub order_id: DbId,
    pub rating: i16,
    pub comment: String,
    pub created_at: Timestamp,
}

/// A review joined with the reviewer's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithAuthor {
    pub id: DbId,
    pub product_id: DbId,
    pub user_name: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a review.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub user_id: DbId,
    pub product_id: DbId,
    pub order_id: DbId,
    pub rating: i16,
    pub comment: String,
}
