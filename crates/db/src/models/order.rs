//! Order models.

use reboot_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub total: Decimal,
    pub shipping_fee: Decimal,
    pub status: String,
    pub status_message: Option<String>,
    pub order_date: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an order. New orders always start `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub user_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub total: Decimal,
    pub shipping_fee: Decimal,
}
