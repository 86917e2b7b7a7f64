//! Models for the admin approvals page.

use chrono::{NaiveDate, NaiveTime};
use reboot_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw approvals form. Every field is optional so that malformed submissions
/// reach validation and produce a flash message instead of an extractor
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApprovalForm {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub action: Option<String>,
    pub reason: Option<String>,
}

/// Row returned by a successful pending transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct TransitionedRow {
    pub id: DbId,
    pub user_id: DbId,
}

/// A pending order with its customer and product, as listed for approval.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingOrder {
    pub id: DbId,
    pub user_id: DbId,
    pub order_date: Timestamp,
    pub quantity: i32,
    pub total: Decimal,
    pub shipping_fee: Decimal,
    pub customer_name: String,
    pub product_name: String,
    pub product_price: Decimal,
}

/// A pending booking as listed for approval.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingBooking {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub contact: String,
    pub phone_model: String,
    pub issue: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub created_at: Timestamp,
}
