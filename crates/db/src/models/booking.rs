//! Repair booking models and DTOs.

use chrono::{NaiveDate, NaiveTime, Utc};
use reboot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub contact: String,
    pub phone_model: String,
    pub issue: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub status_message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /bookings`. The owner comes from the auth token.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBooking {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub contact: String,
    #[validate(length(min = 1, max = 100))]
    pub phone_model: String,
    #[validate(length(min = 1, max = 1000))]
    pub issue: String,
    #[validate(custom(function = "validate_not_in_past"))]
    pub date: NaiveDate,
    pub time: NaiveTime,
}

fn validate_not_in_past(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < Utc::now().date_naive() {
        return Err(ValidationError::new("date_in_past"));
    }
    Ok(())
}
