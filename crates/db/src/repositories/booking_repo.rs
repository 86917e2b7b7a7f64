//! Repository for the `bookings` table.

use reboot_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, CreateBooking};

/// Column list for `bookings` queries.
const COLUMNS: &str = "id, user_id, name, contact, phone_model, issue, date, time, status, \
    status_message, created_at, updated_at";

/// Provides CRUD operations for repair bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new `pending` booking for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateBooking,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (user_id, name, contact, phone_model, issue, date, time)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.contact)
            .bind(&input.phone_model)
            .bind(&input.issue)
            .bind(input.date)
            .bind(input.time)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's bookings, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
