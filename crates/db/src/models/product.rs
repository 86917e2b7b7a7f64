//! Product catalog models.

use reboot_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub created_at: Timestamp,
}

/// A product joined with its live review aggregate.
///
/// `avg_rating` is `None` when the product has no reviews; callers round it
/// with [`reboot_core::catalog::round_average`].
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithRating {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub avg_rating: Option<f64>,
    pub review_count: i64,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
}
