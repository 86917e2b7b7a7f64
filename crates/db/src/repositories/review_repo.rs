//! Repository for the `reviews` table.

use reboot_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, ReviewWithAuthor};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, user_id, product_id, order_id, rating, comment, created_at";

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review, returning the created row.
    ///
    /// A second review for the same order violates `uq_reviews_order_id`.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (user_id, product_id, order_id, rating, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.user_id)
            .bind(input.product_id)
            .bind(input.order_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// The newest `per_product` reviews of each listed product, newest first.
    ///
    /// One windowed query instead of one query per product.
    pub async fn recent_for_products(
        pool: &PgPool,
        product_ids: &[DbId],
        per_product: i64,
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT id, product_id, user_name, rating, comment, created_at
             FROM (
                SELECT r.id, r.product_id, u.name AS user_name, r.rating, r.comment,
                       r.created_at,
                       ROW_NUMBER() OVER (
                           PARTITION BY r.product_id
                           ORDER BY r.created_at DESC, r.id DESC
                       ) AS rn
                FROM reviews r
                JOIN users u ON u.id = r.user_id
                WHERE r.product_id = ANY($1)
             ) ranked
             WHERE rn <= $2
             ORDER BY product_id ASC, created_at DESC, id DESC",
        )
        .bind(product_ids)
        .bind(per_product)
        .fetch_all(pool)
        .await
    }

    /// Every review of a product, newest first.
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, r.product_id, u.name AS user_name, r.rating, r.comment, r.created_at
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.product_id = $1
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await
    }
}
