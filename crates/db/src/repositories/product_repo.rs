//! Repository for the `products` table and its catalog search.

use reboot_core::catalog::SearchQuery;
use reboot_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductWithRating};

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, description, price, image, created_at";

/// Catalog listing with the live review aggregate. `$1` is an optional
/// `ILIKE` pattern; `NULL` lists everything.
const SEARCH_QUERY: &str = "\
    SELECT p.id, p.name, p.description, p.price, p.image,
           AVG(r.rating)::FLOAT8 AS avg_rating,
           COUNT(r.id) AS review_count
    FROM products p
    LEFT JOIN reviews r ON r.product_id = p.id
    WHERE $1::TEXT IS NULL
       OR p.name ILIKE $1
       OR p.description ILIKE $1
    GROUP BY p.id
    ORDER BY p.id ASC";

/// Provides catalog operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// An empty query returns the full catalog. Results keep the catalog's
    /// default order (by id) and carry the average rating and review count.
    pub async fn search(
        pool: &PgPool,
        query: &SearchQuery,
    ) -> Result<Vec<ProductWithRating>, sqlx::Error> {
        sqlx::query_as::<_, ProductWithRating>(SEARCH_QUERY)
            .bind(query.like_pattern())
            .fetch_all(pool)
            .await
    }
}
