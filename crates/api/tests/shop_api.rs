//! HTTP-level tests for the public catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get};
use reboot_core::roles::ROLE_CUSTOMER;
use reboot_db::models::order::CreateOrder;
use reboot_db::models::product::CreateProduct;
use reboot_db::models::review::CreateReview;
use reboot_db::repositories::{OrderRepo, ProductRepo, ReviewRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_product(pool: &PgPool, name: &str, cents: i64) -> i64 {
    ProductRepo::create(
        pool,
        &CreateProduct {
            name: name.to_string(),
            description: String::new(),
            price: Decimal::new(cents, 2),
            image: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
        },
    )
    .await
    .unwrap()
    .id
}

async fn add_review(pool: &PgPool, user_id: i64, product_id: i64, rating: i16) {
    let order = OrderRepo::create(
        pool,
        &CreateOrder {
            user_id,
            product_id,
            quantity: 1,
            total: Decimal::new(100, 0),
            shipping_fee: Decimal::ZERO,
        },
    )
    .await
    .unwrap();
    ReviewRepo::create(
        pool,
        &CreateReview {
            user_id,
            product_id,
            order_id: order.id,
            rating,
            comment: format!("{rating} stars"),
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_returns_only_matching_product(pool: PgPool) {
    let glass_id = create_product(&pool, "Glass Screen Protector", 29900).await;
    create_product(&pool, "USB-C Cable", 14950).await;

    let response = get(common::build_test_app(pool), "/api/v1/shop?search=glass").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let data = &json["data"];
    assert_eq!(data["query"], "glass");
    assert_eq!(data["result_count"], 1);
    let products = data["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], glass_id);
    assert_eq!(products[0]["name"], "Glass Screen Protector");
    assert_eq!(products[0]["price"], "299.00");
    assert_eq!(products[0]["price_display"], "\u{20b1}299.00");
    assert_eq!(products[0]["image"], "glass-screen-protector.jpg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_search_lists_whole_catalog(pool: PgPool) {
    create_product(&pool, "Glass Screen Protector", 29900).await;
    create_product(&pool, "USB-C Cable", 14950).await;

    for uri in ["/api/v1/shop", "/api/v1/shop?search=", "/api/v1/shop?search=+++"] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["query"], "", "uri {uri}");
        assert_eq!(json["data"]["result_count"], 2, "uri {uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_products_carry_rating_and_recent_reviews(pool: PgPool) {
    let glass_id = create_product(&pool, "Glass Screen Protector", 29900).await;
    create_product(&pool, "USB-C Cable", 14950).await;
    let customer = create_user(&pool, "Dana", ROLE_CUSTOMER).await;
    for rating in [5, 4, 4, 3, 5, 5] {
        add_review(&pool, customer.id, glass_id, rating).await;
    }

    let response = get(common::build_test_app(pool), "/api/v1/shop").await;
    let json = body_json(response).await;
    let products = json["data"]["products"].as_array().unwrap();

    let glass = &products[0];
    assert_eq!(glass["review_count"], 6);
    assert_eq!(glass["avg_rating"], 4.3);
    let reviews = glass["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 5, "only the five newest reviews");
    assert_eq!(reviews[0]["comment"], "5 stars");
    assert_eq!(reviews[0]["user_name"], "Dana");

    let cable = &products[1];
    assert_eq!(cable["review_count"], 0);
    assert_eq!(cable["avg_rating"], 0.0);
    assert!(cable["reviews"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Product reviews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_reviews_lists_all_newest_first(pool: PgPool) {
    let glass_id = create_product(&pool, "Glass Screen Protector", 29900).await;
    let customer = create_user(&pool, "Dana", ROLE_CUSTOMER).await;
    for rating in [1, 2, 3, 4, 5, 4, 3] {
        add_review(&pool, customer.id, glass_id, rating).await;
    }

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/products/{glass_id}/reviews"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let reviews = json["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 7);
    assert_eq!(reviews[0]["rating"], 3);
    assert_eq!(reviews[6]["rating"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reviews_of_unknown_product_is_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/products/999/reviews").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
