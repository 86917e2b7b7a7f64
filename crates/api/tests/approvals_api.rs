//! HTTP-level tests for the admin approvals page.

mod common;

use axum::body::Body;
use axum::http::header::LOCATION;
use axum::http::{Response, StatusCode};
use chrono::{Duration, NaiveTime, Utc};
use common::{body_json, create_user, get_auth, post_form, token_for};
use reboot_core::roles::{ROLE_ADMIN, ROLE_CUSTOMER};
use reboot_db::models::booking::CreateBooking;
use reboot_db::models::order::CreateOrder;
use reboot_db::models::product::CreateProduct;
use reboot_db::repositories::{BookingRepo, NotificationRepo, OrderRepo, ProductRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

const APPROVALS: &str = "/api/v1/admin/approvals";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_pending_order(pool: &PgPool, user_id: i64) -> i64 {
    let product = ProductRepo::create(
        pool,
        &CreateProduct {
            name: "Tempered Glass".to_string(),
            description: "Edge-to-edge protector".to_string(),
            price: Decimal::new(29900, 2),
            image: String::new(),
        },
    )
    .await
    .unwrap();
    OrderRepo::create(
        pool,
        &CreateOrder {
            user_id,
            product_id: product.id,
            quantity: 2,
            total: Decimal::new(59800, 2),
            shipping_fee: Decimal::new(5000, 2),
        },
    )
    .await
    .unwrap()
    .id
}

async fn create_pending_booking(pool: &PgPool, user_id: i64) -> i64 {
    BookingRepo::create(
        pool,
        user_id,
        &CreateBooking {
            name: "Ana Cruz".to_string(),
            contact: "09171234567".to_string(),
            phone_model: "Pixel 7".to_string(),
            issue: "Cracked screen".to_string(),
            date: Utc::now().date_naive() + Duration::days(3),
            time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        },
    )
    .await
    .unwrap()
    .id
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

fn assert_redirect(response: &Response<Body>, flash: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), format!("{APPROVALS}?flash={flash}"));
}

async fn order_status(pool: &PgPool, id: i64) -> (String, Option<String>) {
    let order = OrderRepo::find_by_id(pool, id).await.unwrap().unwrap();
    (order.status, order.status_message)
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_approves_pending_order(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let customer = create_user(&pool, "Carla", ROLE_CUSTOMER).await;
    let order_id = create_pending_order(&pool, customer.id).await;
    let token = token_for(&admin);

    let id = order_id.to_string();
    let response = post_form(
        common::build_test_app(pool.clone()),
        APPROVALS,
        &[("type", "order"), ("id", id.as_str()), ("action", "approve")],
        Some(&token),
    )
    .await;

    assert_redirect(&response, "order_approved");
    assert_eq!(order_status(&pool, order_id).await.0, "processing");

    let notifications = NotificationRepo::list_for_related(&pool, "order", order_id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].user_id, customer.id);
    assert_eq!(notifications[0].title, "Order Approved");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_without_reason_changes_nothing(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let customer = create_user(&pool, "Carla", ROLE_CUSTOMER).await;
    let order_id = create_pending_order(&pool, customer.id).await;
    let token = token_for(&admin);

    let id = order_id.to_string();
    let response = post_form(
        common::build_test_app(pool.clone()),
        APPROVALS,
        &[("type", "order"), ("id", id.as_str()), ("action", "reject"), ("reason", "+++")],
        Some(&token),
    )
    .await;

    assert_redirect(&response, "reason_required");
    assert_eq!(order_status(&pool, order_id).await, ("pending".to_string(), None));
    let notifications = NotificationRepo::list_for_related(&pool, "order", order_id)
        .await
        .unwrap();
    assert!(notifications.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_with_reason_cancels_and_notifies(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let customer = create_user(&pool, "Carla", ROLE_CUSTOMER).await;
    let order_id = create_pending_order(&pool, customer.id).await;
    let token = token_for(&admin);

    let id = order_id.to_string();
    let response = post_form(
        common::build_test_app(pool.clone()),
        APPROVALS,
        &[("type", "order"), ("id", id.as_str()), ("action", "reject"), ("reason", "Out+of+stock")],
        Some(&token),
    )
    .await;

    assert_redirect(&response, "order_rejected");
    assert_eq!(
        order_status(&pool, order_id).await,
        ("cancelled".to_string(), Some("Out of stock".to_string()))
    );
    let notifications = NotificationRepo::list_for_related(&pool, "order", order_id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].body,
        "Your order has been rejected. Reason: Out of stock"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resubmitting_a_decided_order_is_a_no_op(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let customer = create_user(&pool, "Carla", ROLE_CUSTOMER).await;
    let order_id = create_pending_order(&pool, customer.id).await;
    let token = token_for(&admin);
    let id = order_id.to_string();
    let form = [("type", "order"), ("id", id.as_str()), ("action", "approve")];

    let first = post_form(common::build_test_app(pool.clone()), APPROVALS, &form, Some(&token)).await;
    assert_redirect(&first, "order_approved");

    let second =
        post_form(common::build_test_app(pool.clone()), APPROVALS, &form, Some(&token)).await;
    assert_redirect(&second, "not_pending");

    let notifications = NotificationRepo::list_for_related(&pool, "order", order_id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1, "no second notification");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_submission_is_invalid_request(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let token = token_for(&admin);

    for form in [
        vec![("type", "order"), ("action", "approve")],
        vec![("type", "order"), ("id", "0"), ("action", "approve")],
        vec![("type", "invoice"), ("id", "1"), ("action", "approve")],
        vec![("type", "order"), ("id", "1"), ("action", "archive")],
    ] {
        let response =
            post_form(common::build_test_app(pool.clone()), APPROVALS, &form, Some(&token)).await;
        assert_redirect(&response, "invalid_request");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_database_failure_reports_persistence_failed(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let customer = create_user(&pool, "Carla", ROLE_CUSTOMER).await;
    let order_id = create_pending_order(&pool, customer.id).await;
    let token = token_for(&admin);
    sqlx::query("ALTER TABLE notifications RENAME TO notifications_archived")
        .execute(&pool)
        .await
        .unwrap();

    let id = order_id.to_string();
    let response = post_form(
        common::build_test_app(pool.clone()),
        APPROVALS,
        &[("type", "order"), ("id", id.as_str()), ("action", "approve")],
        Some(&token),
    )
    .await;

    assert_redirect(&response, "persistence_failed");
    assert_eq!(order_status(&pool, order_id).await.0, "pending");
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_approves_booking_as_confirmed(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let customer = create_user(&pool, "Ben", ROLE_CUSTOMER).await;
    let booking_id = create_pending_booking(&pool, customer.id).await;
    let token = token_for(&admin);

    let id = booking_id.to_string();
    let response = post_form(
        common::build_test_app(pool.clone()),
        APPROVALS,
        &[("type", "booking"), ("id", id.as_str()), ("action", "approve")],
        Some(&token),
    )
    .await;

    assert_redirect(&response, "booking_approved");
    let booking = BookingRepo::find_by_id(&pool, booking_id).await.unwrap().unwrap();
    assert_eq!(booking.status, "confirmed");

    let notifications = NotificationRepo::list_for_related(&pool, "booking", booking_id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].body, "Your booking has been approved!");
}

// ---------------------------------------------------------------------------
// Listing and access control
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pending_list_shows_flash_and_formatted_prices(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let customer = create_user(&pool, "Carla", ROLE_CUSTOMER).await;
    let order_id = create_pending_order(&pool, customer.id).await;
    create_pending_booking(&pool, customer.id).await;
    let token = token_for(&admin);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("{APPROVALS}?flash=order_approved"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let data = &json["data"];
    assert_eq!(data["flash"]["kind"], "success");
    assert_eq!(
        data["flash"]["message"],
        "Order approved successfully. It has been removed from pending list."
    );

    let orders = data["pending_orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], order_id);
    assert_eq!(orders[0]["customer_name"], "Carla");
    assert_eq!(orders[0]["product_name"], "Tempered Glass");
    assert_eq!(orders[0]["price_display"], "\u{20b1}299.00");
    assert_eq!(orders[0]["total_display"], "\u{20b1}598.00");

    assert_eq!(data["pending_bookings"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_flash_is_ignored(pool: PgPool) {
    let admin = create_user(&pool, "Admin", ROLE_ADMIN).await;
    let token = token_for(&admin);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("{APPROVALS}?flash=everything_is_fine"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["flash"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customers_cannot_decide(pool: PgPool) {
    let customer = create_user(&pool, "Carla", ROLE_CUSTOMER).await;
    let order_id = create_pending_order(&pool, customer.id).await;
    let token = token_for(&customer);

    let id = order_id.to_string();
    let response = post_form(
        common::build_test_app(pool.clone()),
        APPROVALS,
        &[("type", "order"), ("id", id.as_str()), ("action", "approve")],
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(common::build_test_app(pool.clone()), APPROVALS, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    assert_eq!(order_status(&pool, order_id).await.0, "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_submission_is_unauthorized(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool),
        APPROVALS,
        &[("type", "order"), ("id", "1"), ("action", "approve")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
