mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use common::{MALANG, create_test_merchant, create_test_state, deactivate_merchant, offset_north};
use delivery_pricing::api::handlers::quote_handler;
use delivery_pricing::domain::pricing::OrderType;

fn quote_app(state: delivery_pricing::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/quote", post(quote_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_delivery_quote_within_free_zone(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Warung Bu Sri", MALANG.0, MALANG.1).await;
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    let customer = offset_north(MALANG, 500.0);
    let response = server
        .post("/api/quote")
        .json(&json!({
            "merchant_id": merchant_id,
            "order_type": "delivery",
            "location": { "latitude": customer.0, "longitude": customer.1 }
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["fee_amount"], 0);
    assert_eq!(body["is_free_zone"], true);
    let distance = body["distance_meters"].as_f64().unwrap();
    assert!((distance - 500.0).abs() < 1.0, "distance: {distance}");
}

#[sqlx::test]
async fn test_free_zone_boundary_distance_is_free(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Warung Bu Sri", MALANG.0, MALANG.1).await;
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    // 1999 m keeps the point inside the zone under float rounding.
    let customer = offset_north(MALANG, 1_999.0);
    let response = server
        .post("/api/quote")
        .json(&json!({
            "merchant_id": merchant_id,
            "order_type": "delivery",
            "location": { "latitude": customer.0, "longitude": customer.1 }
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["fee_amount"], 0);
    assert_eq!(body["is_free_zone"], true);
}

#[sqlx::test]
async fn test_delivery_quote_just_beyond_free_zone(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Warung Bu Sri", MALANG.0, MALANG.1).await;
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    let customer = offset_north(MALANG, 2_500.0);
    let response = server
        .post("/api/quote")
        .json(&json!({
            "merchant_id": merchant_id,
            "order_type": "delivery",
            "location": { "latitude": customer.0, "longitude": customer.1 }
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["fee_amount"], 3000);
    assert_eq!(body["is_free_zone"], false);
}

#[sqlx::test]
async fn test_delivery_quote_long_distance(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Warung Bu Sri", MALANG.0, MALANG.1).await;
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    // 10.4 km: 8.4 km beyond the zone rounds up to 9 chargeable km.
    let customer = offset_north(MALANG, 10_400.0);
    let response = server
        .post("/api/quote")
        .json(&json!({
            "merchant_id": merchant_id,
            "order_type": "delivery",
            "location": { "latitude": customer.0, "longitude": customer.1 }
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["fee_amount"], 27000);
    assert_eq!(body["is_free_zone"], false);
}

#[sqlx::test]
async fn test_pickup_quote_reports_zero_distance(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Warung Bu Sri", MALANG.0, MALANG.1).await;
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    let response = server
        .post("/api/quote")
        .json(&json!({ "merchant_id": merchant_id, "order_type": "pickup" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["fee_amount"], 0);
    assert_eq!(body["distance_meters"], 0.0);
    assert_eq!(body["is_free_zone"], false);
    assert_eq!(body["order_type"], "pickup");
}

#[sqlx::test]
async fn test_delivery_quote_without_location_is_rejected(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Warung Bu Sri", MALANG.0, MALANG.1).await;
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    let response = server
        .post("/api/quote")
        .json(&json!({ "merchant_id": merchant_id, "order_type": "delivery" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_out_of_range_coordinates_are_rejected(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Warung Bu Sri", MALANG.0, MALANG.1).await;
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    let response = server
        .post("/api/quote")
        .json(&json!({
            "merchant_id": merchant_id,
            "order_type": "delivery",
            "location": { "latitude": 91.0, "longitude": 112.63 }
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_quote_for_unknown_merchant_is_not_found(pool: PgPool) {
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    let response = server
        .post("/api/quote")
        .json(&json!({ "merchant_id": 999, "order_type": "pickup" }))
        .await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_quote_for_inactive_merchant_is_rejected(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Closed Warung", MALANG.0, MALANG.1).await;
    deactivate_merchant(&pool, merchant_id).await;
    let (state, _rx) = create_test_state(pool);
    let server = quote_app(state);

    let response = server
        .post("/api/quote")
        .json(&json!({ "merchant_id": merchant_id, "order_type": "pickup" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_served_quote_emits_analytics_event(pool: PgPool) {
    let merchant_id = create_test_merchant(&pool, "Warung Bu Sri", MALANG.0, MALANG.1).await;
    let (state, mut rx) = create_test_state(pool);
    let server = quote_app(state);

    let customer = offset_north(MALANG, 2_500.0);
    server
        .post("/api/quote")
        .json(&json!({
            "merchant_id": merchant_id,
            "order_type": "delivery",
            "location": { "latitude": customer.0, "longitude": customer.1 }
        }))
        .await
        .assert_status_ok();

    let event = rx.try_recv().expect("quote should emit an event");
    assert_eq!(event.merchant_id, merchant_id);
    assert_eq!(event.order_type, OrderType::Delivery);
    assert_eq!(event.fee_amount, 3000);
    assert!(!event.is_free_zone);
}
