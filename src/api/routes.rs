//! API route configuration.

use crate::api::handlers::{
    create_merchant_handler, create_order_handler, deactivate_merchant_handler,
    get_merchant_handler, get_order_handler, merchant_list_handler, order_list_handler,
    quote_handler, update_merchant_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Public guest-checkout routes, no authentication.
///
/// # Endpoints
///
/// - `POST /quote`           - Delivery fee quote
/// - `POST /orders`          - Submit an order
/// - `GET  /merchants`       - Browse merchants
/// - `GET  /merchants/{id}`  - Merchant detail
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/orders", post(create_order_handler))
        .route("/merchants", get(merchant_list_handler))
        .route("/merchants/{id}", get(get_merchant_handler))
}

/// Operator routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /merchants`       - Register a merchant
/// - `PATCH  /merchants/{id}`  - Update a merchant (move, rename, toggle active)
/// - `DELETE /merchants/{id}`  - Deactivate a merchant
/// - `GET    /orders`          - List submitted orders (paginated)
/// - `GET    /orders/{id}`     - Order detail
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/merchants", post(create_merchant_handler))
        .route(
            "/merchants/{id}",
            patch(update_merchant_handler).delete(deactivate_merchant_handler),
        )
        .route("/orders", get(order_list_handler))
        .route("/orders/{id}", get(get_order_handler))
}
