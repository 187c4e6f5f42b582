//! Handlers for order intake and listing endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::order::{CreateOrderRequest, OrderListResponse, OrderResponse};
use crate::api::dto::pagination::{OrderListParams, PaginationMeta};
use crate::application::services::PlaceOrder;
use crate::error::AppError;
use crate::state::AppState;

/// Submits an order with a server-side recomputed fee.
///
/// # Endpoint
///
/// `POST /api/orders`
///
/// # Response
///
/// `201 Created` with the persisted order, including the fee snapshot and
/// `total = subtotal + delivery_fee`.
///
/// # Errors
///
/// Returns 400 Bad Request for validation failures (missing delivery
/// location, negative subtotal, inactive merchant), 404 Not Found for an
/// unknown merchant.
pub async fn create_order_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    payload.validate()?;

    let order = state
        .order_service
        .place(PlaceOrder {
            merchant_id: payload.merchant_id,
            order_type: payload.order_type,
            customer: payload.location.map(Into::into),
            subtotal: payload.subtotal,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// Lists orders, newest first.
///
/// # Endpoint
///
/// `GET /api/admin/orders?page=1&page_size=25&merchant_id=7`
pub async fn order_list_handler(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<Json<OrderListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|message| AppError::bad_request(message, json!({})))?;

    let (orders, total) = state
        .order_service
        .list(offset, limit, params.merchant_id)
        .await?;

    let (page, page_size) = params.pagination.effective();

    Ok(Json(OrderListResponse {
        items: orders.into_iter().map(OrderResponse::from).collect(),
        pagination: PaginationMeta {
            page,
            page_size,
            total,
        },
    }))
}

/// Fetches a single order.
///
/// # Endpoint
///
/// `GET /api/admin/orders/{id}`
pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.get(id).await?;

    Ok(Json(order.into()))
}
