//! Handlers for merchant registry endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::merchant::{
    CreateMerchantRequest, MerchantListResponse, MerchantResponse, UpdateMerchantRequest,
};
use crate::api::dto::pagination::{MerchantListParams, PaginationMeta};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new merchant.
///
/// # Endpoint
///
/// `POST /api/admin/merchants`
///
/// # Errors
///
/// Returns 400 Bad Request for invalid names or coordinates, 409 Conflict
/// when the name is already registered.
pub async fn create_merchant_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMerchantRequest>,
) -> Result<(StatusCode, Json<MerchantResponse>), AppError> {
    payload.validate()?;

    let merchant = state.merchant_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(merchant.into())))
}

/// Lists merchants, newest first.
///
/// # Endpoint
///
/// `GET /api/merchants?page=1&page_size=25&include_inactive=false`
pub async fn merchant_list_handler(
    State(state): State<AppState>,
    Query(params): Query<MerchantListParams>,
) -> Result<Json<MerchantListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|message| AppError::bad_request(message, json!({})))?;

    let include_inactive = params.include_inactive.unwrap_or(false);

    let (merchants, total) = state
        .merchant_service
        .list(offset, limit, include_inactive)
        .await?;

    let (page, page_size) = params.pagination.effective();

    Ok(Json(MerchantListResponse {
        items: merchants.into_iter().map(MerchantResponse::from).collect(),
        pagination: PaginationMeta {
            page,
            page_size,
            total,
        },
    }))
}

/// Fetches a single merchant.
///
/// # Endpoint
///
/// `GET /api/merchants/{id}`
pub async fn get_merchant_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MerchantResponse>, AppError> {
    let merchant = state.merchant_service.get(id).await?;

    Ok(Json(merchant.into()))
}

/// Partially updates a merchant.
///
/// # Endpoint
///
/// `PATCH /api/admin/merchants/{id}`
pub async fn update_merchant_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMerchantRequest>,
) -> Result<Json<MerchantResponse>, AppError> {
    payload.validate()?;

    let merchant = state.merchant_service.update(id, payload.into()).await?;

    Ok(Json(merchant.into()))
}

/// Deactivates a merchant.
///
/// The merchant stays in the registry for order history but can no longer
/// be quoted against or ordered from.
///
/// # Endpoint
///
/// `DELETE /api/admin/merchants/{id}`
pub async fn deactivate_merchant_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.merchant_service.deactivate(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
