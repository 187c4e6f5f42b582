//! DTOs for merchant registry endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pagination::PaginationMeta;
use crate::domain::entities::{Merchant, MerchantPatch, NewMerchant};

/// Request to register a new merchant.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMerchantRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(max = 300))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within [-90, 90]"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be within [-180, 180]"
    ))]
    pub longitude: f64,
}

impl From<CreateMerchantRequest> for NewMerchant {
    fn from(request: CreateMerchantRequest) -> Self {
        Self {
            name: request.name,
            address: request.address,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

/// Partial merchant update. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMerchantRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(length(max = 300))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within [-90, 90]"))]
    pub latitude: Option<f64>,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be within [-180, 180]"
    ))]
    pub longitude: Option<f64>,

    pub is_active: Option<bool>,
}

impl From<UpdateMerchantRequest> for MerchantPatch {
    fn from(request: UpdateMerchantRequest) -> Self {
        Self {
            name: request.name,
            address: request.address,
            latitude: request.latitude,
            longitude: request.longitude,
            is_active: request.is_active,
        }
    }
}

/// Merchant representation returned by the API.
#[derive(Debug, Serialize)]
pub struct MerchantResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Merchant> for MerchantResponse {
    fn from(merchant: Merchant) -> Self {
        Self {
            id: merchant.id,
            name: merchant.name,
            address: merchant.address,
            latitude: merchant.latitude,
            longitude: merchant.longitude,
            is_active: merchant.is_active,
            created_at: merchant.created_at,
        }
    }
}

/// Paginated merchant listing.
#[derive(Debug, Serialize)]
pub struct MerchantListResponse {
    pub items: Vec<MerchantResponse>,
    pub pagination: PaginationMeta,
}
