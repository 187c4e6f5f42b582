//! Pagination and filtering query parameters.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 100
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(25);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&page_size) {
            return Err("Page size must be between 1 and 100".to_string());
        }

        let offset = ((page - 1) * page_size) as i64;
        let limit = page_size as i64;

        Ok((offset, limit))
    }

    /// Effective page and page size after defaulting.
    pub fn effective(&self) -> (u32, u32) {
        (self.page.unwrap_or(1), self.page_size.unwrap_or(25))
    }
}

/// Pagination metadata echoed back in list responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
}

/// Query parameters for the merchant list endpoint.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct MerchantListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// When true, deactivated merchants are included.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub include_inactive: Option<bool>,
}

/// Query parameters for the order list endpoint.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct OrderListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// Restricts the listing to a single merchant.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub merchant_id: Option<i64>,
}
