//! Core domain entities representing the business data model.
//!
//! Plain data structures without business logic:
//!
//! - [`Merchant`] - A registered merchant with a fixed dispatch location
//! - [`Order`] - A submitted order with the fee snapshot embedded
//! - [`ApiToken`] - Stored operator API token (hash only)
//!
//! Creation inputs use separate structs (`NewMerchant`, `NewOrder`) and
//! partial updates use patch structs (`MerchantPatch`).

pub mod api_token;
pub mod merchant;
pub mod order;

pub use api_token::ApiToken;
pub use merchant::{Merchant, MerchantPatch, NewMerchant};
pub use order::{NewOrder, Order};
