//! REST API request handlers.

pub mod health;
pub mod merchants;
pub mod orders;
pub mod quote;

pub use health::health_handler;
pub use merchants::{
    create_merchant_handler, deactivate_merchant_handler, get_merchant_handler,
    merchant_list_handler, update_merchant_handler,
};
pub use orders::{create_order_handler, get_order_handler, order_list_handler};
pub use quote::quote_handler;
