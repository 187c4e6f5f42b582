//! Request and response DTOs for the REST API.

pub mod health;
pub mod merchant;
pub mod order;
pub mod pagination;
pub mod quote;
