//! HTTP request handlers.

pub mod auth_handler;
pub mod cart_handler;
pub mod order_handler;
pub mod product_handler;
pub mod user_handler;
