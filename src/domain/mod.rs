//! Domain layer - Core business entities and logic
//!
//! Typed documents for each store collection, plus the request and
//! response data transfer objects derived from them.

pub mod admin;
pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use admin::{Admin, AdminResponse};
pub use cart::{CartItem, CartItemResponse, NewCartItem};
pub use order::{NewOrder, Order, OrderLine, OrderResponse, UpdateOrderStatus};
pub use product::{NewProduct, Product, ProductResponse};
pub use user::{NewUser, UpdateUser, User, UserResponse};
