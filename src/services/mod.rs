//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the document store to fulfill
//! application use cases. Handlers depend on the traits, not the
//! Mongo-backed implementations.

mod auth_service;
mod cart_service;
mod catalog_service;
pub mod container;
mod order_service;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use cart_service::{CartManager, CartService};
pub use catalog_service::{CatalogManager, CatalogService};
pub use order_service::{OrderManager, OrderService};
pub use user_service::{UserManager, UserService};
