//! Shri Backend - CRUD API over the shri_* document collections
//!
//! A single HTTP entry point dispatching on path and method to CRUD
//! operations against five MongoDB collections (admins, users,
//! products, cart, orders), answering with the `{status, ...}` JSON
//! envelope on every route.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Typed documents and data transfer objects
//! - **services**: Application use cases and business logic
//! - **infra**: Document store access
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (envelope, pagination)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Provision store indexes
//! cargo run -- indexes
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::Store;
