//! Infrastructure layer - External systems integration
//!
//! Holds the document store client; the only external collaborator
//! this service talks to.

pub mod store;

pub use store::{is_duplicate_key, Store};
