//! Shared types for DRY compliance.

mod envelope;
mod pagination;

pub use envelope::{Empty, Envelope, Status};
pub use pagination::PageParams;
