//! API middleware.

mod preflight;

pub use preflight::preflight;
