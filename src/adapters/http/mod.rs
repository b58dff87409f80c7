//! HTTP adapters - REST API implementations.

pub mod reading;

pub use reading::{reading_routes, ReadingHandlers};
