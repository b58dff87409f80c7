//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `catalog` - JSON card catalog (embedded or from a file)
//! - `entropy` - Seedable ChaCha8 generators
//! - `clock` - System and fixed clocks
//! - `cache` - In-memory reading store
//! - `http` - axum REST API

pub mod cache;
pub mod catalog;
pub mod clock;
pub mod entropy;
pub mod http;

pub use cache::{InMemoryReadingStore, DEFAULT_READING_CAPACITY};
pub use catalog::{CatalogError, JsonCardCatalog};
pub use clock::{FixedClock, SystemClock};
pub use entropy::ChaChaEntropy;
