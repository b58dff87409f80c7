//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CardCatalog` - Read-only card reference table
//! - `EntropySource` - Seedable pseudo-random generators for card selection
//! - `Clock` - Current time and date
//! - `ReadingStore` - Cache of generated readings

mod card_catalog;
mod clock;
mod entropy_source;
mod reading_store;

pub use card_catalog::CardCatalog;
pub use clock::Clock;
pub use entropy_source::EntropySource;
pub use reading_store::ReadingStore;
