//! ReadingStore port - cache of generated readings by id.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ReadingId};
use crate::domain::reading::Reading;

/// Keeps finished readings so clients can fetch them again by id.
///
/// Readings are immutable, so a store never updates an entry in place.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    async fn save(&self, reading: &Reading) -> Result<(), DomainError>;

    /// Returns `Ok(None)` when the id is unknown or has been evicted.
    async fn get(&self, id: &ReadingId) -> Result<Option<Reading>, DomainError>;
}
