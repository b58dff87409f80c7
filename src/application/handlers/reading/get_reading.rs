//! GetReading - cached reading lookup.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ReadingId};
use crate::domain::reading::Reading;
use crate::ports::ReadingStore;

#[derive(Debug, Clone)]
pub struct GetReadingQuery {
    pub reading_id: ReadingId,
}

pub struct GetReadingHandler {
    store: Arc<dyn ReadingStore>,
}

impl GetReadingHandler {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Fails with `ReadingNotFound` when the reading was never cached or
    /// has been evicted.
    pub async fn handle(&self, query: GetReadingQuery) -> Result<Reading, DomainError> {
        self.store.get(&query.reading_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ReadingNotFound,
                format!("Reading {} not found", query.reading_id),
            )
            .with_detail("reading_id", query.reading_id.to_string())
        })
    }
}
