//! In-Memory Reading Store Adapter
//!
//! Keeps generated readings in memory, evicting the oldest entries once a
//! capacity is reached. Readings are immutable, so entries are only ever
//! inserted or evicted.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ReadingId};
use crate::domain::reading::Reading;
use crate::ports::ReadingStore;

/// Default number of readings kept.
pub const DEFAULT_READING_CAPACITY: usize = 1_000;

#[derive(Debug, Default)]
struct Entries {
    readings: HashMap<ReadingId, Reading>,
    order: VecDeque<ReadingId>,
}

/// Bounded in-memory reading cache.
#[derive(Debug, Clone)]
pub struct InMemoryReadingStore {
    entries: Arc<RwLock<Entries>>,
    capacity: usize,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_READING_CAPACITY)
    }

    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Entries::default())),
            capacity: capacity.max(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.readings.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryReadingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadingStore for InMemoryReadingStore {
    async fn save(&self, reading: &Reading) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        let id = reading.id();
        if entries.readings.insert(id, reading.clone()).is_none() {
            entries.order.push_back(id);
        }
        while entries.order.len() > self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.readings.remove(&oldest);
            }
        }
        Ok(())
    }

    async fn get(&self, id: &ReadingId) -> Result<Option<Reading>, DomainError> {
        Ok(self.entries.read().await.readings.get(id).cloned())
    }
}
