//! In-memory transaction storage, for tests and benchmarks

use crate::core::traits::Storage;
use crate::types::{TrackerError, Transaction};

/// Storage that keeps the persisted collection in memory
///
/// Starts out empty (nothing persisted) unless seeded with [`MemoryStorage::with`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    persisted: Option<Vec<Transaction>>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `transactions`
    pub fn with(transactions: Vec<Transaction>) -> Self {
        MemoryStorage {
            persisted: Some(transactions),
            writes: 0,
        }
    }

    /// The collection as of the last write, if any
    pub fn persisted(&self) -> Option<&[Transaction]> {
        self.persisted.as_deref()
    }

    /// Number of writes performed so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<Vec<Transaction>>, TrackerError> {
        Ok(self.persisted.clone())
    }

    fn write(&mut self, transactions: &[Transaction]) -> Result<(), TrackerError> {
        self.persisted = Some(transactions.to_vec());
        self.writes += 1;
        Ok(())
    }
}
