//! Core traits for transaction persistence
//!
//! The transaction store talks to its backing storage only through this trait,
//! so the CSV file used by the binary and the in-memory storage used by tests
//! and benchmarks are interchangeable.

use crate::types::{TrackerError, Transaction};

/// Trait for reading and writing the full transaction collection
///
/// Storage is read once at startup and rewritten wholesale on every save;
/// there are no partial writes.
pub trait Storage {
    /// Read every persisted transaction
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet. That is the
    /// trigger for the sample dataset bootstrap, not an error.
    fn read(&self) -> Result<Option<Vec<Transaction>>, TrackerError>;

    /// Replace the persisted contents with `transactions`
    fn write(&mut self, transactions: &[Transaction]) -> Result<(), TrackerError>;
}
