//! Transaction storage
//!
//! This module provides the TransactionStore component that owns the in-memory
//! transaction collection and its persistence round-trip.
//!
//! # Ordering
//!
//! The collection is kept sorted by date, newest first, after loading and after
//! every insert. Transactions on the same date keep their relative order.
//!
//! # Sign Convention
//!
//! Every transaction is normalized on construction (income positive, everything
//! else non-positive), so rows loaded from a file that violates the convention
//! come back corrected.
//!
//! # Bootstrap
//!
//! When the storage holds nothing yet, a synthetic 30-day sample is generated
//! and persisted immediately.

use crate::core::aggregation::AggregationEngine;
use crate::core::sample_data::sample_transactions;
use crate::core::traits::Storage;
use crate::types::{Category, TrackerError, Transaction};
use chrono::{Local, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

/// Transaction store
///
/// Append-only: the only mutator is [`TransactionStore::add`]. There is no
/// update or delete, and no identity beyond list position.
#[derive(Debug)]
pub struct TransactionStore<S: Storage> {
    /// Sorted by date descending
    transactions: Vec<Transaction>,
    storage: S,
}

impl<S: Storage> TransactionStore<S> {
    /// Load the persisted transactions, or bootstrap a sample dataset
    ///
    /// Uses the thread-local RNG and today's local date for the sample.
    pub fn load(storage: S) -> Result<Self, TrackerError> {
        Self::load_with_rng(storage, Local::now().date_naive(), &mut rand::thread_rng())
    }

    /// Load the persisted transactions, or bootstrap a sample dataset dated
    /// relative to `today` and drawn from `rng`
    pub fn load_with_rng<R: Rng>(
        mut storage: S,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Self, TrackerError> {
        let transactions = match storage.read()? {
            Some(transactions) => {
                tracing::info!(rows = transactions.len(), "loaded transactions");
                transactions
            }
            None => {
                let sample = sample_transactions(today, rng);
                tracing::info!(rows = sample.len(), "no saved data, generated sample dataset");
                storage.write(&sample)?;
                sample
            }
        };

        let mut store = TransactionStore {
            transactions,
            storage,
        };
        store.sort();
        Ok(store)
    }

    /// Record a new transaction and persist the full collection
    ///
    /// The amount's sign is normalized for the category: a positive expense is
    /// negated, a negative income is made positive.
    pub fn add(
        &mut self,
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
    ) -> Result<&Transaction, TrackerError> {
        self.insert(Transaction::new(date, amount, category, description))
    }

    /// Record a new transaction from raw text input
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate`, `InvalidAmount` or `InvalidCategory` when a field
    /// does not parse; the store is left untouched in that case.
    pub fn add_raw(
        &mut self,
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
    ) -> Result<&Transaction, TrackerError> {
        let tx = Transaction::parse(date, amount, category, description)?;
        self.insert(tx)
    }

    /// Persist the full collection, replacing whatever was stored before
    pub fn save(&mut self) -> Result<(), TrackerError> {
        self.storage.write(&self.transactions)?;
        tracing::info!(rows = self.transactions.len(), "saved transactions");
        Ok(())
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Up to `limit` most recent transactions
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Aggregations over the current snapshot
    pub fn aggregations(&self) -> AggregationEngine<'_> {
        AggregationEngine::new(&self.transactions)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn insert(&mut self, tx: Transaction) -> Result<&Transaction, TrackerError> {
        tracing::debug!(
            date = %tx.date(),
            amount = %tx.amount(),
            category = %tx.category(),
            "adding transaction"
        );

        let date = tx.date();
        self.transactions.push(tx);
        self.sort();
        self.save()?;

        // The newly pushed row is the last one on its date after a stable sort
        let index = self
            .transactions
            .iter()
            .rposition(|tx| tx.date() == date)
            .unwrap_or(0);
        Ok(&self.transactions[index])
    }

    fn sort(&mut self) {
        self.transactions.sort_by(|a, b| b.date().cmp(&a.date()));
    }
}
