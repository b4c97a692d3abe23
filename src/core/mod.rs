//! Core business logic module
//!
//! This module contains the core components:
//! - `traits` - Storage abstraction for interchangeable persistence backends
//! - `transaction_store` - The ordered, sign-normalized transaction collection
//! - `aggregation` - Derived views (balance history, monthly summaries, breakdowns)
//! - `sample_data` - Synthetic dataset used to bootstrap an empty install

pub mod aggregation;
pub mod sample_data;
pub mod traits;
pub mod transaction_store;

pub use aggregation::AggregationEngine;
pub use traits::Storage;
pub use transaction_store::TransactionStore;
