//! Personal Finance Tracker Library
//! # Overview
//!
//! This library records dated, categorized income and expense transactions in a
//! CSV file and derives reporting views from them: a daily running balance,
//! monthly spending per category, monthly income vs expenses with savings rate,
//! and the current month's spending breakdown.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Category, YearMonth, views, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::transaction_store`] - Ordered, sign-normalized transaction collection
//!   - [`core::aggregation`] - Pure computations of the derived views
//!   - [`core::sample_data`] - Synthetic dataset for a first run
//! - [`io`] - CSV data file handling and storage backends
//! - [`report`] - Text rendering of the views
//! - [`shell`] - Interactive numbered menu
//!
//! # Sign Convention
//!
//! Income amounts are stored positive; every other category is stored
//! non-positive. The sign is enforced whenever a transaction is constructed,
//! regardless of the sign the user typed or the file contained.
//!
//! # Categories
//!
//! Food, Transportation, Housing, Entertainment, Utilities, Shopping, Health,
//! Education, Income, Other. Anything else is rejected.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod shell;
pub mod types;

pub use core::{AggregationEngine, Storage, TransactionStore};
pub use io::{write_transactions_csv, CsvStorage};
pub use types::{Category, TrackerError, Transaction, YearMonth};
