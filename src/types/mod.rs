//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transactions, categories and input parsers
//! - `period`: The year+month key used for monthly bucketing
//! - `views`: Derived aggregate views
//! - `error`: Error types for the finance tracker

pub mod error;
pub mod period;
pub mod transaction;
pub mod views;

pub use error::TrackerError;
pub use period::YearMonth;
pub use transaction::{parse_amount, parse_date, Category, Transaction};
pub use views::{
    BalanceHistory, BalancePoint, CurrentMonthBreakdown, MonthSummary, MonthlyCategoryMatrix,
    MonthlySummary,
};
