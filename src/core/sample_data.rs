//! Synthetic bootstrap dataset
//!
//! Used only when no data file exists yet, so a fresh install has something to
//! show on the dashboard.

use crate::types::{Category, Transaction};
use chrono::{Days, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

/// Number of days (and rows) in the sample dataset
pub const SAMPLE_DAYS: u64 = 30;

/// Generate one transaction per day for the [`SAMPLE_DAYS`] days before `today`
///
/// Amounts are whole numbers drawn from `[-100, 100)` and categories are
/// uniform over the fixed set. The sign convention is applied on construction,
/// so the raw sign of the draw only matters for its magnitude.
pub fn sample_transactions<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<Transaction> {
    (1..=SAMPLE_DAYS)
        .rev()
        .enumerate()
        .filter_map(|(index, days_back)| {
            let date = today.checked_sub_days(Days::new(days_back))?;
            let amount = Decimal::from(rng.gen_range(-100i64..100));
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            Some(Transaction::new(
                date,
                amount,
                category,
                format!("Sample Transaction {}", index + 1),
            ))
        })
        .collect()
}
