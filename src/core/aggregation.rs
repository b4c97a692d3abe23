//! Aggregation engine
//!
//! Pure, stateless transforms from a transaction snapshot to the derived views
//! the reports are drawn from. Nothing here mutates or caches: every call
//! recomputes from the slice it was given.
//!
//! # Rules
//!
//! - Expenses are transactions with a negative amount; their magnitude is used.
//! - Income is the sum of positive amounts.
//! - Monthly views are keyed by [`YearMonth`] and ordered month ascending.
//! - The balance history fills days without transactions with a zero delta.
//! - The savings rate is zero whenever the month had no income.
//! - Sums are checked: leaving the decimal range is an `ArithmeticOverflow`
//!   error, never a panic.

use crate::types::{
    BalanceHistory, BalancePoint, Category, CurrentMonthBreakdown, MonthSummary,
    MonthlyCategoryMatrix, MonthlySummary, TrackerError, Transaction, YearMonth,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregation engine over a borrowed transaction snapshot
#[derive(Debug, Clone, Copy)]
pub struct AggregationEngine<'a> {
    transactions: &'a [Transaction],
}

impl<'a> AggregationEngine<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        AggregationEngine { transactions }
    }

    /// Running balance over every calendar day from the earliest to the latest
    /// transaction date inclusive
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` when there are no transactions and
    /// `ArithmeticOverflow` when a running total leaves the decimal range.
    pub fn balance_history(&self) -> Result<BalanceHistory, TrackerError> {
        const OPERATION: &str = "balance history";

        let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for tx in self.transactions {
            accumulate(daily.entry(tx.date()).or_default(), tx.amount(), OPERATION)?;
        }

        let (Some(&start), Some(&end)) = (daily.keys().next(), daily.keys().next_back()) else {
            return Err(TrackerError::empty_dataset(OPERATION));
        };

        let mut balance = Decimal::ZERO;
        let points = start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| -> Result<BalancePoint, TrackerError> {
                let delta = daily.get(&date).copied().unwrap_or_default();
                accumulate(&mut balance, delta, OPERATION)?;
                Ok(BalancePoint { date, balance })
            })
            .collect::<Result<Vec<_>, TrackerError>>()?;

        tracing::debug!(days = points.len(), %start, %end, "computed balance history");
        Ok(BalanceHistory::new(points))
    }

    /// Expense magnitude per (month, category)
    ///
    /// Every month that has any spending gets a cell for every category that
    /// has spending in any month, zero-filled where absent.
    pub fn monthly_category_matrix(&self) -> Result<MonthlyCategoryMatrix, TrackerError> {
        let mut sparse: BTreeMap<YearMonth, BTreeMap<Category, Decimal>> = BTreeMap::new();
        let mut categories: BTreeSet<Category> = BTreeSet::new();

        for tx in self.expenses() {
            categories.insert(tx.category());
            let cell = sparse
                .entry(YearMonth::from_date(tx.date()))
                .or_default()
                .entry(tx.category())
                .or_default();
            accumulate(cell, tx.amount().abs(), "monthly category matrix")?;
        }

        let rows = sparse
            .into_iter()
            .map(|(month, mut row)| {
                for category in &categories {
                    row.entry(*category).or_insert(Decimal::ZERO);
                }
                (month, row)
            })
            .collect();

        MonthlyCategoryMatrix::new(categories.into_iter().collect(), rows)
    }

    /// Income, expenses, savings and savings rate per month
    ///
    /// Every month with at least one transaction appears; a month with only
    /// income or only expenses has zero on the other side.
    pub fn monthly_summary(&self) -> Result<MonthlySummary, TrackerError> {
        const OPERATION: &str = "monthly summary";

        let mut totals: BTreeMap<YearMonth, (Decimal, Decimal)> = BTreeMap::new();

        for tx in self.transactions {
            let (income, expenses) = totals.entry(YearMonth::from_date(tx.date())).or_default();
            if tx.is_expense() {
                accumulate(expenses, tx.amount().abs(), OPERATION)?;
            } else if tx.amount() > Decimal::ZERO {
                accumulate(income, tx.amount(), OPERATION)?;
            }
        }

        let months = totals
            .into_iter()
            .map(|(month, (income, expenses))| {
                MonthSummary::from_totals(income, expenses).map(|summary| (month, summary))
            })
            .collect::<Result<_, _>>()?;

        Ok(MonthlySummary::new(months))
    }

    /// Spending per category for the local wall-clock month at call time
    pub fn current_month_breakdown(&self) -> Result<CurrentMonthBreakdown, TrackerError> {
        self.month_breakdown(YearMonth::current())
    }

    /// Spending per category for `month`
    ///
    /// Categories with no spending in the month are absent from the result.
    pub fn month_breakdown(&self, month: YearMonth) -> Result<CurrentMonthBreakdown, TrackerError> {
        let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();

        for tx in self.expenses().filter(|tx| month.contains(tx.date())) {
            let total = totals.entry(tx.category()).or_default();
            accumulate(total, tx.amount().abs(), "month breakdown")?;
        }

        CurrentMonthBreakdown::new(month, totals)
    }

    fn expenses(&self) -> impl Iterator<Item = &'a Transaction> + 'a {
        let transactions: &'a [Transaction] = self.transactions;
        transactions.iter().filter(|tx| tx.is_expense())
    }
}

fn accumulate(total: &mut Decimal, amount: Decimal, operation: &str) -> Result<(), TrackerError> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| TrackerError::arithmetic_overflow(operation))?;
    Ok(())
}
