//! Derived views computed from a transaction snapshot
//!
//! These are plain keyed numeric structures: no formatting, no currency
//! symbols. They are produced by [`crate::core::AggregationEngine`] and consumed
//! by the report presenter. None of them is ever persisted.

use super::error::TrackerError;
use super::period::YearMonth;
use super::transaction::Category;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Cumulative balance at the end of one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// Running balance, one point per day from the earliest to the latest
/// transaction date inclusive
///
/// Never empty when produced by the aggregation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceHistory {
    points: Vec<BalancePoint>,
}

impl BalanceHistory {
    pub(crate) fn new(points: Vec<BalancePoint>) -> Self {
        BalanceHistory { points }
    }

    pub fn points(&self) -> &[BalancePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&BalancePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&BalancePoint> {
        self.points.last()
    }

    /// Balance after the last day, i.e. the sum of every transaction
    pub fn final_balance(&self) -> Decimal {
        self.last().map(|point| point.balance).unwrap_or_default()
    }

    /// Lowest balance reached over the range
    pub fn min_balance(&self) -> Option<Decimal> {
        self.points.iter().map(|point| point.balance).min()
    }

    /// Highest balance reached over the range
    pub fn max_balance(&self) -> Option<Decimal> {
        self.points.iter().map(|point| point.balance).max()
    }
}

/// Expense magnitude per (month, category)
///
/// Dense over the categories that appear anywhere in the data: every month row
/// has a cell for each of them, zero where the month had no such spending.
/// Categories that never appear have no column at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyCategoryMatrix {
    categories: Vec<Category>,
    rows: BTreeMap<YearMonth, BTreeMap<Category, Decimal>>,
    totals: BTreeMap<YearMonth, Decimal>,
}

impl MonthlyCategoryMatrix {
    pub(crate) fn new(
        categories: Vec<Category>,
        rows: BTreeMap<YearMonth, BTreeMap<Category, Decimal>>,
    ) -> Result<Self, TrackerError> {
        let totals = rows
            .iter()
            .map(|(month, row)| {
                checked_sum(row.values().copied(), "monthly category totals")
                    .map(|total| (*month, total))
            })
            .collect::<Result<_, _>>()?;

        Ok(MonthlyCategoryMatrix {
            categories,
            rows,
            totals,
        })
    }

    /// Column labels, in category order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Months in ascending order
    pub fn months(&self) -> impl Iterator<Item = YearMonth> + '_ {
        self.rows.keys().copied()
    }

    /// `None` when the month or the category column does not exist
    pub fn cell(&self, month: YearMonth, category: Category) -> Option<Decimal> {
        self.rows.get(&month)?.get(&category).copied()
    }

    /// Total spending in one month across all columns
    pub fn month_total(&self, month: YearMonth) -> Decimal {
        self.totals.get(&month).copied().unwrap_or_default()
    }

    /// Number of month rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Income, expenses and savings for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthSummary {
    /// Sum of positive amounts
    pub income: Decimal,
    /// Sum of the magnitudes of negative amounts
    pub expenses: Decimal,
    /// `income - expenses`
    pub savings: Decimal,
    /// `savings / income * 100`, or zero when there was no income
    pub savings_rate: Decimal,
}

impl MonthSummary {
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` when the savings or the rate leave the
    /// decimal range, e.g. a tiny income against huge expenses.
    pub(crate) fn from_totals(income: Decimal, expenses: Decimal) -> Result<Self, TrackerError> {
        let savings = income
            .checked_sub(expenses)
            .ok_or_else(|| TrackerError::arithmetic_overflow("savings"))?;
        let savings_rate = if income.is_zero() {
            Decimal::ZERO
        } else {
            savings
                .checked_div(income)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(|| TrackerError::arithmetic_overflow("savings rate"))?
        };

        Ok(MonthSummary {
            income,
            expenses,
            savings,
            savings_rate,
        })
    }
}

/// Per-month income vs expenses, ascending by month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    months: BTreeMap<YearMonth, MonthSummary>,
}

impl MonthlySummary {
    pub(crate) fn new(months: BTreeMap<YearMonth, MonthSummary>) -> Self {
        MonthlySummary { months }
    }

    pub fn get(&self, month: YearMonth) -> Option<&MonthSummary> {
        self.months.get(&month)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (YearMonth, &MonthSummary)> + '_ {
        self.months.iter().map(|(month, summary)| (*month, summary))
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Expense magnitude per category for a single month
///
/// Sparse: categories with no spending in the month are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentMonthBreakdown {
    month: YearMonth,
    totals: BTreeMap<Category, Decimal>,
    total: Decimal,
}

impl CurrentMonthBreakdown {
    pub(crate) fn new(
        month: YearMonth,
        totals: BTreeMap<Category, Decimal>,
    ) -> Result<Self, TrackerError> {
        let total = checked_sum(totals.values().copied(), "month breakdown")?;
        Ok(CurrentMonthBreakdown {
            month,
            totals,
            total,
        })
    }

    /// The month this breakdown covers
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn get(&self, category: Category) -> Option<Decimal> {
        self.totals.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.totals.iter().map(|(category, total)| (*category, *total))
    }

    /// Total spending across all categories
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Share of the month's spending for one category, as a percentage
    pub fn share(&self, category: Category) -> Decimal {
        // Every amount is a non-negative part of the total, so the ratio is at most one
        match self.get(category) {
            Some(amount) if !self.total.is_zero() => amount / self.total * Decimal::ONE_HUNDRED,
            _ => Decimal::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Sum that reports `ArithmeticOverflow` for `operation` instead of panicking
pub(crate) fn checked_sum(
    values: impl IntoIterator<Item = Decimal>,
    operation: &str,
) -> Result<Decimal, TrackerError> {
    values.into_iter().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value)
            .ok_or_else(|| TrackerError::arithmetic_overflow(operation))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::positive_savings(1000, 400, 600, 60)]
    #[case::negative_savings(100, 300, -200, -200)]
    #[case::no_income(0, 300, -300, 0)]
    #[case::no_activity(0, 0, 0, 0)]
    #[case::no_expenses(500, 0, 500, 100)]
    fn test_month_summary_from_totals(
        #[case] income: i64,
        #[case] expenses: i64,
        #[case] savings: i64,
        #[case] rate: i64,
    ) {
        let summary =
            MonthSummary::from_totals(Decimal::from(income), Decimal::from(expenses)).unwrap();
        assert_eq!(summary.income, Decimal::from(income));
        assert_eq!(summary.expenses, Decimal::from(expenses));
        assert_eq!(summary.savings, Decimal::from(savings));
        assert_eq!(summary.savings_rate, Decimal::from(rate));
    }

    #[test]
    fn test_balance_history_accessors() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let history = BalanceHistory::new(vec![
            BalancePoint { date: day(1), balance: Decimal::from(-50) },
            BalancePoint { date: day(2), balance: Decimal::from(950) },
            BalancePoint { date: day(3), balance: Decimal::from(900) },
        ]);

        assert_eq!(history.len(), 3);
        assert_eq!(history.final_balance(), Decimal::from(900));
        assert_eq!(history.min_balance(), Some(Decimal::from(-50)));
        assert_eq!(history.max_balance(), Some(Decimal::from(950)));
        assert_eq!(history.first().map(|p| p.date), Some(day(1)));
    }

    #[test]
    fn test_breakdown_share() {
        let month = YearMonth::new(2024, 5).unwrap();
        let breakdown = CurrentMonthBreakdown::new(
            month,
            BTreeMap::from([
                (Category::Food, Decimal::from(75)),
                (Category::Housing, Decimal::from(25)),
            ]),
        )
        .unwrap();

        assert_eq!(breakdown.total(), Decimal::from(100));
        assert_eq!(breakdown.share(Category::Food), Decimal::from(75));
        assert_eq!(breakdown.share(Category::Health), Decimal::ZERO);
    }

    #[rstest]
    #[case::tiny_income(Decimal::new(1, 4), Decimal::from_i128_with_scale(10_i128.pow(25), 0))]
    #[case::max_expenses(Decimal::ONE, Decimal::MAX)]
    fn test_month_summary_from_totals_overflow(#[case] income: Decimal, #[case] expenses: Decimal) {
        assert_eq!(
            MonthSummary::from_totals(income, expenses),
            Err(TrackerError::arithmetic_overflow("savings rate"))
        );
    }

    #[test]
    fn test_breakdown_total_overflow() {
        let month = YearMonth::new(2024, 5).unwrap();
        let result = CurrentMonthBreakdown::new(
            month,
            BTreeMap::from([
                (Category::Food, Decimal::MAX),
                (Category::Housing, Decimal::ONE),
            ]),
        );

        assert_eq!(result, Err(TrackerError::arithmetic_overflow("month breakdown")));
    }

    #[test]
    fn test_category_matrix_month_total() {
        let month = YearMonth::new(2024, 5).unwrap();
        let row = BTreeMap::from([
            (Category::Food, Decimal::from(40)),
            (Category::Health, Decimal::from(2)),
        ]);
        let matrix = MonthlyCategoryMatrix::new(
            vec![Category::Food, Category::Health],
            BTreeMap::from([(month, row)]),
        )
        .unwrap();
        assert_eq!(matrix.month_total(month), Decimal::from(42));

        let overflowing = BTreeMap::from([
            (Category::Food, Decimal::MAX),
            (Category::Health, Decimal::MAX),
        ]);
        assert_eq!(
            MonthlyCategoryMatrix::new(
                vec![Category::Food, Category::Health],
                BTreeMap::from([(month, overflowing)]),
            ),
            Err(TrackerError::arithmetic_overflow("monthly category totals"))
        );
    }
}
