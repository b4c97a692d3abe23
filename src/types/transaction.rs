//! Transaction-related types for the finance tracker
//!
//! This module defines the fixed category set, the transaction record and the
//! parsers that turn user or file input into those types.

use super::error::TrackerError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Transaction categories
///
/// A closed set: anything else is rejected with
/// [`TrackerError::InvalidCategory`]. `Income` is the only category whose
/// amounts are recorded as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Entertainment,
    Utilities,
    Shopping,
    Health,
    Education,
    Income,
    Other,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Entertainment,
        Category::Utilities,
        Category::Shopping,
        Category::Health,
        Category::Education,
        Category::Income,
        Category::Other,
    ];

    /// The label used in the data file and at the shell
    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }

    pub fn is_income(self) -> bool {
        self == Category::Income
    }

    /// Apply the sign convention to an amount
    ///
    /// Income is recorded as the magnitude, every other category as the
    /// negated magnitude. Whatever sign the caller supplied is overridden, and
    /// applying the convention twice gives the same result as applying it once.
    pub fn normalize_amount(self, amount: Decimal) -> Decimal {
        if amount.is_zero() {
            return Decimal::ZERO;
        }
        if self.is_income() {
            amount.abs()
        } else {
            -amount.abs()
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    /// Parse a category label, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TrackerError::invalid_category(s))
    }
}

/// A single dated, signed, categorized monetary record
///
/// Transactions are immutable once created. The constructor applies the sign
/// convention, so every `Transaction` in the system satisfies it regardless of
/// whether it came from the shell or from the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: NaiveDate,
    amount: Decimal,
    category: Category,
    description: String,
}

impl Transaction {
    /// Create a transaction, normalizing the amount's sign for its category
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Transaction {
            date,
            amount: category.normalize_amount(amount),
            category,
            description: description.into(),
        }
    }

    /// Parse a transaction from raw text fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate`, `InvalidAmount` or `InvalidCategory` for the first
    /// field that cannot be parsed, checked in that order.
    pub fn parse(
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
    ) -> Result<Self, TrackerError> {
        let date = parse_date(date)?;
        let amount = parse_amount(amount)?;
        let category = category.parse::<Category>()?;
        Ok(Transaction::new(date, amount, category, description))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Signed amount: positive for income, non-positive for everything else
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this transaction counts as spending in the aggregate views
    pub fn is_expense(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse an ISO calendar date
///
/// Accepts `YYYY-MM-DD` as well as ISO date-times (space or `T` separated,
/// optional fractional seconds, RFC 3339 offsets). Any time of day is dropped.
pub fn parse_date(input: &str) -> Result<NaiveDate, TrackerError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(date_time.date());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|date_time| date_time.date_naive())
        .map_err(|_| TrackerError::invalid_date(input))
}

/// Parse a decimal amount, allowing scientific notation
pub fn parse_amount(input: &str) -> Result<Decimal, TrackerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid_amount(input));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| TrackerError::invalid_amount(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::expense_positive_input(Category::Food, Decimal::new(200, 0), Decimal::new(-200, 0))]
    #[case::expense_negative_input(Category::Food, Decimal::new(-200, 0), Decimal::new(-200, 0))]
    #[case::income_negative_input(Category::Income, Decimal::new(-1000, 0), Decimal::new(1000, 0))]
    #[case::income_positive_input(Category::Income, Decimal::new(1000, 0), Decimal::new(1000, 0))]
    #[case::other_fractional(Category::Other, Decimal::new(1234, 2), Decimal::new(-1234, 2))]
    #[case::zero(Category::Housing, Decimal::ZERO, Decimal::ZERO)]
    fn test_normalize_amount(
        #[case] category: Category,
        #[case] input: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(category.normalize_amount(input), expected);
    }

    #[test]
    fn test_normalize_amount_is_idempotent() {
        for category in Category::ALL {
            for raw in [-75i64, 0, 42] {
                let once = category.normalize_amount(Decimal::from(raw));
                assert_eq!(category.normalize_amount(once), once);
            }
        }
    }

    #[test]
    fn test_normalized_zero_is_not_negative() {
        let amount = Category::Food.normalize_amount(Decimal::ZERO);
        assert_eq!(amount.to_string(), "0");
    }

    #[rstest]
    #[case("Food", Category::Food)]
    #[case("income", Category::Income)]
    #[case("  Transportation ", Category::Transportation)]
    #[case("OTHER", Category::Other)]
    fn test_category_parsing(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>().unwrap(), expected);
    }

    #[rstest]
    #[case("Pets")]
    #[case("")]
    #[case("Food,Income")]
    fn test_category_parsing_rejects_unknown(#[case] input: &str) {
        assert_eq!(
            input.parse::<Category>(),
            Err(TrackerError::invalid_category(input))
        );
    }

    #[test]
    fn test_category_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[rstest]
    #[case::plain("2024-01-15", date(2024, 1, 15))]
    #[case::padded("  2024-01-15  ", date(2024, 1, 15))]
    #[case::date_time("2024-03-05 14:30:00", date(2024, 3, 5))]
    #[case::fractional_seconds("2024-03-05 14:30:00.123456", date(2024, 3, 5))]
    #[case::t_separator("2024-03-05T23:59:59", date(2024, 3, 5))]
    #[case::rfc3339("2024-03-05T10:00:00+02:00", date(2024, 3, 5))]
    fn test_parse_date(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_date(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("tomorrow")]
    #[case("2024-02-30")]
    #[case("15/01/2024")]
    fn test_parse_date_errors(#[case] input: &str) {
        assert_eq!(parse_date(input), Err(TrackerError::invalid_date(input)));
    }

    #[rstest]
    #[case("100", Decimal::new(100, 0))]
    #[case("-50.25", Decimal::new(-5025, 2))]
    #[case("  12.5 ", Decimal::new(125, 1))]
    #[case("1e3", Decimal::new(1000, 0))]
    fn test_parse_amount(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("ten")]
    #[case("12,50")]
    fn test_parse_amount_errors(#[case] input: &str) {
        assert_eq!(parse_amount(input), Err(TrackerError::invalid_amount(input)));
    }

    #[test]
    fn test_transaction_new_applies_sign_convention() {
        let tx = Transaction::new(
            date(2024, 2, 1),
            Decimal::new(200, 0),
            Category::Food,
            "dinner",
        );
        assert_eq!(tx.amount(), Decimal::new(-200, 0));
        assert!(tx.is_expense());

        let salary = Transaction::new(
            date(2024, 2, 1),
            Decimal::new(-900, 0),
            Category::Income,
            "salary",
        );
        assert_eq!(salary.amount(), Decimal::new(900, 0));
        assert!(!salary.is_expense());
    }

    #[test]
    fn test_transaction_parse() {
        let tx = Transaction::parse("2024-02-01", "200", "Food", "dinner").unwrap();
        assert_eq!(tx.date(), date(2024, 2, 1));
        assert_eq!(tx.amount(), Decimal::new(-200, 0));
        assert_eq!(tx.category(), Category::Food);
        assert_eq!(tx.description(), "dinner");
    }

    #[rstest]
    #[case::bad_date("02/01/2024", "200", "Food", TrackerError::invalid_date("02/01/2024"))]
    #[case::bad_amount("2024-02-01", "lots", "Food", TrackerError::invalid_amount("lots"))]
    #[case::bad_category("2024-02-01", "200", "Pets", TrackerError::invalid_category("Pets"))]
    fn test_transaction_parse_errors(
        #[case] date_str: &str,
        #[case] amount: &str,
        #[case] category: &str,
        #[case] expected: TrackerError,
    ) {
        assert_eq!(
            Transaction::parse(date_str, amount, category, "x"),
            Err(expected)
        );
    }
}
