//! Error types for the finance tracker
//!
//! This module defines all error types that can occur while entering, loading,
//! persisting or aggregating transactions.
//!
//! # Error Categories
//!
//! - **Input Errors**: unparseable dates or amounts, unknown categories
//! - **Aggregation Errors**: views that need at least one transaction, sums
//!   that leave the decimal range
//! - **Storage Errors**: unreadable data file, malformed CSV rows
//!
//! A missing data file is not an error: it triggers the sample dataset bootstrap.

use thiserror::Error;

/// Main error type for the finance tracker
///
/// Each variant carries the offending input or enough context to explain
/// the failure to a user at the shell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// Date string could not be parsed as a calendar date
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        input: String,
    },

    /// Amount string could not be parsed as a decimal number
    #[error("Invalid amount '{input}': expected a number")]
    InvalidAmount {
        /// The rejected input
        input: String,
    },

    /// Category is not one of the fixed category labels
    #[error("Invalid category '{input}'")]
    InvalidCategory {
        /// The rejected input
        input: String,
    },

    /// An aggregation that needs at least one transaction ran on an empty store
    #[error("Cannot compute {operation}: no transactions recorded")]
    EmptyDataset {
        /// The aggregation that was requested
        operation: String,
    },

    /// A sum, difference or ratio left the representable decimal range
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// The aggregation that overflowed
        operation: String,
    },

    /// I/O error occurred while reading or writing the data file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The data file contains a row that cannot be turned into a transaction
    ///
    /// Loading stops at the first malformed row; no partial recovery is attempted.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for TrackerError {
    fn from(error: std::io::Error) -> Self {
        TrackerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TrackerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        TrackerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl TrackerError {
    /// Create an InvalidDate error
    pub fn invalid_date(input: &str) -> Self {
        TrackerError::InvalidDate {
            input: input.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        TrackerError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an InvalidCategory error
    pub fn invalid_category(input: &str) -> Self {
        TrackerError::InvalidCategory {
            input: input.to_string(),
        }
    }

    /// Create an EmptyDataset error
    pub fn empty_dataset(operation: &str) -> Self {
        TrackerError::EmptyDataset {
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        TrackerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a ParseError for a given data file line
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        TrackerError::ParseError {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_date(
        TrackerError::InvalidDate { input: "yesterday".to_string() },
        "Invalid date 'yesterday': expected YYYY-MM-DD"
    )]
    #[case::invalid_amount(
        TrackerError::InvalidAmount { input: "ten".to_string() },
        "Invalid amount 'ten': expected a number"
    )]
    #[case::invalid_category(
        TrackerError::InvalidCategory { input: "Pets".to_string() },
        "Invalid category 'Pets'"
    )]
    #[case::empty_dataset(
        TrackerError::EmptyDataset { operation: "balance history".to_string() },
        "Cannot compute balance history: no transactions recorded"
    )]
    #[case::arithmetic_overflow(
        TrackerError::ArithmeticOverflow { operation: "monthly summary".to_string() },
        "Arithmetic overflow in monthly summary"
    )]
    #[case::io_error(
        TrackerError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        TrackerError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        TrackerError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    fn test_error_display(#[case] error: TrackerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_date(
        TrackerError::invalid_date("2024-13-01"),
        TrackerError::InvalidDate { input: "2024-13-01".to_string() }
    )]
    #[case::invalid_amount(
        TrackerError::invalid_amount("abc"),
        TrackerError::InvalidAmount { input: "abc".to_string() }
    )]
    #[case::invalid_category(
        TrackerError::invalid_category("Pets"),
        TrackerError::InvalidCategory { input: "Pets".to_string() }
    )]
    #[case::empty_dataset(
        TrackerError::empty_dataset("balance history"),
        TrackerError::EmptyDataset { operation: "balance history".to_string() }
    )]
    #[case::arithmetic_overflow(
        TrackerError::arithmetic_overflow("savings rate"),
        TrackerError::ArithmeticOverflow { operation: "savings rate".to_string() }
    )]
    #[case::parse_error(
        TrackerError::parse_error(Some(3), "bad row"),
        TrackerError::ParseError { line: Some(3), message: "bad row".to_string() }
    )]
    fn test_helper_functions(#[case] result: TrackerError, #[case] expected: TrackerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: TrackerError = io_error.into();
        assert!(matches!(error, TrackerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
