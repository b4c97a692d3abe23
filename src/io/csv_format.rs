//! CSV format handling for the transaction data file
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for (de)serialization
//! - Conversion between CSV records and domain transactions
//! - Transaction collection serialization
//!
//! All functions are pure (no file I/O) for easy testing.
//!
//! # File Format
//!
//! ```text
//! Date,Amount,Category,Description
//! 2024-01-02,1000,Income,Salary
//! 2024-01-01,-50,Food,Groceries
//! ```

use crate::types::{TrackerError, Transaction};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Column names, in file order
pub const HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// One row of the data file
///
/// All fields are kept as text so that parse failures can be reported with
/// the offending input rather than a generic serde message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl From<&Transaction> for CsvRecord {
    fn from(tx: &Transaction) -> Self {
        CsvRecord {
            date: tx.date().format("%Y-%m-%d").to_string(),
            amount: tx.amount().to_string(),
            category: tx.category().to_string(),
            description: tx.description().to_string(),
        }
    }
}

/// Convert a CsvRecord to a Transaction
///
/// Parses every field and applies the sign convention, so rows that were
/// stored with the wrong sign come back normalized.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Transaction, TrackerError> {
    Transaction::parse(
        &csv_record.date,
        &csv_record.amount,
        &csv_record.category,
        &csv_record.description,
    )
}

/// Write transactions in data file format
///
/// The header is always written, even for an empty collection. Rows are
/// written in the order given.
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), TrackerError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(HEADER)?;

    for tx in transactions {
        writer.serialize(CsvRecord::from(tx))?;
    }

    writer.flush()?;

    Ok(())
}
