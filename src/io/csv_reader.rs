//! CSV reader with iterator interface
//!
//! Provides an iterator over the transactions stored in a data file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use finance_tracker::io::CsvReader;
//! use std::path::Path;
//!
//! let reader = CsvReader::open(Path::new("finance_data.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(tx) => println!("{} {}", tx.date(), tx.amount()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Unreadable files and header mismatches are returned from the constructor
//! - Individual row errors are yielded as `Err` items carrying the line number

use crate::io::csv_format::{convert_csv_record, CsvRecord, HEADER};
use crate::types::{TrackerError, Transaction};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Streaming reader over data file rows
#[derive(Debug)]
pub struct CsvReader<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
}

impl CsvReader<File> {
    /// Open a data file for reading
    pub fn open(path: &Path) -> Result<Self, TrackerError> {
        let file = File::open(path).map_err(|e| TrackerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read> CsvReader<R> {
    /// Wrap any reader producing data file contents
    ///
    /// The header must be exactly `Date,Amount,Category,Description` after
    /// trimming. Data fields are read verbatim: the date, amount and category
    /// parsers trim their own input, descriptions keep their whitespace.
    pub fn from_reader(input: R) -> Result<Self, TrackerError> {
        let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(input);

        let headers = reader.headers()?.clone();
        if headers.iter().ne(HEADER) {
            return Err(TrackerError::parse_error(
                Some(1),
                format!(
                    "expected header '{}', found '{}'",
                    HEADER.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        Ok(Self { reader, headers })
    }
}

impl<R: Read> Iterator for CsvReader<R> {
    type Item = Result<Transaction, TrackerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
            Ok(true) => {
                let line = record.position().map(|pos| pos.line());
                Some(
                    record
                        .deserialize::<CsvRecord>(Some(&self.headers))
                        .map_err(TrackerError::from)
                        .and_then(convert_csv_record)
                        .map_err(|e| match e {
                            TrackerError::ParseError { .. } => e,
                            other => TrackerError::parse_error(line, other.to_string()),
                        }),
                )
            }
        }
    }
}
