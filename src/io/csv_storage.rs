//! File-backed transaction storage
//!
//! The whole collection lives in one CSV file that is read once at startup and
//! rewritten wholesale on every save.

use crate::core::traits::Storage;
use crate::io::csv_format::write_transactions_csv;
use crate::io::csv_reader::CsvReader;
use crate::types::{TrackerError, Transaction};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "finance_data.csv";

/// Storage backed by a single CSV data file
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CsvStorage {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl Storage for CsvStorage {
    /// Read every row of the data file
    ///
    /// A missing file yields `Ok(None)`. Any other open failure or any
    /// malformed row fails the whole read.
    fn read(&self) -> Result<Option<Vec<Transaction>>, TrackerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "data file not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(TrackerError::IoError {
                    message: format!("Failed to open file '{}': {}", self.path.display(), e),
                })
            }
        };

        let transactions = CsvReader::from_reader(file)?.collect::<Result<Vec<_>, _>>()?;
        Ok(Some(transactions))
    }

    fn write(&mut self, transactions: &[Transaction]) -> Result<(), TrackerError> {
        let file = File::create(&self.path).map_err(|e| TrackerError::IoError {
            message: format!("Failed to create file '{}': {}", self.path.display(), e),
        })?;

        let mut output = BufWriter::new(file);
        write_transactions_csv(transactions, &mut output)?;
        output.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            rows = transactions.len(),
            "wrote data file"
        );
        Ok(())
    }
}
