//! I/O module
//!
//! Handles the CSV data file and the storage backends.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, serialization)
//! - `csv_reader` - CSV reader with iterator interface
//! - `csv_storage` - File-backed [`Storage`](crate::core::Storage)
//! - `memory_storage` - In-memory [`Storage`](crate::core::Storage)

pub mod csv_format;
pub mod csv_reader;
pub mod csv_storage;
pub mod memory_storage;

pub use csv_format::{convert_csv_record, write_transactions_csv, CsvRecord};
pub use csv_reader::CsvReader;
pub use csv_storage::{CsvStorage, DEFAULT_DATA_FILE};
pub use memory_storage::MemoryStorage;
