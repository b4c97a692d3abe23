//! Interactive shell
//!
//! A numbered text menu over the transaction store: view the dashboard, add a
//! transaction, list recent transactions, show the monthly summary, exit.

mod menu;

pub use menu::Shell;
