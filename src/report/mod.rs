//! Text report presenter
//!
//! Turns the aggregation views into plain text for a terminal.
//!
//! # Components
//!
//! - `config` - Presentation settings ([`ReportConfig`])
//! - `format` - Currency and percentage formatting, bars, sparklines, tables
//! - `dashboard` - The multi-section dashboard
//! - `tables` - Recent transactions and monthly summary tables

pub mod config;
pub mod dashboard;
pub mod format;
pub mod tables;

pub use config::ReportConfig;
pub use dashboard::Dashboard;
pub use format::{format_currency, format_percent};
pub use tables::{render_monthly_summary, render_recent};
