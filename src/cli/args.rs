use crate::io::DEFAULT_DATA_FILE;
use crate::report::ReportConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Track personal income and expenses in a CSV file
#[derive(Parser, Debug)]
#[command(name = "finance-tracker")]
#[command(about = "Track personal income and expenses in a CSV file", long_about = None)]
pub struct CliArgs {
    /// CSV file holding the transactions
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the transactions CSV file (created with sample data if missing)"
    )]
    pub data_file: PathBuf,

    /// Number of rows in the recent transactions listing
    #[arg(
        long = "recent-limit",
        value_name = "N",
        help = "Number of recent transactions to show (default: 10)"
    )]
    pub recent_limit: Option<usize>,

    /// Number of trailing months in the dashboard charts
    #[arg(
        long = "chart-months",
        value_name = "N",
        help = "Number of months shown in dashboard charts (default: 6)"
    )]
    pub chart_months: Option<usize>,

    /// Currency symbol prefixed to amounts
    #[arg(long = "currency", value_name = "SYMBOL", default_value = "₹")]
    pub currency: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// What to do once the data file is loaded
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive menu (default)
    Interactive,
    /// Print the dashboard and exit
    Dashboard,
    /// Record one transaction and exit
    Add {
        /// Transaction date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Amount; the sign is set from the category
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// One of the fixed categories, case-insensitive
        category: String,
        /// Free text description
        #[arg(default_value = "")]
        description: String,
    },
    /// Print the most recent transactions and exit
    Recent,
    /// Print the monthly summary table and exit
    Summary,
}

impl CliArgs {
    /// Create a ReportConfig from CLI arguments
    ///
    /// Options that were not given take their default values. Zero values are
    /// replaced by the defaults with a warning (see [`ReportConfig::new`]).
    pub fn to_report_config(&self) -> ReportConfig {
        let default = ReportConfig::default();
        ReportConfig::new(
            self.recent_limit.unwrap_or(default.recent_limit),
            self.chart_months.unwrap_or(default.chart_months),
            self.currency.clone(),
        )
    }

    /// The command to run, defaulting to the interactive menu
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
