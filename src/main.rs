//! Personal Finance Tracker CLI
//!
//! Command-line interface for recording and reviewing personal transactions
//! kept in a CSV data file.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # interactive menu
//! cargo run -- dashboard
//! cargo run -- add 250 Food "Dinner out"
//! cargo run -- add --date 2024-02-01 3000 Income Salary
//! cargo run -- --data-file ~/money.csv --currency '$' summary
//! cargo run -- --recent-limit 20 recent
//! ```
//!
//! When the data file does not exist yet, it is created with a 30-day sample
//! dataset. Reports go to stdout; logs go to stderr (`RUST_LOG` or
//! `--log-level`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unreadable or malformed data file, invalid input, write failure)

use chrono::Local;
use finance_tracker::cli::{self, CliArgs, Command};
use finance_tracker::core::TransactionStore;
use finance_tracker::io::CsvStorage;
use finance_tracker::report::{
    format_currency, render_monthly_summary, render_recent, Dashboard,
};
use finance_tracker::shell::Shell;
use finance_tracker::types::TrackerError;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), TrackerError> {
    let config = args.to_report_config();
    let mut store = TransactionStore::load(CsvStorage::new(&args.data_file))?;

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match args.command() {
        Command::Interactive => {
            let stdin = io::stdin();
            Shell::new(store, config, stdin.lock(), output).run()?;
        }
        Command::Dashboard => {
            Dashboard::current(store.aggregations())?.render(&mut output, &config)?;
        }
        Command::Add {
            date,
            amount,
            category,
            description,
        } => {
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
            let tx = store.add_raw(&date, &amount, &category, &description)?;
            writeln!(
                output,
                "Transaction added: {} {} {}",
                tx.date().format("%Y-%m-%d"),
                tx.category(),
                format_currency(tx.amount(), &config.currency_symbol, 2)
            )?;
        }
        Command::Recent => {
            render_recent(&mut output, store.recent(config.recent_limit), &config)?;
        }
        Command::Summary => {
            let summary = store.aggregations().monthly_summary()?;
            render_monthly_summary(&mut output, &summary, &config)?;
        }
    }

    Ok(())
}
