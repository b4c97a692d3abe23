//! Recent transactions and monthly summary tables

use crate::report::config::ReportConfig;
use crate::report::format::{format_currency, format_percent, write_table, Align};
use crate::types::{MonthlySummary, TrackerError, Transaction};
use std::io::Write;

/// Render up to `config.recent_limit` transactions in the order given
pub fn render_recent(
    output: &mut dyn Write,
    transactions: &[Transaction],
    config: &ReportConfig,
) -> Result<(), TrackerError> {
    writeln!(output, "--- Recent Transactions ---")?;

    if transactions.is_empty() {
        writeln!(output, "No transactions recorded.")?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = transactions
        .iter()
        .take(config.recent_limit)
        .map(|tx| {
            vec![
                tx.date().format("%Y-%m-%d").to_string(),
                tx.category().to_string(),
                format_currency(tx.amount(), &config.currency_symbol, 2),
                tx.description().to_string(),
            ]
        })
        .collect();

    write_table(
        output,
        &["Date", "Category", "Amount", "Description"],
        &[Align::Left, Align::Left, Align::Right, Align::Left],
        &rows,
    )?;
    Ok(())
}

/// Render income, expenses, savings and savings rate for every month
pub fn render_monthly_summary(
    output: &mut dyn Write,
    summary: &MonthlySummary,
    config: &ReportConfig,
) -> Result<(), TrackerError> {
    writeln!(output, "--- Monthly Summary ---")?;

    if summary.is_empty() {
        writeln!(output, "No data available for monthly summary.")?;
        return Ok(());
    }

    let symbol = config.currency_symbol.as_str();
    let rows: Vec<Vec<String>> = summary
        .iter()
        .map(|(month, totals)| {
            vec![
                month.to_string(),
                format_currency(totals.income, symbol, 2),
                format_currency(totals.expenses, symbol, 2),
                format_currency(totals.savings, symbol, 2),
                format_percent(totals.savings_rate),
            ]
        })
        .collect();

    write_table(
        output,
        &["Month", "Income", "Expenses", "Savings", "Savings Rate"],
        &[Align::Left, Align::Right, Align::Right, Align::Right, Align::Right],
        &rows,
    )?;
    Ok(())
}
