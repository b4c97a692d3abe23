//! Text dashboard
//!
//! Collects every aggregation view once, then renders them as five sections:
//! balance over time, monthly spending by category, income vs expenses, the
//! selected month's spending breakdown and the monthly savings rate.

use crate::core::AggregationEngine;
use crate::report::config::ReportConfig;
use crate::report::format::{bar, format_currency, format_percent, sparkline, write_table, Align};
use crate::types::{
    BalanceHistory, CurrentMonthBreakdown, MonthlyCategoryMatrix, MonthlySummary, TrackerError,
    YearMonth,
};
use rust_decimal::Decimal;
use std::io::Write;

const SPARKLINE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;
const GOOD_SAVINGS_RATE: Decimal = Decimal::TEN;
const EXCELLENT_SAVINGS_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

const NO_DATA: &str = "No data available";

/// Snapshot of every view the dashboard shows
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// `None` when there are no transactions at all
    balance: Option<BalanceHistory>,
    matrix: MonthlyCategoryMatrix,
    summary: MonthlySummary,
    breakdown: CurrentMonthBreakdown,
}

impl Dashboard {
    /// Compute the views, using `month` for the spending breakdown section
    pub fn build(engine: AggregationEngine<'_>, month: YearMonth) -> Result<Self, TrackerError> {
        let balance = match engine.balance_history() {
            Ok(history) => Some(history),
            Err(TrackerError::EmptyDataset { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(Dashboard {
            balance,
            matrix: engine.monthly_category_matrix()?,
            summary: engine.monthly_summary()?,
            breakdown: engine.month_breakdown(month)?,
        })
    }

    /// Compute the views for the current calendar month
    pub fn current(engine: AggregationEngine<'_>) -> Result<Self, TrackerError> {
        Self::build(engine, YearMonth::current())
    }

    pub fn render(&self, output: &mut dyn Write, config: &ReportConfig) -> Result<(), TrackerError> {
        writeln!(output, "===== Personal Finance Dashboard =====")?;
        writeln!(output)?;
        self.render_balance(output, config)?;
        writeln!(output)?;
        self.render_category_spending(output, config)?;
        writeln!(output)?;
        self.render_income_vs_expenses(output, config)?;
        writeln!(output)?;
        self.render_breakdown(output, config)?;
        writeln!(output)?;
        self.render_savings_rate(output, config)?;
        Ok(())
    }

    fn render_balance(&self, output: &mut dyn Write, config: &ReportConfig) -> Result<(), TrackerError> {
        writeln!(output, "--- Balance Over Time ---")?;

        let history = match &self.balance {
            Some(history) => history,
            None => {
                writeln!(output, "{NO_DATA}")?;
                return Ok(());
            }
        };
        let (Some(first), Some(last)) = (history.first(), history.last()) else {
            writeln!(output, "{NO_DATA}")?;
            return Ok(());
        };

        let symbol = config.currency_symbol.as_str();
        writeln!(
            output,
            "{} to {} ({} days)",
            first.date.format("%Y-%m-%d"),
            last.date.format("%Y-%m-%d"),
            history.len()
        )?;
        writeln!(
            output,
            "Start: {}  End: {}  Low: {}  High: {}",
            format_currency(first.balance, symbol, 2),
            format_currency(last.balance, symbol, 2),
            format_currency(history.min_balance().unwrap_or_default(), symbol, 2),
            format_currency(history.max_balance().unwrap_or_default(), symbol, 2),
        )?;

        let balances: Vec<Decimal> = history.points().iter().map(|point| point.balance).collect();
        writeln!(output, "{}", sparkline(&balances, SPARKLINE_WIDTH))?;
        Ok(())
    }

    fn render_category_spending(
        &self,
        output: &mut dyn Write,
        config: &ReportConfig,
    ) -> Result<(), TrackerError> {
        writeln!(
            output,
            "--- Monthly Spending by Category (last {} months) ---",
            config.chart_months
        )?;

        if self.matrix.is_empty() {
            writeln!(output, "{NO_DATA}")?;
            return Ok(());
        }

        let categories = self.matrix.categories();
        let mut headers = vec!["Month"];
        headers.extend(categories.iter().map(|category| category.name()));
        headers.push("Total");

        let mut align = vec![Align::Left];
        align.extend(std::iter::repeat(Align::Right).take(categories.len() + 1));

        let months: Vec<YearMonth> = self.matrix.months().collect();
        let symbol = config.currency_symbol.as_str();
        let rows: Vec<Vec<String>> = trailing(&months, config.chart_months)
            .iter()
            .map(|&month| {
                let mut row = vec![month.to_string()];
                row.extend(categories.iter().map(|&category| {
                    let amount = self.matrix.cell(month, category).unwrap_or_default();
                    format_currency(amount, symbol, 0)
                }));
                row.push(format_currency(self.matrix.month_total(month), symbol, 0));
                row
            })
            .collect();

        write_table(output, &headers, &align, &rows)?;
        Ok(())
    }

    fn render_income_vs_expenses(
        &self,
        output: &mut dyn Write,
        config: &ReportConfig,
    ) -> Result<(), TrackerError> {
        writeln!(output, "--- Income vs Expenses ---")?;

        if self.summary.is_empty() {
            writeln!(output, "{NO_DATA}")?;
            return Ok(());
        }

        let months: Vec<_> = self.summary.iter().collect();
        let shown = trailing(&months, config.chart_months);
        let max = shown
            .iter()
            .flat_map(|(_, summary)| [summary.income, summary.expenses])
            .max()
            .unwrap_or_default();

        let symbol = config.currency_symbol.as_str();
        let mut rows = Vec::with_capacity(shown.len() * 2);
        for (month, summary) in shown {
            rows.push(vec![
                month.to_string(),
                "Income".to_string(),
                format_currency(summary.income, symbol, 2),
                bar(summary.income, max, BAR_WIDTH),
            ]);
            rows.push(vec![
                String::new(),
                "Expenses".to_string(),
                format_currency(summary.expenses, symbol, 2),
                bar(summary.expenses, max, BAR_WIDTH),
            ]);
        }

        write_table(
            output,
            &["Month", "", "Amount", ""],
            &[Align::Left, Align::Left, Align::Right, Align::Left],
            &rows,
        )?;
        Ok(())
    }

    fn render_breakdown(&self, output: &mut dyn Write, config: &ReportConfig) -> Result<(), TrackerError> {
        writeln!(
            output,
            "--- Current Month Spending by Category ({}) ---",
            self.breakdown.month()
        )?;

        if self.breakdown.is_empty() {
            writeln!(output, "No expenses this month")?;
            return Ok(());
        }

        let symbol = config.currency_symbol.as_str();
        let mut rows: Vec<Vec<String>> = self
            .breakdown
            .iter()
            .map(|(category, amount)| {
                vec![
                    category.to_string(),
                    format_currency(amount, symbol, 2),
                    format_percent(self.breakdown.share(category)),
                ]
            })
            .collect();
        rows.push(vec![
            "Total".to_string(),
            format_currency(self.breakdown.total(), symbol, 2),
            format_percent(Decimal::ONE_HUNDRED),
        ]);

        write_table(
            output,
            &["Category", "Amount", "Share"],
            &[Align::Left, Align::Right, Align::Right],
            &rows,
        )?;
        Ok(())
    }

    fn render_savings_rate(&self, output: &mut dyn Write, config: &ReportConfig) -> Result<(), TrackerError> {
        writeln!(output, "--- Monthly Savings Rate ---")?;

        if self.summary.is_empty() {
            writeln!(output, "{NO_DATA}")?;
            return Ok(());
        }

        let months: Vec<_> = self.summary.iter().collect();
        let rows: Vec<Vec<String>> = trailing(&months, config.chart_months)
            .iter()
            .map(|(month, summary)| {
                vec![
                    month.to_string(),
                    format_percent(summary.savings_rate),
                    savings_rating(summary.savings_rate).to_string(),
                ]
            })
            .collect();

        write_table(
            output,
            &["Month", "Savings Rate", ""],
            &[Align::Left, Align::Right, Align::Left],
            &rows,
        )?;
        writeln!(
            output,
            "Thresholds: Good >= {}, Excellent >= {}",
            format_percent(GOOD_SAVINGS_RATE),
            format_percent(EXCELLENT_SAVINGS_RATE)
        )?;
        Ok(())
    }
}

/// Label for a savings rate against the 10% / 20% thresholds
pub fn savings_rating(rate: Decimal) -> &'static str {
    if rate >= EXCELLENT_SAVINGS_RATE {
        "Excellent"
    } else if rate >= GOOD_SAVINGS_RATE {
        "Good"
    } else {
        ""
    }
}

fn trailing<T>(items: &[T], count: usize) -> &[T] {
    &items[items.len().saturating_sub(count)..]
}
