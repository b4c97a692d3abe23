use crate::core::{Storage, TransactionStore};
use crate::report::{
    format_currency, render_monthly_summary, render_recent, Dashboard, ReportConfig,
};
use crate::types::{parse_amount, parse_date, Category, TrackerError, YearMonth};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

const MENU: &str = "\
===== Personal Finance Tracker =====
1. View Dashboard
2. Add Transaction
3. View Recent Transactions
4. View Monthly Summary
5. Exit";

/// Numbered menu loop over a transaction store
///
/// Reads choices and prompt answers line by line from `input` and writes
/// everything to `output`. End of input exits the loop cleanly.
pub struct Shell<S: Storage, R: BufRead, W: Write> {
    store: TransactionStore<S>,
    config: ReportConfig,
    input: R,
    output: W,
    /// Pinned date; `None` reads the local clock on every action
    today: Option<NaiveDate>,
}

impl<S: Storage, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(store: TransactionStore<S>, config: ReportConfig, input: R, output: W) -> Self {
        Shell {
            store,
            config,
            input,
            output,
            today: None,
        }
    }

    /// Use `today` as the default transaction date and the dashboard's month
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn store(&self) -> &TransactionStore<S> {
        &self.store
    }

    /// Run until the user picks Exit or input ends
    ///
    /// # Errors
    ///
    /// Only failures to read input or write output end the loop with an
    /// error. Store errors while adding and views that overflow are reported
    /// and the loop continues.
    pub fn run(&mut self) -> Result<(), TrackerError> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;

            let Some(choice) = self.prompt("Enter your choice (1-5): ")? else {
                writeln!(self.output)?;
                break;
            };

            match choice.as_str() {
                "1" => {
                    let shown = self.show_dashboard();
                    self.finish_view(shown)?;
                }
                "2" => self.add_transaction()?,
                "3" => render_recent(
                    &mut self.output,
                    self.store.recent(self.config.recent_limit),
                    &self.config,
                )?,
                "4" => {
                    let shown = self.show_monthly_summary();
                    self.finish_view(shown)?;
                }
                "5" => break,
                other => writeln!(
                    self.output,
                    "Invalid choice '{other}'. Please enter a number from 1 to 5."
                )?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn show_dashboard(&mut self) -> Result<(), TrackerError> {
        let month = YearMonth::from_date(self.today());
        let dashboard = Dashboard::build(self.store.aggregations(), month)?;
        dashboard.render(&mut self.output, &self.config)
    }

    fn show_monthly_summary(&mut self) -> Result<(), TrackerError> {
        let summary = self.store.aggregations().monthly_summary()?;
        render_monthly_summary(&mut self.output, &summary, &self.config)
    }

    /// A view that cannot be computed is reported; output failures still propagate
    fn finish_view(&mut self, shown: Result<(), TrackerError>) -> Result<(), TrackerError> {
        match shown {
            Err(e @ TrackerError::ArithmeticOverflow { .. }) => {
                tracing::error!(error = %e, "failed to compute view");
                writeln!(self.output, "Cannot show this view: {e}")?;
                Ok(())
            }
            other => other,
        }
    }

    fn add_transaction(&mut self) -> Result<(), TrackerError> {
        let Some(date) = self.prompt_date()? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount()? else {
            return Ok(());
        };
        let Some(category) = self.prompt_category()? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(());
        };

        match self.store.add(date, amount, category, description) {
            Ok(tx) => writeln!(
                self.output,
                "Transaction added: {} {} {}",
                tx.date().format("%Y-%m-%d"),
                tx.category(),
                format_currency(tx.amount(), &self.config.currency_symbol, 2)
            )?,
            Err(e) => {
                tracing::error!(error = %e, "failed to add transaction");
                writeln!(self.output, "Failed to add transaction: {e}")?;
            }
        }
        Ok(())
    }

    /// Blank input means today; so does unparseable input, after a notice
    fn prompt_date(&mut self) -> Result<Option<NaiveDate>, TrackerError> {
        let Some(input) = self.prompt("Enter date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(self.today()));
        }

        match parse_date(&input) {
            Ok(date) => Ok(Some(date)),
            Err(e) => {
                writeln!(self.output, "{e}. Using today's date.")?;
                Ok(Some(self.today()))
            }
        }
    }

    fn prompt_amount(&mut self) -> Result<Option<Decimal>, TrackerError> {
        loop {
            let Some(input) = self.prompt("Enter amount: ")? else {
                return Ok(None);
            };
            match parse_amount(&input) {
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => writeln!(self.output, "{e}. Please try again.")?,
            }
        }
    }

    fn prompt_category(&mut self) -> Result<Option<Category>, TrackerError> {
        let names: Vec<&str> = Category::ALL.iter().map(|category| category.name()).collect();
        writeln!(self.output, "Categories: {}", names.join(", "))?;

        loop {
            let Some(input) = self.prompt("Enter category: ")? else {
                return Ok(None);
            };
            match input.parse::<Category>() {
                Ok(category) => return Ok(Some(category)),
                Err(e) => writeln!(self.output, "{e}. Choose one of the listed categories.")?,
            }
        }
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>, TrackerError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
