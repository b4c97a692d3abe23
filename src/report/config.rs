//! Presentation settings shared by the dashboard and the tables

/// Configuration for text reports
///
/// Controls how many rows and months the reports show and which currency
/// symbol prefixes amounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Number of rows in the recent transactions listing
    pub recent_limit: usize,
    /// Number of trailing months shown in the dashboard charts
    pub chart_months: usize,
    /// Prefix for formatted amounts
    pub currency_symbol: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            recent_limit: 10,
            chart_months: 6,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl ReportConfig {
    /// Create a new ReportConfig with custom values
    ///
    /// Zero limits are replaced with the defaults and a warning is logged.
    pub fn new(recent_limit: usize, chart_months: usize, currency_symbol: impl Into<String>) -> Self {
        let default = Self::default();

        let recent_limit = if recent_limit == 0 {
            tracing::warn!(
                "Invalid recent_limit ({}), using default ({})",
                recent_limit,
                default.recent_limit
            );
            default.recent_limit
        } else {
            recent_limit
        };

        let chart_months = if chart_months == 0 {
            tracing::warn!(
                "Invalid chart_months ({}), using default ({})",
                chart_months,
                default.chart_months
            );
            default.chart_months
        } else {
            chart_months
        };

        Self {
            recent_limit,
            chart_months,
            currency_symbol: currency_symbol.into(),
        }
    }
}
