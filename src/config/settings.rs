//! Report settings
//!
//! Defaults for one report run. Command-line flags override them; nothing is
//! read from disk or the environment.

use std::path::PathBuf;

use crate::classifier::DEFAULT_TEST_THRESHOLD;
use crate::error::{ReportError, ReportResult};
use crate::models::Money;

/// Export file read when no path is given
pub const DEFAULT_INPUT_FILE: &str = "unified_payments.csv";

/// Settings for a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Currency symbol used in text output
    pub currency_symbol: String,

    /// Charges at or below this amount are test charges
    pub test_threshold: Money,

    /// Input file used when none is given on the command line
    pub default_input: PathBuf,

    /// Width of section rules in the text report
    pub report_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            test_threshold: DEFAULT_TEST_THRESHOLD,
            default_input: PathBuf::from(DEFAULT_INPUT_FILE),
            report_width: 80,
        }
    }
}

impl Settings {
    /// Override the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> ReportResult<Self> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(ReportError::Config(
                "currency symbol must not be empty".to_string(),
            ));
        }
        self.currency_symbol = symbol;
        Ok(self)
    }

    /// The input path to read: the explicit one, or the default
    pub fn resolve_input(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit.unwrap_or_else(|| self.default_input.clone())
    }

    /// Format an amount with the configured symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
