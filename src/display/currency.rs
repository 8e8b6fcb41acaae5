//! Currency formatting service
//!
//! A [`CurrencyFormatter`] is built once per command from the active budget's
//! settings and handed by reference to every view that prints money.

use crate::models::{CurrencyFormat, Milliunits};

/// Formats milliunit amounts in a budget's currency
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    format: CurrencyFormat,
}

impl CurrencyFormatter {
    /// Create a formatter for the given currency format
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    /// The currency format in use
    pub fn current(&self) -> &CurrencyFormat {
        &self.format
    }

    /// Format an amount with the held currency format
    pub fn format(&self, amount: Milliunits) -> String {
        amount.format_with(&self.format)
    }

    /// Format an amount for a table cell: red when negative, green when
    /// positive, plain when zero
    pub fn format_colored(&self, amount: Milliunits) -> String {
        let formatted = self.format(amount);
        if amount.is_negative() {
            format!("\x1b[31m{}\x1b[0m", formatted)
        } else if amount.is_positive() {
            format!("\x1b[32m{}\x1b[0m", formatted)
        } else {
            formatted
        }
    }

    /// Format an amount, optionally overriding the held currency format
    pub fn format_with(&self, amount: Milliunits, format: Option<&CurrencyFormat>) -> String {
        amount.format_with(format.unwrap_or(&self.format))
    }
}
