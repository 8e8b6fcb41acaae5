//! Currency and date formatting settings of a budget

use serde::{Deserialize, Serialize};

/// How a budget renders monetary amounts
///
/// Delivered by the service as part of a budget's settings. The default is
/// US dollars: `$123,456.78`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub iso_code: String,
    #[serde(default)]
    pub example_format: String,
    pub decimal_digits: u32,
    pub decimal_separator: String,
    pub symbol_first: bool,
    pub group_separator: String,
    pub currency_symbol: String,
    pub display_symbol: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            iso_code: "USD".to_string(),
            example_format: "123,456.78".to_string(),
            decimal_digits: 2,
            decimal_separator: ".".to_string(),
            symbol_first: true,
            group_separator: ",".to_string(),
            currency_symbol: "$".to_string(),
            display_symbol: true,
        }
    }
}

/// Date display preference of a budget (e.g. "MM/DD/YYYY")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormat {
    pub format: String,
}

/// Settings of a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSettings {
    pub date_format: DateFormat,
    pub currency_format: CurrencyFormat,
}
