//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display:
//! tables for lists, aligned label/value lines for single records, and the
//! output mode switch between human-readable and structured output.

pub mod account;
pub mod budget;
pub mod category;
pub mod currency;
pub mod month;
pub mod output;
pub mod payee;
pub mod scheduled;
pub mod table;
pub mod transaction;

pub use account::{format_account_details, format_account_list, AccountTotals};
pub use budget::{format_budget_list, format_budget_settings};
pub use category::{format_category_details, format_category_list};
pub use currency::CurrencyFormatter;
pub use month::{format_month_details, format_month_list};
pub use output::{format_detail, format_error, format_success, OutputFormat};
pub use payee::{format_payee_details, format_payee_list, format_payee_locations};
pub use scheduled::{format_scheduled_details, format_scheduled_list};
pub use transaction::{format_transaction_details, format_transaction_list};
