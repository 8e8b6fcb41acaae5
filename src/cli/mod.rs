//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the API client.

pub mod account;
pub mod budget;
pub mod category;
pub mod config;
pub mod month;
pub mod payee;
pub mod scheduled;
pub mod transaction;
pub mod user;

use std::cell::OnceCell;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::warn;

use crate::api::ApiClient;
use crate::display::{format_success, CurrencyFormatter, OutputFormat};
use crate::error::{ClinabError, ClinabResult};
use crate::models::Milliunits;
use crate::services::Resolver;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use config::handle_config_command;
pub use month::{handle_month_command, MonthCommands};
pub use payee::{handle_payee_command, PayeeCommands};
pub use scheduled::{handle_scheduled_command, ScheduledCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::handle_user_command;

/// Date format accepted on the command line and sent to the API
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month alias understood by the API
pub const CURRENT_MONTH: &str = "current";

/// Everything a command handler needs
pub struct Context {
    pub client: ApiClient,
    /// Resolved identifier (or alias) of the active budget
    pub budget_id: String,
    pub output: OutputFormat,
    money: OnceCell<CurrencyFormatter>,
}

impl Context {
    /// Create a context for the given budget
    pub fn new(client: ApiClient, budget_id: String, output: OutputFormat) -> Self {
        Self {
            client,
            budget_id,
            output,
            money: OnceCell::new(),
        }
    }

    /// Name resolver backed by the API client
    pub fn resolver(&self) -> Resolver<'_, ApiClient> {
        Resolver::new(&self.client)
    }

    /// Currency formatter for the active budget
    ///
    /// The budget's currency settings are fetched the first time money is
    /// rendered. If that fetch fails the default (USD) format is used.
    pub fn money(&self) -> &CurrencyFormatter {
        if let Some(money) = self.money.get() {
            return money;
        }

        let formatter = match self.client.get_budget_settings(&self.budget_id) {
            Ok(settings) => CurrencyFormatter::new(settings.currency_format),
            Err(e) => {
                warn!("Could not load currency settings, using default: {}", e);
                CurrencyFormatter::default()
            }
        };
        self.money.get_or_init(|| formatter)
    }

    /// Print a result: the raw value in structured modes, or the rendered
    /// table view otherwise
    pub fn emit<T, F>(&self, value: &T, render: F) -> ClinabResult<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        if self.output.is_structured() {
            println!("{}", self.output.render(value)?);
        } else {
            println!("{}", render());
        }
        Ok(())
    }

    /// Print the value in structured modes, or a `✓` line otherwise
    pub fn emit_success<T, F>(&self, value: &T, message: F) -> ClinabResult<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        self.emit(value, || format_success(&message()))
    }
}

/// Validate a user-typed amount and convert it to milliunits
pub fn parse_amount(input: &str) -> ClinabResult<Milliunits> {
    Ok(Milliunits::parse(input)?)
}

/// Validate a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> ClinabResult<String> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|_| {
            ClinabError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD (e.g. 2026-03-01)",
                input
            ))
        })
}

/// Validate a month: `current` or a `YYYY-MM-DD` date
pub fn parse_month(input: &str) -> ClinabResult<String> {
    if input.eq_ignore_ascii_case(CURRENT_MONTH) {
        return Ok(CURRENT_MONTH.to_string());
    }
    parse_date(input).map_err(|_| {
        ClinabError::Validation(format!(
            "Invalid month '{}'. Use \"current\" or YYYY-MM-DD (e.g. 2026-03-01)",
            input
        ))
    })
}

/// Today's date in the local time zone
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
