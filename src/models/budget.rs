//! Budget model
//!
//! A budget is the top-level container for accounts, categories, payees and
//! transactions.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::currency::{CurrencyFormat, DateFormat};

/// Summary of a budget as returned by the budgets list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub last_modified_on: Option<String>,
    #[serde(default)]
    pub first_month: Option<String>,
    #[serde(default)]
    pub last_month: Option<String>,
    #[serde(default)]
    pub date_format: Option<DateFormat>,
    #[serde(default)]
    pub currency_format: Option<CurrencyFormat>,
    /// Only present when requested with `include_accounts`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Account>>,
}

impl BudgetSummary {
    /// Date part of the last modification timestamp
    pub fn last_modified_date(&self) -> &str {
        self.last_modified_on
            .as_deref()
            .map(|ts| ts.split('T').next().unwrap_or(ts))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_budget() {
        let json = r#"{"id": "b1", "name": "Household"}"#;
        let budget: BudgetSummary = serde_json::from_str(json).unwrap();
        assert_eq!(budget.name, "Household");
        assert!(budget.accounts.is_none());
        assert_eq!(budget.last_modified_date(), "");
    }

    #[test]
    fn test_last_modified_date() {
        let json = r#"{
            "id": "b1",
            "name": "Household",
            "last_modified_on": "2026-02-14T08:30:00+00:00",
            "first_month": "2024-01-01",
            "last_month": "2026-03-01"
        }"#;
        let budget: BudgetSummary = serde_json::from_str(json).unwrap();
        assert_eq!(budget.last_modified_date(), "2026-02-14");
    }
}
