//! Budget endpoints

use serde::Deserialize;

use super::client::ApiClient;
use crate::error::ClinabResult;
use crate::models::{BudgetSettings, BudgetSummary};

#[derive(Debug, Deserialize)]
struct BudgetsData {
    budgets: Vec<BudgetSummary>,
}

#[derive(Debug, Deserialize)]
struct SettingsData {
    settings: BudgetSettings,
}

impl ApiClient {
    /// List all budgets, optionally with their accounts
    pub fn list_budgets(&self, include_accounts: bool) -> ClinabResult<Vec<BudgetSummary>> {
        let include = include_accounts.then(|| "true".to_string());
        let data: BudgetsData = self.get("/budgets", &[("include_accounts", include)])?;
        Ok(data.budgets)
    }

    /// Get the date and currency settings of a budget
    pub fn get_budget_settings(&self, budget_id: &str) -> ClinabResult<BudgetSettings> {
        let data: SettingsData = self.get(&format!("/budgets/{}/settings", budget_id), &[])?;
        Ok(data.settings)
    }
}
