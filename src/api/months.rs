//! Budget month endpoints

use serde::Deserialize;

use super::client::ApiClient;
use crate::error::ClinabResult;
use crate::models::{MonthDetail, MonthSummary};

#[derive(Debug, Deserialize)]
struct MonthsData {
    months: Vec<MonthSummary>,
}

#[derive(Debug, Deserialize)]
struct MonthData {
    month: MonthDetail,
}

impl ApiClient {
    /// List every month of a budget
    pub fn list_months(&self, budget_id: &str) -> ClinabResult<Vec<MonthSummary>> {
        let data: MonthsData = self.get(&format!("/budgets/{}/months", budget_id), &[])?;
        Ok(data.months)
    }

    /// Get one month (`current` or the first day of a month) with its categories
    pub fn get_month(&self, budget_id: &str, month: &str) -> ClinabResult<MonthDetail> {
        let data: MonthData = self.get(&format!("/budgets/{}/months/{}", budget_id, month), &[])?;
        Ok(data.month)
    }
}
