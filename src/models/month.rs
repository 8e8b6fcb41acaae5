//! Budget month model

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Milliunits;

/// Summary of one budget month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    /// First day of the month (YYYY-MM-DD)
    pub month: String,
    #[serde(default)]
    pub note: Option<String>,
    pub income: Milliunits,
    pub budgeted: Milliunits,
    pub activity: Milliunits,
    pub to_be_budgeted: Milliunits,
    #[serde(default)]
    pub age_of_money: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
}

impl MonthSummary {
    /// Age of money for display, or `-` when unknown
    pub fn age_of_money_label(&self) -> String {
        match self.age_of_money {
            Some(days) if days > 0 => format!("{} days", days),
            _ => "-".to_string(),
        }
    }
}

/// A budget month with its category breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthDetail {
    #[serde(flatten)]
    pub summary: MonthSummary,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl MonthDetail {
    /// Categories worth showing in a month breakdown
    pub fn visible_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(|c| !c.deleted && !c.hidden && !c.is_system())
    }
}
