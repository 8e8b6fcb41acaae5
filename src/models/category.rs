//! Category and CategoryGroup models
//!
//! Categories are organized into groups. The service always returns the
//! groups with their categories nested inside.

use serde::{Deserialize, Serialize};

use super::money::Milliunits;

/// Group holding the service's internal categories ("Inflow: Ready to Assign")
pub const INTERNAL_MASTER_GROUP: &str = "Internal Master Category";

/// Group the service moves hidden categories into
pub const HIDDEN_CATEGORIES_GROUP: &str = "Hidden Categories";

/// Category names that carry no user budget information
pub const SYSTEM_CATEGORIES: [&str; 2] = ["Inflow: Ready to Assign", "Uncategorized"];

/// Goal type of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalType {
    /// Target category balance
    #[serde(rename = "TB")]
    TargetBalance,
    /// Target category balance by date
    #[serde(rename = "TBD")]
    TargetBalanceByDate,
    /// Monthly funding
    #[serde(rename = "MF")]
    MonthlyFunding,
    /// Plan your spending
    #[serde(rename = "NEED")]
    Need,
    /// Debt payoff
    #[serde(rename = "DEBT")]
    Debt,
}

impl GoalType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TargetBalance => "TB",
            Self::TargetBalanceByDate => "TBD",
            Self::MonthlyFunding => "MF",
            Self::Need => "NEED",
            Self::Debt => "DEBT",
        }
    }
}

/// A budget category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub category_group_id: Option<String>,
    #[serde(default)]
    pub category_group_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub budgeted: Milliunits,
    #[serde(default)]
    pub activity: Milliunits,
    #[serde(default)]
    pub balance: Milliunits,
    #[serde(default)]
    pub goal_type: Option<GoalType>,
    #[serde(default)]
    pub goal_target: Option<Milliunits>,
    #[serde(default)]
    pub goal_target_month: Option<String>,
    #[serde(default)]
    pub goal_percentage_complete: Option<i64>,
    #[serde(default)]
    pub goal_under_funded: Option<Milliunits>,
    #[serde(default)]
    pub deleted: bool,
}

impl Category {
    /// Whether this is one of the service's bookkeeping categories
    pub fn is_system(&self) -> bool {
        SYSTEM_CATEGORIES.contains(&self.name.as_str())
    }
}

/// A group of categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CategoryGroup {
    /// Whether this group is shown in listings
    ///
    /// The internal master group is never shown; the hidden-categories group
    /// and hidden groups only when requested.
    pub fn is_listed(&self, include_hidden: bool) -> bool {
        if self.deleted || self.name == INTERNAL_MASTER_GROUP {
            return false;
        }
        if self.hidden || self.name == HIDDEN_CATEGORIES_GROUP {
            return include_hidden;
        }
        true
    }
}

/// Request body for creating or updating a category
#[derive(Debug, Clone, Default, Serialize)]
pub struct SaveCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_group_id: Option<String>,
}

/// Request body for creating or renaming a category group
#[derive(Debug, Clone, Serialize)]
pub struct SaveCategoryGroup {
    pub name: String,
}

/// Request body for setting a category's budgeted amount in a month
#[derive(Debug, Clone, Serialize)]
pub struct SaveMonthCategory {
    pub budgeted: Milliunits,
}
