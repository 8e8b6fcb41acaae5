//! Category and category group endpoints

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use crate::error::ClinabResult;
use crate::models::{Category, CategoryGroup, SaveCategory, SaveCategoryGroup, SaveMonthCategory};

#[derive(Debug, Deserialize)]
struct CategoryGroupsData {
    category_groups: Vec<CategoryGroup>,
}

#[derive(Debug, Deserialize)]
struct CategoryData {
    category: Category,
}

#[derive(Debug, Deserialize)]
struct CategoryGroupData {
    category_group: CategoryGroup,
}

#[derive(Serialize)]
struct CategoryBody<'a, T: Serialize> {
    category: &'a T,
}

#[derive(Serialize)]
struct CategoryGroupBody<'a> {
    category_group: &'a SaveCategoryGroup,
}

impl ApiClient {
    /// List category groups with their categories
    pub fn list_category_groups(&self, budget_id: &str) -> ClinabResult<Vec<CategoryGroup>> {
        let data: CategoryGroupsData =
            self.get(&format!("/budgets/{}/categories", budget_id), &[])?;
        Ok(data.category_groups)
    }

    /// Get a single category with its amounts for the current month
    pub fn get_category(&self, budget_id: &str, category_id: &str) -> ClinabResult<Category> {
        let data: CategoryData = self.get(
            &format!("/budgets/{}/categories/{}", budget_id, category_id),
            &[],
        )?;
        Ok(data.category)
    }

    /// Get a category with its amounts for a given month
    pub fn get_month_category(
        &self,
        budget_id: &str,
        month: &str,
        category_id: &str,
    ) -> ClinabResult<Category> {
        let data: CategoryData = self.get(
            &format!(
                "/budgets/{}/months/{}/categories/{}",
                budget_id, month, category_id
            ),
            &[],
        )?;
        Ok(data.category)
    }

    /// Create a category inside an existing group
    pub fn create_category(
        &self,
        budget_id: &str,
        category: &SaveCategory,
    ) -> ClinabResult<Category> {
        let data: CategoryData = self.post(
            &format!("/budgets/{}/categories", budget_id),
            &CategoryBody { category },
        )?;
        Ok(data.category)
    }

    /// Update the name, note or group of a category
    pub fn update_category(
        &self,
        budget_id: &str,
        category_id: &str,
        category: &SaveCategory,
    ) -> ClinabResult<Category> {
        let data: CategoryData = self.patch(
            &format!("/budgets/{}/categories/{}", budget_id, category_id),
            &CategoryBody { category },
        )?;
        Ok(data.category)
    }

    /// Set the amount assigned to a category in a month
    pub fn update_month_category(
        &self,
        budget_id: &str,
        month: &str,
        category_id: &str,
        category: &SaveMonthCategory,
    ) -> ClinabResult<Category> {
        let data: CategoryData = self.patch(
            &format!(
                "/budgets/{}/months/{}/categories/{}",
                budget_id, month, category_id
            ),
            &CategoryBody { category },
        )?;
        Ok(data.category)
    }

    /// Create a category group
    pub fn create_category_group(
        &self,
        budget_id: &str,
        category_group: &SaveCategoryGroup,
    ) -> ClinabResult<CategoryGroup> {
        let data: CategoryGroupData = self.post(
            &format!("/budgets/{}/category_groups", budget_id),
            &CategoryGroupBody { category_group },
        )?;
        Ok(data.category_group)
    }

    /// Rename a category group
    pub fn update_category_group(
        &self,
        budget_id: &str,
        group_id: &str,
        category_group: &SaveCategoryGroup,
    ) -> ClinabResult<CategoryGroup> {
        let data: CategoryGroupData = self.patch(
            &format!("/budgets/{}/category_groups/{}", budget_id, group_id),
            &CategoryGroupBody { category_group },
        )?;
        Ok(data.category_group)
    }
}
