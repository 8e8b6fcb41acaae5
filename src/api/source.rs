//! Candidate lists for name resolution, fetched from the API

use crate::error::ClinabResult;
use crate::models::{Account, BudgetSummary, CategoryGroup, Payee};
use crate::services::{EntityRef, EntitySource, GroupRef};

use super::client::ApiClient;

impl From<BudgetSummary> for EntityRef {
    fn from(budget: BudgetSummary) -> Self {
        Self {
            id: budget.id,
            name: budget.name,
            deleted: false,
        }
    }
}

impl From<Account> for EntityRef {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            deleted: account.deleted,
        }
    }
}

impl From<Payee> for EntityRef {
    fn from(payee: Payee) -> Self {
        Self {
            id: payee.id,
            name: payee.name,
            deleted: payee.deleted,
        }
    }
}

impl From<CategoryGroup> for GroupRef {
    fn from(group: CategoryGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            deleted: group.deleted,
            categories: group
                .categories
                .into_iter()
                .map(|c| EntityRef {
                    id: c.id,
                    name: c.name,
                    deleted: c.deleted,
                })
                .collect(),
        }
    }
}

impl EntitySource for ApiClient {
    fn budget_refs(&self) -> ClinabResult<Vec<EntityRef>> {
        Ok(self
            .list_budgets(false)?
            .into_iter()
            .map(EntityRef::from)
            .collect())
    }

    fn account_refs(&self, budget_id: &str) -> ClinabResult<Vec<EntityRef>> {
        Ok(self
            .list_accounts(budget_id)?
            .into_iter()
            .map(EntityRef::from)
            .collect())
    }

    fn payee_refs(&self, budget_id: &str) -> ClinabResult<Vec<EntityRef>> {
        Ok(self
            .list_payees(budget_id)?
            .into_iter()
            .map(EntityRef::from)
            .collect())
    }

    fn category_group_refs(&self, budget_id: &str) -> ClinabResult<Vec<GroupRef>> {
        Ok(self
            .list_category_groups(budget_id)?
            .into_iter()
            .map(GroupRef::from)
            .collect())
    }
}
