//! Account endpoints

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use crate::error::ClinabResult;
use crate::models::{Account, SaveAccount};

#[derive(Debug, Deserialize)]
struct AccountsData {
    accounts: Vec<Account>,
}

#[derive(Debug, Deserialize)]
struct AccountData {
    account: Account,
}

#[derive(Serialize)]
struct AccountBody<'a> {
    account: &'a SaveAccount,
}

impl ApiClient {
    /// List the accounts of a budget, including closed and deleted ones
    pub fn list_accounts(&self, budget_id: &str) -> ClinabResult<Vec<Account>> {
        let data: AccountsData = self.get(&format!("/budgets/{}/accounts", budget_id), &[])?;
        Ok(data.accounts)
    }

    /// Get a single account
    pub fn get_account(&self, budget_id: &str, account_id: &str) -> ClinabResult<Account> {
        let data: AccountData =
            self.get(&format!("/budgets/{}/accounts/{}", budget_id, account_id), &[])?;
        Ok(data.account)
    }

    /// Create an account
    pub fn create_account(&self, budget_id: &str, account: &SaveAccount) -> ClinabResult<Account> {
        let data: AccountData = self.post(
            &format!("/budgets/{}/accounts", budget_id),
            &AccountBody { account },
        )?;
        Ok(data.account)
    }
}
