//! Scheduled transaction endpoints

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use crate::error::ClinabResult;
use crate::models::{SaveScheduledTransaction, ScheduledTransaction};

#[derive(Debug, Deserialize)]
struct ScheduledTransactionsData {
    scheduled_transactions: Vec<ScheduledTransaction>,
}

#[derive(Debug, Deserialize)]
struct ScheduledTransactionData {
    scheduled_transaction: ScheduledTransaction,
}

#[derive(Serialize)]
struct ScheduledTransactionBody<'a> {
    scheduled_transaction: &'a SaveScheduledTransaction,
}

impl ApiClient {
    /// List the scheduled transactions of a budget
    pub fn list_scheduled_transactions(
        &self,
        budget_id: &str,
    ) -> ClinabResult<Vec<ScheduledTransaction>> {
        let data: ScheduledTransactionsData =
            self.get(&format!("/budgets/{}/scheduled_transactions", budget_id), &[])?;
        Ok(data.scheduled_transactions)
    }

    /// Get a single scheduled transaction
    pub fn get_scheduled_transaction(
        &self,
        budget_id: &str,
        scheduled_id: &str,
    ) -> ClinabResult<ScheduledTransaction> {
        let data: ScheduledTransactionData = self.get(
            &format!(
                "/budgets/{}/scheduled_transactions/{}",
                budget_id, scheduled_id
            ),
            &[],
        )?;
        Ok(data.scheduled_transaction)
    }

    /// Create a scheduled transaction
    pub fn create_scheduled_transaction(
        &self,
        budget_id: &str,
        scheduled_transaction: &SaveScheduledTransaction,
    ) -> ClinabResult<ScheduledTransaction> {
        let data: ScheduledTransactionData = self.post(
            &format!("/budgets/{}/scheduled_transactions", budget_id),
            &ScheduledTransactionBody {
                scheduled_transaction,
            },
        )?;
        Ok(data.scheduled_transaction)
    }

    /// Replace a scheduled transaction
    pub fn update_scheduled_transaction(
        &self,
        budget_id: &str,
        scheduled_id: &str,
        scheduled_transaction: &SaveScheduledTransaction,
    ) -> ClinabResult<ScheduledTransaction> {
        let data: ScheduledTransactionData = self.put(
            &format!(
                "/budgets/{}/scheduled_transactions/{}",
                budget_id, scheduled_id
            ),
            &ScheduledTransactionBody {
                scheduled_transaction,
            },
        )?;
        Ok(data.scheduled_transaction)
    }

    /// Delete a scheduled transaction, returning it as it was
    pub fn delete_scheduled_transaction(
        &self,
        budget_id: &str,
        scheduled_id: &str,
    ) -> ClinabResult<ScheduledTransaction> {
        let data: ScheduledTransactionData = self.delete(&format!(
            "/budgets/{}/scheduled_transactions/{}",
            budget_id, scheduled_id
        ))?;
        Ok(data.scheduled_transaction)
    }
}
