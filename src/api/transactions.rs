//! Transaction endpoints

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use crate::error::ClinabResult;
use crate::models::{
    ImportResponse, SaveTransaction, SaveTransactionsResponse, Transaction, TransactionType,
};

/// Which collection of transactions to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionScope {
    /// Every transaction in the budget
    All,
    Account(String),
    Category(String),
    Payee(String),
    /// A budget month (`current` or the first day of a month)
    Month(String),
}

impl TransactionScope {
    /// API path of the collection
    pub fn path(&self, budget_id: &str) -> String {
        match self {
            Self::All => format!("/budgets/{}/transactions", budget_id),
            Self::Account(id) => format!("/budgets/{}/accounts/{}/transactions", budget_id, id),
            Self::Category(id) => format!("/budgets/{}/categories/{}/transactions", budget_id, id),
            Self::Payee(id) => format!("/budgets/{}/payees/{}/transactions", budget_id, id),
            Self::Month(month) => format!("/budgets/{}/months/{}/transactions", budget_id, month),
        }
    }
}

/// Server-side filters for transaction lists
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Only transactions on or after this date (YYYY-MM-DD)
    pub since_date: Option<String>,
    pub transaction_type: Option<TransactionType>,
}

impl TransactionQuery {
    fn params(&self) -> [(&'static str, Option<String>); 2] {
        [
            ("since_date", self.since_date.clone()),
            (
                "type",
                self.transaction_type.map(|t| t.as_str().to_string()),
            ),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct TransactionsData {
    transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
struct TransactionData {
    transaction: Transaction,
}

#[derive(Serialize)]
struct TransactionBody<'a> {
    transaction: &'a SaveTransaction,
}

#[derive(Serialize)]
struct EmptyBody {}

impl ApiClient {
    /// List transactions in a scope, oldest first as the service returns them
    pub fn list_transactions(
        &self,
        budget_id: &str,
        scope: &TransactionScope,
        query: &TransactionQuery,
    ) -> ClinabResult<Vec<Transaction>> {
        let data: TransactionsData = self.get(&scope.path(budget_id), &query.params())?;
        Ok(data.transactions)
    }

    /// Get a single transaction
    pub fn get_transaction(&self, budget_id: &str, transaction_id: &str) -> ClinabResult<Transaction> {
        let data: TransactionData = self.get(
            &format!("/budgets/{}/transactions/{}", budget_id, transaction_id),
            &[],
        )?;
        Ok(data.transaction)
    }

    /// Create a transaction
    pub fn create_transaction(
        &self,
        budget_id: &str,
        transaction: &SaveTransaction,
    ) -> ClinabResult<SaveTransactionsResponse> {
        self.post(
            &format!("/budgets/{}/transactions", budget_id),
            &TransactionBody { transaction },
        )
    }

    /// Replace a transaction
    pub fn update_transaction(
        &self,
        budget_id: &str,
        transaction_id: &str,
        transaction: &SaveTransaction,
    ) -> ClinabResult<Transaction> {
        let data: TransactionData = self.put(
            &format!("/budgets/{}/transactions/{}", budget_id, transaction_id),
            &TransactionBody { transaction },
        )?;
        Ok(data.transaction)
    }

    /// Delete a transaction, returning it as it was
    pub fn delete_transaction(
        &self,
        budget_id: &str,
        transaction_id: &str,
    ) -> ClinabResult<Transaction> {
        let data: TransactionData = self.delete(&format!(
            "/budgets/{}/transactions/{}",
            budget_id, transaction_id
        ))?;
        Ok(data.transaction)
    }

    /// Trigger an import from linked accounts
    pub fn import_transactions(&self, budget_id: &str) -> ClinabResult<ImportResponse> {
        self.post(
            &format!("/budgets/{}/transactions/import", budget_id),
            &EmptyBody {},
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_paths() {
        assert_eq!(TransactionScope::All.path("b1"), "/budgets/b1/transactions");
        assert_eq!(
            TransactionScope::Account("a1".into()).path("b1"),
            "/budgets/b1/accounts/a1/transactions"
        );
        assert_eq!(
            TransactionScope::Category("c1".into()).path("b1"),
            "/budgets/b1/categories/c1/transactions"
        );
        assert_eq!(
            TransactionScope::Payee("p1".into()).path("b1"),
            "/budgets/b1/payees/p1/transactions"
        );
        assert_eq!(
            TransactionScope::Month("current".into()).path("b1"),
            "/budgets/b1/months/current/transactions"
        );
    }

    #[test]
    fn test_query_params() {
        let query = TransactionQuery {
            since_date: Some("2026-01-01".into()),
            transaction_type: Some(TransactionType::Unapproved),
        };
        let params = query.params();
        assert_eq!(params[0], ("since_date", Some("2026-01-01".to_string())));
        assert_eq!(params[1], ("type", Some("unapproved".to_string())));

        let empty = TransactionQuery::default().params();
        assert!(empty.iter().all(|(_, v)| v.is_none()));
    }
}
