//! Transaction model
//!
//! Transactions move money in or out of an account. A split transaction
//! carries its parts as subtransactions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Milliunits;

/// Cleared status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    #[default]
    Cleared,
    Uncleared,
    Reconciled,
}

impl ClearedStatus {
    /// Single-letter marker used in tables
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Cleared => "C",
            Self::Reconciled => "R",
            Self::Uncleared => "U",
        }
    }
}

impl fmt::Display for ClearedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleared => write!(f, "cleared"),
            Self::Uncleared => write!(f, "uncleared"),
            Self::Reconciled => write!(f, "reconciled"),
        }
    }
}

/// Flag color of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FlagColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl fmt::Display for FlagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        };
        write!(f, "{}", name)
    }
}

/// Server-side filter for transaction lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Uncategorized,
    Unapproved,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uncategorized => "uncategorized",
            Self::Unapproved => "unapproved",
        }
    }
}

/// One part of a split transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTransaction {
    pub id: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub amount: Milliunits,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub payee_id: Option<String>,
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub transfer_account_id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

/// A transaction as returned by the service
///
/// Category and payee listings return "hybrid" rows where a subtransaction
/// stands in for its parent; those rows carry `type` and
/// `parent_transaction_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: String,
    pub amount: Milliunits,
    #[serde(default)]
    pub memo: Option<String>,
    pub cleared: ClearedStatus,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub flag_color: Option<FlagColor>,
    #[serde(default)]
    pub flag_name: Option<String>,
    pub account_id: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub payee_id: Option<String>,
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub transfer_account_id: Option<String>,
    #[serde(default)]
    pub transfer_transaction_id: Option<String>,
    #[serde(default)]
    pub matched_transaction_id: Option<String>,
    #[serde(default)]
    pub import_id: Option<String>,
    #[serde(default)]
    pub subtransactions: Vec<SubTransaction>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub row_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_transaction_id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl Transaction {
    /// Whether this transaction is split across several categories
    pub fn is_split(&self) -> bool {
        !self.subtransactions.is_empty()
    }
}

/// Request body for creating or replacing a transaction
#[derive(Debug, Clone, Default, Serialize)]
pub struct SaveTransaction {
    pub account_id: String,
    pub date: String,
    pub amount: Milliunits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared: Option<ClearedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_color: Option<FlagColor>,
}

impl SaveTransaction {
    /// Start an update from the fields of an existing transaction
    pub fn from_existing(existing: &Transaction) -> Self {
        Self {
            account_id: existing.account_id.clone(),
            date: existing.date.clone(),
            amount: existing.amount,
            ..Default::default()
        }
    }
}

/// Response data of a transaction create call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTransactionsResponse {
    #[serde(default)]
    pub transaction_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(default)]
    pub duplicate_import_ids: Vec<String>,
    #[serde(default)]
    pub server_knowledge: i64,
}

/// Response data of a direct-import call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(default)]
    pub transaction_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_hybrid_transaction() {
        let json = r#"{
            "id": "t1",
            "date": "2026-03-01",
            "amount": -85500,
            "memo": null,
            "cleared": "reconciled",
            "approved": true,
            "flag_color": "purple",
            "account_id": "a1",
            "account_name": "Checking",
            "payee_name": "Costco",
            "category_name": "Groceries",
            "subtransactions": [],
            "type": "subtransaction",
            "parent_transaction_id": "t0",
            "deleted": false
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.cleared, ClearedStatus::Reconciled);
        assert_eq!(txn.flag_color, Some(FlagColor::Purple));
        assert_eq!(txn.row_type.as_deref(), Some("subtransaction"));
        assert!(!txn.is_split());
    }

    #[test]
    fn test_save_transaction_omits_unset_fields() {
        let save = SaveTransaction {
            account_id: "a1".into(),
            date: "2026-03-01".into(),
            amount: Milliunits::new(-85_500),
            payee_name: Some("Costco".into()),
            cleared: Some(ClearedStatus::Cleared),
            ..Default::default()
        };

        let json = serde_json::to_value(&save).unwrap();
        assert_eq!(json["amount"], -85500);
        assert_eq!(json["cleared"], "cleared");
        assert!(json.get("category_id").is_none());
        assert!(json.get("flag_color").is_none());
    }

    #[test]
    fn test_cleared_markers() {
        assert_eq!(ClearedStatus::Cleared.marker(), "C");
        assert_eq!(ClearedStatus::Reconciled.marker(), "R");
        assert_eq!(ClearedStatus::Uncleared.marker(), "U");
    }
}
