//! Account model
//!
//! Represents financial accounts (checking, savings, credit cards, loans, etc.)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Milliunits;

/// Type of financial account, spelled the way the service spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    Checking,
    Savings,
    Cash,
    CreditCard,
    LineOfCredit,
    OtherAsset,
    OtherLiability,
    Mortgage,
    AutoLoan,
    StudentLoan,
    PersonalLoan,
    MedicalDebt,
    OtherDebt,
}

impl AccountType {
    /// Every account type, in the order the service documents them
    pub const ALL: [AccountType; 13] = [
        Self::Checking,
        Self::Savings,
        Self::Cash,
        Self::CreditCard,
        Self::LineOfCredit,
        Self::OtherAsset,
        Self::OtherLiability,
        Self::Mortgage,
        Self::AutoLoan,
        Self::StudentLoan,
        Self::PersonalLoan,
        Self::MedicalDebt,
        Self::OtherDebt,
    ];

    /// The service's name for this type (e.g. "creditCard")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Cash => "cash",
            Self::CreditCard => "creditCard",
            Self::LineOfCredit => "lineOfCredit",
            Self::OtherAsset => "otherAsset",
            Self::OtherLiability => "otherLiability",
            Self::Mortgage => "mortgage",
            Self::AutoLoan => "autoLoan",
            Self::StudentLoan => "studentLoan",
            Self::PersonalLoan => "personalLoan",
            Self::MedicalDebt => "medicalDebt",
            Self::OtherDebt => "otherDebt",
        }
    }

    /// Returns true for accounts that hold money rather than owe it
    pub fn is_asset(&self) -> bool {
        matches!(
            self,
            Self::Checking | Self::Savings | Self::Cash | Self::OtherAsset
        )
    }

    /// Parse account type from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// Comma-separated list of valid names, for help and error messages
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Whether this account is included in the budget
    pub on_budget: bool,

    #[serde(default)]
    pub closed: bool,

    #[serde(default)]
    pub note: Option<String>,

    pub balance: Milliunits,

    pub cleared_balance: Milliunits,

    pub uncleared_balance: Milliunits,

    #[serde(default)]
    pub transfer_payee_id: Option<String>,

    #[serde(default)]
    pub direct_import_linked: bool,

    #[serde(default)]
    pub direct_import_in_error: bool,

    #[serde(default)]
    pub last_reconciled_at: Option<String>,

    #[serde(default)]
    pub debt_original_balance: Option<Milliunits>,

    /// Soft-deleted on the server
    #[serde(default)]
    pub deleted: bool,
}

impl Account {
    /// Whether this account appears in listings
    pub fn is_listed(&self, include_closed: bool) -> bool {
        !self.deleted && (include_closed || !self.closed)
    }
}

/// Request body for creating an account
#[derive(Debug, Clone, Serialize)]
pub struct SaveAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub balance: Milliunits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_type() {
        assert_eq!(AccountType::parse("checking"), Some(AccountType::Checking));
        assert_eq!(AccountType::parse("creditCard"), Some(AccountType::CreditCard));
        assert_eq!(AccountType::parse("CREDITCARD"), Some(AccountType::CreditCard));
        assert_eq!(AccountType::parse("credit card"), None);
        assert_eq!(AccountType::parse("brokerage"), None);
    }

    #[test]
    fn test_asset_classification() {
        assert!(AccountType::Checking.is_asset());
        assert!(AccountType::OtherAsset.is_asset());
        assert!(!AccountType::CreditCard.is_asset());
        assert!(!AccountType::Mortgage.is_asset());
    }

    #[test]
    fn test_valid_names() {
        let names = AccountType::valid_names();
        assert!(names.starts_with("checking, savings, cash, creditCard"));
        assert!(names.ends_with("otherDebt"));
    }

    #[test]
    fn test_deserialize_account() {
        let json = r#"{
            "id": "a1",
            "name": "Checking",
            "type": "checking",
            "on_budget": true,
            "closed": false,
            "note": null,
            "balance": 1250000,
            "cleared_balance": 1000000,
            "uncleared_balance": 250000,
            "transfer_payee_id": "p1",
            "deleted": false
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Checking);
        assert_eq!(account.balance, Milliunits::new(1_250_000));
        assert!(account.note.is_none());
        assert!(account.is_listed(false));

        let closed = Account {
            closed: true,
            ..account.clone()
        };
        assert!(!closed.is_listed(false));
        assert!(closed.is_listed(true));

        let deleted = Account {
            deleted: true,
            ..account
        };
        assert!(!deleted.is_listed(true));
    }

    #[test]
    fn test_serialize_save_account() {
        let save = SaveAccount {
            name: "Visa".into(),
            account_type: AccountType::CreditCard,
            balance: Milliunits::new(-50_000),
        };
        let json = serde_json::to_value(&save).unwrap();
        assert_eq!(json["type"], "creditCard");
        assert_eq!(json["balance"], -50000);
    }
}
