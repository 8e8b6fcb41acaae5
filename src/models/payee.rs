//! Payee model

use serde::{Deserialize, Serialize};

/// A payee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payee {
    pub id: String,
    pub name: String,
    /// Set when the payee represents a transfer to another account
    #[serde(default)]
    pub transfer_account_id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl Payee {
    /// Whether this payee is a transfer payee
    pub fn is_transfer(&self) -> bool {
        self.transfer_account_id.is_some()
    }
}

/// A location where a payee was used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayeeLocation {
    pub id: String,
    pub payee_id: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(default)]
    pub deleted: bool,
}

/// Request body for renaming a payee
#[derive(Debug, Clone, Serialize)]
pub struct SavePayee {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_payee() {
        let json = r#"{
            "id": "p1",
            "name": "Transfer : Savings",
            "transfer_account_id": "a2",
            "deleted": false
        }"#;
        let payee: Payee = serde_json::from_str(json).unwrap();
        assert!(payee.is_transfer());

        let json = r#"{"id": "p2", "name": "Costco", "transfer_account_id": null}"#;
        let payee: Payee = serde_json::from_str(json).unwrap();
        assert!(!payee.is_transfer());
        assert!(!payee.deleted);
    }
}
