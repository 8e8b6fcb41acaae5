//! Payee display formatting

use super::output::format_detail;
use super::table::format_table;
use crate::models::{Payee, PayeeLocation};

/// Format the list of payees
pub fn format_payee_list(payees: &[Payee]) -> String {
    let rows = payees
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.id.clone(),
                if p.is_transfer() { "Yes" } else { "-" }.to_string(),
            ]
        })
        .collect();

    format_table(&["Name", "ID", "Transfer"], rows, &[])
}

/// Format a single payee's details
pub fn format_payee_details(payee: &Payee) -> String {
    format_detail(&[
        ("Name", payee.name.clone()),
        ("ID", payee.id.clone()),
        (
            "Transfer Account",
            payee
                .transfer_account_id
                .clone()
                .unwrap_or_else(|| "None".to_string()),
        ),
    ])
}

/// Format payee locations
pub fn format_payee_locations(locations: &[PayeeLocation]) -> String {
    if locations.is_empty() {
        return "  No payee locations found.".to_string();
    }

    let rows = locations
        .iter()
        .map(|l| vec![l.payee_id.clone(), l.latitude.clone(), l.longitude.clone()])
        .collect();

    format_table(&["Payee ID", "Latitude", "Longitude"], rows, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payee_list_marks_transfers() {
        let payees: Vec<Payee> = serde_json::from_str(
            r#"[
                {"id": "p1", "name": "Costco"},
                {"id": "p2", "name": "Transfer : Savings", "transfer_account_id": "a2"}
            ]"#,
        )
        .unwrap();

        let output = format_payee_list(&payees);
        let transfer_row = output.lines().find(|l| l.contains("Savings")).unwrap();
        assert!(transfer_row.contains("Yes"));
        let plain_row = output.lines().find(|l| l.contains("Costco")).unwrap();
        assert!(!plain_row.contains("Yes"));
    }

    #[test]
    fn test_payee_details() {
        let payee: Payee = serde_json::from_str(r#"{"id": "p1", "name": "Costco"}"#).unwrap();
        let output = format_payee_details(&payee);
        assert!(output.contains("  Transfer Account  None\n"));
    }

    #[test]
    fn test_no_locations() {
        assert_eq!(format_payee_locations(&[]), "  No payee locations found.");
    }
}
