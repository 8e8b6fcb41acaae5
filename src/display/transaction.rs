//! Transaction display formatting

use super::currency::CurrencyFormatter;
use super::output::{format_detail, yes_no};
use super::table::format_table;
use crate::models::Transaction;

const UNCATEGORIZED: &str = "Uncategorized";

/// Format a transaction register
pub fn format_transaction_list(transactions: &[Transaction], money: &CurrencyFormatter) -> String {
    let rows = transactions
        .iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.payee_name.clone().unwrap_or_default(),
                t.category_name
                    .clone()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                money.format_colored(t.amount),
                t.account_name.clone(),
                t.cleared.marker().to_string(),
                t.memo.clone().unwrap_or_default(),
            ]
        })
        .collect();

    format_table(
        &["Date", "Payee", "Category", "Amount", "Account", "Clr", "Memo"],
        rows,
        &[3],
    )
}

/// Format a single transaction, with its split lines if any
pub fn format_transaction_details(transaction: &Transaction, money: &CurrencyFormatter) -> String {
    let mut fields = vec![
        ("ID", transaction.id.clone()),
        ("Date", transaction.date.clone()),
        ("Amount", money.format(transaction.amount)),
        ("Payee", transaction.payee_name.clone().unwrap_or_default()),
        (
            "Category",
            transaction
                .category_name
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
        ),
        ("Account", transaction.account_name.clone()),
        ("Memo", transaction.memo.clone().unwrap_or_default()),
        ("Cleared", transaction.cleared.to_string()),
        ("Approved", yes_no(transaction.approved)),
        (
            "Flag",
            transaction
                .flag_color
                .map(|f| f.to_string())
                .unwrap_or_else(|| "None".to_string()),
        ),
    ];

    let parts: Vec<_> = transaction
        .subtransactions
        .iter()
        .filter(|s| !s.deleted)
        .collect();
    if !parts.is_empty() {
        fields.push(("Split", format!("{} sub-transactions", parts.len())));
    }

    let mut output = format_detail(&fields);

    if !parts.is_empty() {
        let rows = parts
            .iter()
            .map(|s| {
                vec![
                    s.category_name.clone().unwrap_or_default(),
                    s.payee_name.clone().unwrap_or_default(),
                    money.format_colored(s.amount),
                    s.memo.clone().unwrap_or_default(),
                ]
            })
            .collect();
        output.push_str("\n  Sub-transactions:\n");
        output.push_str(&format_table(
            &["Category", "Payee", "Amount", "Memo"],
            rows,
            &[2],
        ));
        output.push('\n');
    }

    output
}
