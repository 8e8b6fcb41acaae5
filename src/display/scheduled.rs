//! Scheduled transaction display formatting

use super::currency::CurrencyFormatter;
use super::output::format_detail;
use super::table::format_table;
use crate::models::ScheduledTransaction;

/// Format the list of scheduled transactions
pub fn format_scheduled_list(
    scheduled: &[ScheduledTransaction],
    money: &CurrencyFormatter,
) -> String {
    let rows = scheduled
        .iter()
        .map(|s| {
            vec![
                s.date_next.clone(),
                s.frequency.to_string(),
                s.payee_name.clone().unwrap_or_default(),
                s.category_name.clone().unwrap_or_default(),
                money.format_colored(s.amount),
                s.account_name.clone(),
                s.memo.clone().unwrap_or_default(),
            ]
        })
        .collect();

    format_table(
        &[
            "Next Date",
            "Frequency",
            "Payee",
            "Category",
            "Amount",
            "Account",
            "Memo",
        ],
        rows,
        &[4],
    )
}

/// Format a single scheduled transaction
pub fn format_scheduled_details(
    scheduled: &ScheduledTransaction,
    money: &CurrencyFormatter,
) -> String {
    let mut output = format_detail(&[
        ("ID", scheduled.id.clone()),
        ("First Date", scheduled.date_first.clone()),
        ("Next Date", scheduled.date_next.clone()),
        ("Frequency", scheduled.frequency.to_string()),
        ("Amount", money.format(scheduled.amount)),
        ("Payee", scheduled.payee_name.clone().unwrap_or_default()),
        ("Category", scheduled.category_name.clone().unwrap_or_default()),
        ("Account", scheduled.account_name.clone()),
        ("Memo", scheduled.memo.clone().unwrap_or_default()),
        (
            "Flag",
            scheduled
                .flag_color
                .map(|f| f.to_string())
                .unwrap_or_else(|| "None".to_string()),
        ),
    ]);

    let parts: Vec<_> = scheduled
        .subtransactions
        .iter()
        .filter(|s| !s.deleted)
        .collect();
    if !parts.is_empty() {
        let rows = parts
            .iter()
            .map(|s| {
                vec![
                    s.category_id.clone().unwrap_or_default(),
                    money.format_colored(s.amount),
                    s.memo.clone().unwrap_or_default(),
                ]
            })
            .collect();
        output.push_str("\n  Sub-transactions:\n");
        output.push_str(&format_table(&["Category", "Amount", "Memo"], rows, &[1]));
        output.push('\n');
    }

    output
}
