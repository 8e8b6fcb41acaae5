//! Budget month display formatting

use super::currency::CurrencyFormatter;
use super::output::format_detail;
use super::table::format_table;
use crate::models::{MonthDetail, MonthSummary};

/// Format the list of budget months
pub fn format_month_list(months: &[MonthSummary], money: &CurrencyFormatter) -> String {
    let rows = months
        .iter()
        .map(|m| {
            vec![
                m.month.clone(),
                money.format_colored(m.income),
                money.format_colored(m.budgeted),
                money.format_colored(m.activity),
                money.format_colored(m.to_be_budgeted),
                m.age_of_money_label(),
            ]
        })
        .collect();

    format_table(
        &[
            "Month",
            "Income",
            "Budgeted",
            "Activity",
            "To Be Budgeted",
            "Age of Money",
        ],
        rows,
        &[1, 2, 3, 4, 5],
    )
}

/// Format a month summary with its category breakdown
pub fn format_month_details(detail: &MonthDetail, money: &CurrencyFormatter) -> String {
    let summary = &detail.summary;
    let mut output = format_detail(&[
        ("Month", summary.month.clone()),
        ("Income", money.format(summary.income)),
        ("Budgeted", money.format(summary.budgeted)),
        ("Activity", money.format(summary.activity)),
        ("To Be Budgeted", money.format(summary.to_be_budgeted)),
        ("Age of Money", summary.age_of_money_label()),
        ("Note", summary.note.clone().unwrap_or_default()),
    ]);

    if !detail.categories.is_empty() {
        let rows = detail
            .visible_categories()
            .map(|c| {
                vec![
                    c.name.clone(),
                    money.format_colored(c.budgeted),
                    money.format_colored(c.activity),
                    money.format_colored(c.balance),
                ]
            })
            .collect();

        output.push_str("\n  Category Breakdown:\n");
        output.push_str(&format_table(
            &["Category", "Budgeted", "Activity", "Balance"],
            rows,
            &[1, 2, 3],
        ));
        output.push('\n');
    }

    output
}
