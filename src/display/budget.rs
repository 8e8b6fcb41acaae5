//! Budget display formatting

use super::output::format_detail;
use super::table::format_table;
use crate::models::{BudgetSettings, BudgetSummary};

/// Format the list of budgets
pub fn format_budget_list(budgets: &[BudgetSummary]) -> String {
    let rows = budgets
        .iter()
        .map(|b| {
            vec![
                b.name.clone(),
                b.id.clone(),
                b.last_modified_date().to_string(),
                b.first_month.clone().unwrap_or_default(),
                b.last_month.clone().unwrap_or_default(),
            ]
        })
        .collect();

    format_table(
        &["Name", "ID", "Last Modified", "First Month", "Last Month"],
        rows,
        &[],
    )
}

/// Format a budget's date and currency settings
pub fn format_budget_settings(settings: &BudgetSettings) -> String {
    let currency = &settings.currency_format;
    format_detail(&[
        ("Date Format", settings.date_format.format.clone()),
        ("Currency", currency.iso_code.clone()),
        ("Currency Symbol", currency.currency_symbol.clone()),
        ("Example", currency.example_format.clone()),
    ])
}
