//! Category display formatting

use super::currency::CurrencyFormatter;
use super::output::{format_detail, yes_no};
use super::table::format_table;
use crate::models::{Category, CategoryGroup};

/// Format category groups and their categories as one table
///
/// Deleted entries and the internal master group are always skipped; hidden
/// groups and categories only unless `include_hidden` is set.
pub fn format_category_list(
    groups: &[CategoryGroup],
    include_hidden: bool,
    money: &CurrencyFormatter,
) -> String {
    let mut rows = Vec::new();

    for group in groups.iter().filter(|g| g.is_listed(include_hidden)) {
        for category in &group.categories {
            if category.deleted || (category.hidden && !include_hidden) {
                continue;
            }
            rows.push(vec![
                group.name.clone(),
                category.name.clone(),
                money.format_colored(category.budgeted),
                money.format_colored(category.activity),
                money.format_colored(category.balance),
                category
                    .goal_type
                    .map(|g| g.code().to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
    }

    format_table(
        &["Group", "Category", "Budgeted", "Activity", "Balance", "Goal"],
        rows,
        &[2, 3, 4],
    )
}

/// Format a single category's details
pub fn format_category_details(category: &Category, money: &CurrencyFormatter) -> String {
    format_detail(&[
        ("Name", category.name.clone()),
        ("ID", category.id.clone()),
        (
            "Group",
            category.category_group_name.clone().unwrap_or_default(),
        ),
        ("Budgeted", money.format(category.budgeted)),
        ("Activity", money.format(category.activity)),
        ("Balance", money.format(category.balance)),
        (
            "Goal Type",
            category
                .goal_type
                .map(|g| g.code().to_string())
                .unwrap_or_else(|| "None".to_string()),
        ),
        (
            "Goal Target",
            category
                .goal_target
                .filter(|t| !t.is_zero())
                .map(|t| money.format(t))
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Hidden", yes_no(category.hidden)),
        ("Note", category.note.clone().unwrap_or_default()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<CategoryGroup> {
        serde_json::from_str(
            r#"[
                {"id": "g0", "name": "Internal Master Category", "categories": [
                    {"id": "c9", "name": "Inflow: Ready to Assign", "balance": 800000}
                ]},
                {"id": "g1", "name": "Bills", "categories": [
                    {"id": "c1", "name": "Rent", "budgeted": 1200000, "activity": -1200000, "balance": 0, "goal_type": "NEED"},
                    {"id": "c2", "name": "Gym", "hidden": true},
                    {"id": "c3", "name": "Cable", "deleted": true}
                ]},
                {"id": "g2", "name": "Hidden Categories", "categories": [
                    {"id": "c4", "name": "Old Hobby", "hidden": true}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_category_list_skips_hidden_and_internal() {
        let output = format_category_list(&groups(), false, &CurrencyFormatter::default());

        assert!(output.contains("Rent"));
        assert!(output.contains("$1,200.00"));
        assert!(output.contains("NEED"));
        assert!(!output.contains("Ready to Assign"));
        assert!(!output.contains("Gym"));
        assert!(!output.contains("Cable"));
        assert!(!output.contains("Old Hobby"));
    }

    #[test]
    fn test_category_list_include_hidden() {
        let output = format_category_list(&groups(), true, &CurrencyFormatter::default());

        assert!(output.contains("Gym"));
        assert!(output.contains("Old Hobby"));
        assert!(!output.contains("Cable"));
        assert!(!output.contains("Ready to Assign"));
    }

    #[test]
    fn test_category_details() {
        let category: Category = serde_json::from_str(
            r#"{"id": "c1", "name": "Rent", "category_group_name": "Bills",
                "budgeted": 1200000, "activity": 0, "balance": 1200000,
                "goal_type": "TB", "goal_target": 2400000, "note": "due 1st"}"#,
        )
        .unwrap();

        let output = format_category_details(&category, &CurrencyFormatter::default());
        assert!(output.contains("Group        Bills"));
        assert!(output.contains("Goal Type    TB"));
        assert!(output.contains("Goal Target  $2,400.00"));
        assert!(output.contains("Note         due 1st"));
    }
}
