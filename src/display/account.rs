//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use std::collections::HashMap;

use super::currency::CurrencyFormatter;
use super::output::{format_detail, yes_no};
use super::table::format_table;
use crate::models::ids::short_id;
use crate::models::{Account, Milliunits};

/// Asset, liability and net totals over a set of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountTotals {
    pub assets: Milliunits,
    pub liabilities: Milliunits,
    pub net: Milliunits,
}

impl AccountTotals {
    /// Sum balances by asset/liability classification
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let assets: Milliunits = accounts
            .iter()
            .filter(|a| a.account_type.is_asset())
            .map(|a| a.balance)
            .sum();
        let liabilities: Milliunits = accounts
            .iter()
            .filter(|a| !a.account_type.is_asset())
            .map(|a| a.balance)
            .sum();

        Self {
            assets,
            liabilities,
            net: assets + liabilities,
        }
    }
}

/// Format a list of accounts as a table followed by a totals line
pub fn format_account_list(accounts: &[Account], money: &CurrencyFormatter) -> String {
    // Names shared by several accounts get an id prefix
    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    for account in accounts {
        *name_counts.entry(account.name.as_str()).or_default() += 1;
    }

    let rows = accounts
        .iter()
        .map(|account| {
            let name = if name_counts.get(account.name.as_str()).copied().unwrap_or(0) > 1 {
                format!("{} ({})", account.name, short_id(&account.id))
            } else {
                account.name.clone()
            };
            vec![
                name,
                account.account_type.to_string(),
                money.format_colored(account.balance),
                money.format_colored(account.cleared_balance),
                money.format_colored(account.uncleared_balance),
                if account.on_budget { "✓" } else { "-" }.to_string(),
            ]
        })
        .collect();

    let mut output = format_table(
        &["Name", "Type", "Balance", "Cleared", "Uncleared", "On Budget"],
        rows,
        &[2, 3, 4],
    );

    if !accounts.is_empty() {
        let totals = AccountTotals::from_accounts(accounts);
        output.push_str(&format!(
            "\n\n  {} accounts  Assets: {}  Liabilities: {}  Net: {}",
            accounts.len(),
            money.format(totals.assets),
            money.format(totals.liabilities),
            money.format(totals.net),
        ));
    }

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, money: &CurrencyFormatter) -> String {
    format_detail(&[
        ("Name", account.name.clone()),
        ("ID", account.id.clone()),
        ("Type", account.account_type.to_string()),
        ("On Budget", yes_no(account.on_budget)),
        ("Closed", yes_no(account.closed)),
        ("Balance", money.format(account.balance)),
        ("Cleared", money.format(account.cleared_balance)),
        ("Uncleared", money.format(account.uncleared_balance)),
        ("Note", account.note.clone().unwrap_or_default()),
        (
            "Last Reconciled",
            account
                .last_reconciled_at
                .clone()
                .unwrap_or_else(|| "Never".to_string()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    fn account(id: &str, name: &str, account_type: AccountType, balance: i64) -> Account {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "type": account_type.as_str(),
            "on_budget": true,
            "closed": false,
            "balance": balance,
            "cleared_balance": balance,
            "uncleared_balance": 0,
            "deleted": false
        }))
        .unwrap()
    }

    #[test]
    fn test_totals_on_milliunits() {
        let accounts = vec![
            account("a1", "Checking", AccountType::Checking, 1_250_000),
            account("a2", "Savings", AccountType::Savings, 10_000_000),
            account("a3", "Visa", AccountType::CreditCard, -420_500),
        ];
        let totals = AccountTotals::from_accounts(&accounts);

        assert_eq!(totals.assets, Milliunits::new(11_250_000));
        assert_eq!(totals.liabilities, Milliunits::new(-420_500));
        assert_eq!(totals.net, Milliunits::new(10_829_500));
    }

    #[test]
    fn test_account_list_footer() {
        let accounts = vec![
            account("a1", "Checking", AccountType::Checking, 1_250_000),
            account("a3", "Visa", AccountType::CreditCard, -420_500),
        ];
        let output = format_account_list(&accounts, &CurrencyFormatter::default());

        assert!(output.contains("$1,250.00"));
        assert!(output.contains("2 accounts  Assets: $1,250.00  Liabilities: -$420.50  Net: $829.50"));
    }

    #[test]
    fn test_duplicate_names_show_short_id() {
        let accounts = vec![
            account("11111111-aaaa", "Checking", AccountType::Checking, 0),
            account("22222222-bbbb", "Checking", AccountType::Checking, 0),
            account("33333333-cccc", "Cash", AccountType::Cash, 0),
        ];
        let output = format_account_list(&accounts, &CurrencyFormatter::default());

        assert!(output.contains("Checking (11111111)"));
        assert!(output.contains("Checking (22222222)"));
        assert!(!output.contains("Cash (33333333)"));
    }

    #[test]
    fn test_empty_account_list() {
        let output = format_account_list(&[], &CurrencyFormatter::default());
        assert_eq!(output, "  No results found.");
    }

    #[test]
    fn test_account_details() {
        let acct = account("a1", "Checking", AccountType::Checking, 1_250_000);
        let output = format_account_details(&acct, &CurrencyFormatter::default());

        assert!(output.contains("  Name             Checking\n"));
        assert!(output.contains("Balance          $1,250.00"));
        assert!(output.contains("Last Reconciled  Never"));
    }
}
