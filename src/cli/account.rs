//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use super::{parse_amount, Context};
use crate::display::{format_account_details, format_account_list};
use crate::error::{ClinabError, ClinabResult};
use crate::models::{Account, AccountType, SaveAccount};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List all accounts in the budget
    List {
        /// Include closed accounts
        #[arg(long)]
        include_closed: bool,
    },

    /// Show details for an account
    Show {
        /// Account name or ID
        account: String,
    },

    /// Create a new account
    #[command(after_help = "Account types: checking, savings, cash, creditCard, lineOfCredit, \
        otherAsset, otherLiability, mortgage, autoLoan, studentLoan, personalLoan, medicalDebt, \
        otherDebt\n\nBalance is in major units (e.g. 1000.00 or -500.50).")]
    Create {
        /// Account name
        name: String,
        /// Account type (e.g. checking, creditCard)
        #[arg(value_name = "TYPE")]
        account_type: String,
        /// Starting balance
        #[arg(allow_hyphen_values = true)]
        balance: String,
    },
}

/// Handle an account command
pub fn handle_account_command(ctx: &Context, cmd: AccountCommands) -> ClinabResult<()> {
    match cmd {
        AccountCommands::List { include_closed } => {
            let accounts: Vec<Account> = ctx
                .client
                .list_accounts(&ctx.budget_id)?
                .into_iter()
                .filter(|a| a.is_listed(include_closed))
                .collect();

            ctx.emit(&accounts, || format_account_list(&accounts, ctx.money()))?;
        }

        AccountCommands::Show { account } => {
            let account_id = ctx.resolver().resolve_account(&ctx.budget_id, &account)?;
            let found = ctx.client.get_account(&ctx.budget_id, &account_id)?;

            ctx.emit(&found, || format_account_details(&found, ctx.money()))?;
        }

        AccountCommands::Create {
            name,
            account_type,
            balance,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                ClinabError::Validation(format!(
                    "Invalid account type '{}'. Valid types: {}",
                    account_type,
                    AccountType::valid_names()
                ))
            })?;
            let balance = parse_amount(&balance)?;

            let name = name.trim();
            if name.is_empty() {
                return Err(ClinabError::Validation(
                    "Account name cannot be empty".into(),
                ));
            }

            let created = ctx.client.create_account(
                &ctx.budget_id,
                &SaveAccount {
                    name: name.to_string(),
                    account_type,
                    balance,
                },
            )?;

            ctx.emit_success(&created, || {
                format!(
                    "Created account \"{}\" ({}) with balance {}",
                    created.name,
                    created.account_type,
                    ctx.money().format(created.balance)
                )
            })?;
        }
    }

    Ok(())
}
