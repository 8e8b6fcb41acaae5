//! Transaction CLI commands
//!
//! Implements CLI commands for listing, creating, updating and deleting
//! transactions, and for triggering a direct import.

use clap::{ArgAction, Args, Subcommand};

use super::{parse_amount, parse_date, parse_month, today, Context};
use crate::api::{TransactionQuery, TransactionScope};
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::ClinabResult;
use crate::models::ids::looks_like_canonical_id;
use crate::models::{ClearedStatus, FlagColor, SaveTransaction, Transaction, TransactionType};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions with optional filters
    List(ListArgs),

    /// Show full details for a transaction
    Show {
        /// Transaction ID
        id: String,
    },

    /// Create a transaction (negative = outflow, positive = inflow)
    #[command(after_help = "Example: clinab txn add -a Checking -p Costco -c Groceries -- -85.50")]
    Add(AddArgs),

    /// Update an existing transaction
    Update(UpdateArgs),

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },

    /// Import transactions from linked accounts
    Import,
}

/// Filters for `transactions list`
#[derive(Args)]
pub struct ListArgs {
    /// Only show transactions on or after this date (YYYY-MM-DD)
    #[arg(short, long)]
    since: Option<String>,

    /// Only show uncategorized or unapproved transactions
    #[arg(long = "type", value_enum)]
    transaction_type: Option<TransactionType>,

    /// Filter by account name or ID
    #[arg(short, long, group = "scope")]
    account: Option<String>,

    /// Filter by category name or ID
    #[arg(short, long, group = "scope")]
    category: Option<String>,

    /// Filter by payee name or ID
    #[arg(short, long, group = "scope")]
    payee: Option<String>,

    /// Filter by budget month ("current" or YYYY-MM-DD)
    #[arg(short, long, group = "scope")]
    month: Option<String>,

    /// Maximum number of transactions to show
    #[arg(short, long, default_value_t = 50)]
    limit: usize,
}

/// Arguments for `transactions add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount in major units (e.g. -85.50)
    #[arg(allow_hyphen_values = true)]
    amount: String,

    /// Account name or ID
    #[arg(short, long)]
    account: String,

    /// Payee name or ID (new names create a payee)
    #[arg(short, long)]
    payee: Option<String>,

    /// Category name or ID
    #[arg(short, long)]
    category: Option<String>,

    /// Memo
    #[arg(short, long)]
    memo: Option<String>,

    /// Date (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    date: Option<String>,

    /// Cleared status
    #[arg(long, value_enum, default_value_t = ClearedStatus::Cleared)]
    cleared: ClearedStatus,

    /// Whether the transaction is approved
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    approved: bool,

    /// Flag color
    #[arg(long, value_enum)]
    flag: Option<FlagColor>,
}

/// Arguments for `transactions update`
#[derive(Args)]
pub struct UpdateArgs {
    /// Transaction ID
    id: String,

    /// Move to another account (name or ID)
    #[arg(short, long)]
    account: Option<String>,

    /// Payee name or ID
    #[arg(short, long)]
    payee: Option<String>,

    /// Category name or ID
    #[arg(short, long)]
    category: Option<String>,

    /// Memo
    #[arg(short, long)]
    memo: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<String>,

    /// New amount in major units
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Cleared status
    #[arg(long, value_enum)]
    cleared: Option<ClearedStatus>,

    /// Approval
    #[arg(long, action = ArgAction::Set)]
    approved: Option<bool>,

    /// Flag color
    #[arg(long, value_enum)]
    flag: Option<FlagColor>,
}

/// Handle a transaction command
pub fn handle_transaction_command(ctx: &Context, cmd: TransactionCommands) -> ClinabResult<()> {
    match cmd {
        TransactionCommands::List(args) => list_transactions(ctx, args)?,

        TransactionCommands::Show { id } => {
            let transaction = ctx.client.get_transaction(&ctx.budget_id, &id)?;
            ctx.emit(&transaction, || {
                format_transaction_details(&transaction, ctx.money())
            })?;
        }

        TransactionCommands::Add(args) => add_transaction(ctx, args)?,

        TransactionCommands::Update(args) => update_transaction(ctx, args)?,

        TransactionCommands::Delete { id } => {
            let deleted = ctx.client.delete_transaction(&ctx.budget_id, &id)?;
            ctx.emit_success(&deleted, || format!("Deleted transaction {}", deleted.id))?;
        }

        TransactionCommands::Import => {
            let result = ctx.client.import_transactions(&ctx.budget_id)?;
            ctx.emit_success(&result, || {
                format!("Imported {} transaction(s)", result.transaction_ids.len())
            })?;
        }
    }

    Ok(())
}

fn list_transactions(ctx: &Context, args: ListArgs) -> ClinabResult<()> {
    let budget_id = ctx.budget_id.as_str();

    let query = TransactionQuery {
        since_date: args.since.as_deref().map(parse_date).transpose()?,
        transaction_type: args.transaction_type,
    };
    let month = args.month.as_deref().map(parse_month).transpose()?;

    let resolver = ctx.resolver();
    let scope = if let Some(account) = &args.account {
        TransactionScope::Account(resolver.resolve_account(budget_id, account)?)
    } else if let Some(category) = &args.category {
        TransactionScope::Category(resolver.resolve_category(budget_id, category)?)
    } else if let Some(payee) = &args.payee {
        TransactionScope::Payee(resolver.resolve_payee(budget_id, payee)?)
    } else if let Some(month) = month {
        TransactionScope::Month(month)
    } else {
        TransactionScope::All
    };

    let transactions: Vec<Transaction> = ctx
        .client
        .list_transactions(budget_id, &scope, &query)?
        .into_iter()
        .filter(|t| !t.deleted)
        .take(args.limit)
        .collect();

    ctx.emit(&transactions, || {
        format_transaction_list(&transactions, ctx.money())
    })
}

/// Fill the payee of a transaction: identifiers go in `payee_id`, anything
/// else in `payee_name` so the service can create the payee
fn set_payee(transaction: &mut SaveTransaction, payee: String) {
    if looks_like_canonical_id(&payee) {
        transaction.payee_id = Some(payee);
        transaction.payee_name = None;
    } else {
        transaction.payee_id = None;
        transaction.payee_name = Some(payee);
    }
}

fn add_transaction(ctx: &Context, args: AddArgs) -> ClinabResult<()> {
    let budget_id = ctx.budget_id.as_str();

    let amount = parse_amount(&args.amount)?;
    let date = match &args.date {
        Some(date) => parse_date(date)?,
        None => today(),
    };

    let resolver = ctx.resolver();
    let account_id = resolver.resolve_account(budget_id, &args.account)?;
    let category_id = args
        .category
        .as_deref()
        .map(|c| resolver.resolve_category(budget_id, c))
        .transpose()?;

    let mut transaction = SaveTransaction {
        account_id,
        date: date.clone(),
        amount,
        category_id,
        memo: args.memo,
        cleared: Some(args.cleared),
        approved: Some(args.approved),
        flag_color: args.flag,
        ..Default::default()
    };
    let payee_label = args.payee.clone().unwrap_or_else(|| "unknown".to_string());
    if let Some(payee) = args.payee {
        set_payee(&mut transaction, payee);
    }

    let result = ctx.client.create_transaction(budget_id, &transaction)?;

    ctx.emit_success(&result, || {
        format!(
            "Created transaction: {} at \"{}\" on {}",
            ctx.money().format(amount),
            payee_label,
            date
        )
    })
}

fn update_transaction(ctx: &Context, args: UpdateArgs) -> ClinabResult<()> {
    let budget_id = ctx.budget_id.as_str();

    let amount = args.amount.as_deref().map(parse_amount).transpose()?;
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let existing = ctx.client.get_transaction(budget_id, &args.id)?;
    let mut transaction = SaveTransaction::from_existing(&existing);

    let resolver = ctx.resolver();
    if let Some(account) = &args.account {
        transaction.account_id = resolver.resolve_account(budget_id, account)?;
    }
    if let Some(category) = &args.category {
        transaction.category_id = Some(resolver.resolve_category(budget_id, category)?);
    }
    if let Some(payee) = args.payee {
        set_payee(&mut transaction, payee);
    }
    if let Some(date) = date {
        transaction.date = date;
    }
    if let Some(amount) = amount {
        transaction.amount = amount;
    }
    transaction.memo = args.memo;
    transaction.cleared = args.cleared;
    transaction.approved = args.approved;
    transaction.flag_color = args.flag;

    let updated = ctx
        .client
        .update_transaction(budget_id, &existing.id, &transaction)?;

    ctx.emit_success(&updated, || format!("Updated transaction {}", updated.id))
}
