//! Scheduled transaction CLI commands
//!
//! Recurring transactions: list, inspect, create, replace and delete.

use clap::{Args, Subcommand};

use super::{parse_amount, parse_date, today, Context};
use crate::display::{format_scheduled_details, format_scheduled_list};
use crate::error::ClinabResult;
use crate::models::{FlagColor, Frequency, SaveScheduledTransaction, ScheduledTransaction};

/// Scheduled transaction subcommands
#[derive(Subcommand)]
pub enum ScheduledCommands {
    /// List all scheduled transactions
    List,

    /// Show details for a scheduled transaction
    Show {
        /// Scheduled transaction ID
        id: String,
    },

    /// Create a scheduled transaction (negative = outflow)
    #[command(
        after_help = "Example: clinab sched add -a Checking -p Landlord -f monthly -- -1200"
    )]
    Add(AddArgs),

    /// Update a scheduled transaction
    Update(UpdateArgs),

    /// Delete a scheduled transaction
    Delete {
        /// Scheduled transaction ID
        id: String,
    },
}

/// Arguments for `scheduled add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount in major units
    #[arg(allow_hyphen_values = true)]
    amount: String,

    /// Account name or ID
    #[arg(short, long)]
    account: String,

    /// How often the transaction repeats
    #[arg(short, long, value_enum)]
    frequency: Frequency,

    /// Payee name
    #[arg(short, long)]
    payee: Option<String>,

    /// Category name or ID
    #[arg(short, long)]
    category: Option<String>,

    /// Memo
    #[arg(short, long)]
    memo: Option<String>,

    /// First date (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    date: Option<String>,

    /// Flag color
    #[arg(long, value_enum)]
    flag: Option<FlagColor>,
}

/// Arguments for `scheduled update`
#[derive(Args)]
pub struct UpdateArgs {
    /// Scheduled transaction ID
    id: String,

    /// New amount in major units
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Account name or ID
    #[arg(short, long)]
    account: Option<String>,

    /// How often the transaction repeats
    #[arg(short, long, value_enum)]
    frequency: Option<Frequency>,

    /// Payee name
    #[arg(short, long)]
    payee: Option<String>,

    /// Category name or ID
    #[arg(short, long)]
    category: Option<String>,

    /// Memo
    #[arg(short, long)]
    memo: Option<String>,

    /// Next date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<String>,

    /// Flag color
    #[arg(long, value_enum)]
    flag: Option<FlagColor>,
}

/// Handle a scheduled transaction command
pub fn handle_scheduled_command(ctx: &Context, cmd: ScheduledCommands) -> ClinabResult<()> {
    let budget_id = ctx.budget_id.as_str();

    match cmd {
        ScheduledCommands::List => {
            let scheduled: Vec<ScheduledTransaction> = ctx
                .client
                .list_scheduled_transactions(budget_id)?
                .into_iter()
                .filter(|s| !s.deleted)
                .collect();
            ctx.emit(&scheduled, || format_scheduled_list(&scheduled, ctx.money()))?;
        }

        ScheduledCommands::Show { id } => {
            let scheduled = ctx.client.get_scheduled_transaction(budget_id, &id)?;
            ctx.emit(&scheduled, || {
                format_scheduled_details(&scheduled, ctx.money())
            })?;
        }

        ScheduledCommands::Add(args) => add_scheduled(ctx, args)?,

        ScheduledCommands::Update(args) => update_scheduled(ctx, args)?,

        ScheduledCommands::Delete { id } => {
            let deleted = ctx.client.delete_scheduled_transaction(budget_id, &id)?;
            ctx.emit_success(&deleted, || {
                format!("Deleted scheduled transaction {}", deleted.id)
            })?;
        }
    }

    Ok(())
}

fn add_scheduled(ctx: &Context, args: AddArgs) -> ClinabResult<()> {
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

    let scheduled = SaveScheduledTransaction {
        account_id,
        date,
        amount,
        frequency: args.frequency,
        payee_id: None,
        payee_name: args.payee,
        category_id,
        memo: args.memo,
        flag_color: args.flag,
    };
    let created = ctx.client.create_scheduled_transaction(budget_id, &scheduled)?;

    ctx.emit_success(&created, || {
        format!(
            "Created scheduled transaction: {} ({})",
            ctx.money().format(amount),
            args.frequency
        )
    })
}

fn update_scheduled(ctx: &Context, args: UpdateArgs) -> ClinabResult<()> {
    let budget_id = ctx.budget_id.as_str();

    let amount = args.amount.as_deref().map(parse_amount).transpose()?;
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let existing = ctx.client.get_scheduled_transaction(budget_id, &args.id)?;
    let mut scheduled = SaveScheduledTransaction::from_existing(&existing);

    let resolver = ctx.resolver();
    if let Some(account) = &args.account {
        scheduled.account_id = resolver.resolve_account(budget_id, account)?;
    }
    if let Some(category) = &args.category {
        scheduled.category_id = Some(resolver.resolve_category(budget_id, category)?);
    }
    if let Some(payee) = args.payee {
        scheduled.payee_id = None;
        scheduled.payee_name = Some(payee);
    }
    if let Some(amount) = amount {
        scheduled.amount = amount;
    }
    if let Some(date) = date {
        scheduled.date = date;
    }
    if let Some(frequency) = args.frequency {
        scheduled.frequency = frequency;
    }
    if args.memo.is_some() {
        scheduled.memo = args.memo;
    }
    if args.flag.is_some() {
        scheduled.flag_color = args.flag;
    }

    let updated = ctx
        .client
        .update_scheduled_transaction(budget_id, &existing.id, &scheduled)?;

    ctx.emit_success(&updated, || {
        format!("Updated scheduled transaction {}", updated.id)
    })
}
