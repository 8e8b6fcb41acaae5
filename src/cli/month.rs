//! Budget month CLI commands

use clap::Subcommand;

use super::{parse_month, Context};
use crate::display::{format_month_details, format_month_list};
use crate::error::ClinabResult;
use crate::models::MonthSummary;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// List all budget months with summary data
    List,

    /// Show details for a month
    #[command(after_help = "Examples:\n  clinab months show current\n  clinab months show 2026-02-01")]
    Show {
        /// Month ("current" or YYYY-MM-DD)
        month: String,
    },
}

/// Handle a month command
pub fn handle_month_command(ctx: &Context, cmd: MonthCommands) -> ClinabResult<()> {
    match cmd {
        MonthCommands::List => {
            let months: Vec<MonthSummary> = ctx
                .client
                .list_months(&ctx.budget_id)?
                .into_iter()
                .filter(|m| !m.deleted)
                .collect();
            ctx.emit(&months, || format_month_list(&months, ctx.money()))?;
        }

        MonthCommands::Show { month } => {
            let month = parse_month(&month)?;
            let detail = ctx.client.get_month(&ctx.budget_id, &month)?;
            ctx.emit(&detail, || format_month_details(&detail, ctx.money()))?;
        }
    }

    Ok(())
}
