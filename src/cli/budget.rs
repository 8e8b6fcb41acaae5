//! Budget CLI commands
//!
//! Implements CLI commands for listing budgets and inspecting their settings.

use clap::Subcommand;

use super::Context;
use crate::display::{format_budget_list, format_budget_settings};
use crate::error::ClinabResult;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List all budgets accessible with your token
    List,

    /// Show date and currency settings of the active budget
    Settings,
}

impl BudgetCommands {
    /// Whether the command operates on the active budget
    pub fn is_budget_scoped(&self) -> bool {
        matches!(self, Self::Settings)
    }
}

/// Handle a budget command
pub fn handle_budget_command(ctx: &Context, cmd: BudgetCommands) -> ClinabResult<()> {
    match cmd {
        BudgetCommands::List => {
            let budgets = ctx.client.list_budgets(false)?;
            ctx.emit(&budgets, || format_budget_list(&budgets))?;
        }

        BudgetCommands::Settings => {
            let settings = ctx.client.get_budget_settings(&ctx.budget_id)?;
            ctx.emit(&settings, || format_budget_settings(&settings))?;
        }
    }

    Ok(())
}
