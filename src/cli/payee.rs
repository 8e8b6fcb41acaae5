//! Payee CLI commands

use clap::Subcommand;

use super::Context;
use crate::display::{format_payee_details, format_payee_list, format_payee_locations};
use crate::error::{ClinabError, ClinabResult};
use crate::models::{Payee, SavePayee};

/// Payee subcommands
#[derive(Subcommand)]
pub enum PayeeCommands {
    /// List all payees in the budget
    List,

    /// Show details for a payee
    Show {
        /// Payee name or ID
        payee: String,
    },

    /// Rename a payee
    #[command(after_help = "Example: clinab payees rename \"Wal-Mart\" --name \"Walmart\"")]
    Rename {
        /// Payee name or ID
        payee: String,
        /// New payee name
        #[arg(short, long)]
        name: String,
    },

    /// List payee locations
    Locations {
        /// Only show locations of this payee (name or ID)
        #[arg(short, long)]
        payee: Option<String>,
    },
}

/// Handle a payee command
pub fn handle_payee_command(ctx: &Context, cmd: PayeeCommands) -> ClinabResult<()> {
    let budget_id = ctx.budget_id.as_str();

    match cmd {
        PayeeCommands::List => {
            let payees: Vec<Payee> = ctx
                .client
                .list_payees(budget_id)?
                .into_iter()
                .filter(|p| !p.deleted)
                .collect();
            ctx.emit(&payees, || format_payee_list(&payees))?;
        }

        PayeeCommands::Show { payee } => {
            let payee_id = ctx.resolver().resolve_payee(budget_id, &payee)?;
            let payee = ctx.client.get_payee(budget_id, &payee_id)?;
            ctx.emit(&payee, || format_payee_details(&payee))?;
        }

        PayeeCommands::Rename { payee, name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(ClinabError::Validation(
                    "Payee name cannot be empty".to_string(),
                ));
            }

            let payee_id = ctx.resolver().resolve_payee(budget_id, &payee)?;
            let updated = ctx.client.update_payee(
                budget_id,
                &payee_id,
                &SavePayee {
                    name: name.to_string(),
                },
            )?;
            ctx.emit_success(&updated, || {
                format!("Renamed payee to \"{}\"", updated.name)
            })?;
        }

        PayeeCommands::Locations { payee } => {
            let locations = match payee {
                Some(payee) => {
                    let payee_id = ctx.resolver().resolve_payee(budget_id, &payee)?;
                    ctx.client.list_payee_locations_for(budget_id, &payee_id)?
                }
                None => ctx.client.list_payee_locations(budget_id)?,
            };
            ctx.emit(&locations, || format_payee_locations(&locations))?;
        }
    }

    Ok(())
}
