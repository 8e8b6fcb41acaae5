//! Category CLI commands
//!
//! Implements CLI commands for categories and category groups, including
//! assigning money to a category for a month.

use clap::Subcommand;

use super::{parse_amount, parse_month, Context, CURRENT_MONTH};
use crate::display::{format_category_details, format_category_list};
use crate::error::{ClinabError, ClinabResult};
use crate::models::{SaveCategory, SaveCategoryGroup, SaveMonthCategory};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all category groups and their categories
    List {
        /// Include hidden categories
        #[arg(long)]
        include_hidden: bool,
    },

    /// Show details for a category
    Show {
        /// Category name or ID
        category: String,
        /// Show amounts for this month ("current" or YYYY-MM-DD)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set the amount assigned to a category for a month
    Budget {
        /// Category name or ID
        category: String,
        /// Amount to assign (e.g. 500 or 125.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Month ("current" or YYYY-MM-DD)
        #[arg(short, long, default_value = CURRENT_MONTH)]
        month: String,
    },

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Category group name or ID
        #[arg(short, long)]
        group: String,
        /// Category note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Update a category's name or note
    Update {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New note
        #[arg(long)]
        note: Option<String>,
    },

    /// Create a new category group
    CreateGroup {
        /// Group name
        name: String,
    },

    /// Rename a category group
    UpdateGroup {
        /// Category group name or ID
        group: String,
        /// New group name
        #[arg(short, long)]
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(ctx: &Context, cmd: CategoryCommands) -> ClinabResult<()> {
    let budget_id = ctx.budget_id.as_str();

    match cmd {
        CategoryCommands::List { include_hidden } => {
            let groups = ctx.client.list_category_groups(budget_id)?;
            ctx.emit(&groups, || {
                format_category_list(&groups, include_hidden, ctx.money())
            })?;
        }

        CategoryCommands::Show { category, month } => {
            let month = month.as_deref().map(parse_month).transpose()?;

            let category_id = ctx.resolver().resolve_category(budget_id, &category)?;
            let found = match &month {
                Some(month) => ctx.client.get_month_category(budget_id, month, &category_id)?,
                None => ctx.client.get_category(budget_id, &category_id)?,
            };

            ctx.emit(&found, || format_category_details(&found, ctx.money()))?;
        }

        CategoryCommands::Budget {
            category,
            amount,
            month,
        } => {
            let budgeted = parse_amount(&amount)?;
            let month = parse_month(&month)?;

            let category_id = ctx.resolver().resolve_category(budget_id, &category)?;
            let updated = ctx.client.update_month_category(
                budget_id,
                &month,
                &category_id,
                &SaveMonthCategory { budgeted },
            )?;

            ctx.emit_success(&updated, || {
                format!(
                    "Set \"{}\" budget to {} for {}",
                    updated.name,
                    ctx.money().format(updated.budgeted),
                    month
                )
            })?;
        }

        CategoryCommands::Create { name, group, note } => {
            let group_id = ctx.resolver().resolve_category_group(budget_id, &group)?;
            let created = ctx.client.create_category(
                budget_id,
                &SaveCategory {
                    name: Some(name),
                    note,
                    category_group_id: Some(group_id),
                },
            )?;

            ctx.emit_success(&created, || {
                format!(
                    "Created category \"{}\" in group \"{}\"",
                    created.name,
                    created.category_group_name.as_deref().unwrap_or(&group)
                )
            })?;
        }

        CategoryCommands::Update {
            category,
            name,
            note,
        } => {
            if name.is_none() && note.is_none() {
                return Err(ClinabError::Validation(
                    "No changes specified. Use --name or --note.".into(),
                ));
            }

            let category_id = ctx.resolver().resolve_category(budget_id, &category)?;
            let updated = ctx.client.update_category(
                budget_id,
                &category_id,
                &SaveCategory {
                    name,
                    note,
                    category_group_id: None,
                },
            )?;

            ctx.emit_success(&updated, || {
                format!("Updated category \"{}\"", updated.name)
            })?;
        }

        CategoryCommands::CreateGroup { name } => {
            let created = ctx
                .client
                .create_category_group(budget_id, &SaveCategoryGroup { name })?;

            ctx.emit_success(&created, || {
                format!("Created category group \"{}\"", created.name)
            })?;
        }

        CategoryCommands::UpdateGroup { group, name } => {
            let group_id = ctx.resolver().resolve_category_group(budget_id, &group)?;
            let updated = ctx.client.update_category_group(
                budget_id,
                &group_id,
                &SaveCategoryGroup { name },
            )?;

            ctx.emit_success(&updated, || {
                format!("Renamed category group to \"{}\"", updated.name)
            })?;
        }
    }

    Ok(())
}
