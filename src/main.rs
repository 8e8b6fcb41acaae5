use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use clinab::api::ApiClient;
use clinab::cli::{
    handle_account_command, handle_budget_command, handle_category_command,
    handle_config_command, handle_month_command, handle_payee_command, handle_scheduled_command,
    handle_transaction_command, handle_user_command, AccountCommands, BudgetCommands,
    CategoryCommands, Context, MonthCommands, PayeeCommands, ScheduledCommands,
    TransactionCommands,
};
use clinab::config::{ApiToken, ClinabPaths, Settings};
use clinab::display::{format_error, OutputFormat};
use clinab::services::Resolver;
use clinab::ClinabError;

const MISSING_TOKEN: &str = "No YNAB API token found. Set YNAB_TOKEN env var or use --token flag.\n\
                             Get your token at: https://app.ynab.com/settings/developer";

#[derive(Parser)]
#[command(
    name = "clinab",
    version,
    about = "Command-line client for the YNAB budgeting API",
    long_about = "clinab talks to your YNAB budget from the terminal. Budgets, accounts, \
                  categories and payees can be referred to by name or by ID."
)]
struct Cli {
    /// YNAB personal access token
    #[arg(short, long, global = true, env = "YNAB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Budget name or ID (default: last-used)
    #[arg(short, long, global = true)]
    budget: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Shorthand for --output json
    #[arg(long, global = true)]
    json: bool,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_format(&self, configured: Option<OutputFormat>) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        self.output.or(configured).unwrap_or_default()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List budgets and show budget settings
    #[command(subcommand)]
    Budgets(BudgetCommands),

    /// Manage accounts
    #[command(subcommand)]
    Accounts(AccountCommands),

    /// Manage categories and assign money
    #[command(subcommand, alias = "cat")]
    Categories(CategoryCommands),

    /// Manage transactions
    #[command(subcommand, alias = "txn")]
    Transactions(TransactionCommands),

    /// Manage payees
    #[command(subcommand)]
    Payees(PayeeCommands),

    /// View budget month summaries and details
    #[command(subcommand)]
    Months(MonthCommands),

    /// Manage scheduled/recurring transactions
    #[command(subcommand, alias = "sched")]
    Scheduled(ScheduledCommands),

    /// Show the authenticated user
    User,

    /// Show the settings file location and effective settings
    Config,
}

impl Commands {
    /// Whether the command needs the active budget resolved first
    fn is_budget_scoped(&self) -> bool {
        match self {
            Commands::Budgets(cmd) => cmd.is_budget_scoped(),
            Commands::User | Commands::Config => false,
            _ => true,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn load_settings() -> Result<(ClinabPaths, Settings)> {
    let paths = ClinabPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    debug!("Settings file: {}", paths.settings_file().display());
    Ok((paths, settings))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loaded = load_settings();
    let output = cli.output_format(loaded.as_ref().ok().map(|(_, s)| s.output));

    match loaded.and_then(|(paths, settings)| run(cli, &paths, &settings, output)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(output, &e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, paths: &ClinabPaths, settings: &Settings, output: OutputFormat) -> Result<()> {
    if let Commands::Config = cli.command {
        handle_config_command(paths, settings, output)?;
        return Ok(());
    }

    let token = match cli.token.map(ApiToken::new) {
        Some(token) if !token.is_empty() => token,
        _ => match &settings.token {
            Some(token) if !token.is_empty() => token.clone(),
            _ => return Err(ClinabError::Config(MISSING_TOKEN.to_string()).into()),
        },
    };

    let base_url = cli.base_url.as_deref().unwrap_or(&settings.base_url);
    let client = ApiClient::new(base_url, &token)?;
    info!("Using API at {}", client.base_url());

    let budget = cli.budget.as_deref().unwrap_or(&settings.budget);
    let budget_id = if cli.command.is_budget_scoped() {
        Resolver::new(&client).resolve_budget(budget)?
    } else {
        budget.to_string()
    };
    debug!("Active budget: {}", budget_id);

    let ctx = Context::new(client, budget_id, output);

    match cli.command {
        Commands::Budgets(cmd) => handle_budget_command(&ctx, cmd)?,
        Commands::Accounts(cmd) => handle_account_command(&ctx, cmd)?,
        Commands::Categories(cmd) => handle_category_command(&ctx, cmd)?,
        Commands::Transactions(cmd) => handle_transaction_command(&ctx, cmd)?,
        Commands::Payees(cmd) => handle_payee_command(&ctx, cmd)?,
        Commands::Months(cmd) => handle_month_command(&ctx, cmd)?,
        Commands::Scheduled(cmd) => handle_scheduled_command(&ctx, cmd)?,
        Commands::User => handle_user_command(&ctx)?,
        Commands::Config => handle_config_command(paths, settings, output)?,
    }

    Ok(())
}
