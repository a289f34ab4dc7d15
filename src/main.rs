use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_history_command, print_usage, ExpenseCommands,
    DEFAULT_HISTORY_LIMIT,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Record, update, delete, list and filter your expenses from the \
                  command line. Everything is kept in a single JSON file in your \
                  home directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.print()?,
                ErrorKind::InvalidSubcommand => {
                    if let Some(ContextValue::String(command)) =
                        err.get(ContextKind::InvalidSubcommand)
                    {
                        println!("Unknown command: {}", command);
                    }
                    print_usage();
                }
                _ => print_usage(),
            }
            return Ok(());
        }
    };

    let Some(command) = cli.command else {
        print_usage();
        return Ok(());
    };

    let paths = match ExpensePaths::new() {
        Ok(paths) => paths,
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let settings = match Settings::load_or_create(&paths) {
        Ok(settings) => settings,
        Err(e) => {
            println!("Error loading settings: {}", e);
            return Ok(());
        }
    };

    let storage = match Storage::new(paths) {
        Ok(storage) if settings.audit_log => storage,
        Ok(storage) => storage.without_audit(),
        Err(e) => {
            println!("Error opening storage: {}", e);
            return Ok(());
        }
    };

    match command {
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd),
        Commands::History { limit } => handle_history_command(&storage, &settings, limit),
        Commands::Config => {
            let paths = storage.paths();
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            match storage.expenses.count() {
                Ok(count) => println!("Stored expenses: {}", count),
                Err(e) => println!("Stored expenses: unavailable ({})", e),
            }
            println!();
            println!("Settings:");
            println!("  Date format: {}", settings.date_format);
            println!("  Audit log:   {}", if settings.audit_log { "on" } else { "off" });
        }
    }

    Ok(())
}
