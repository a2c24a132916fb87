use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budgetpad::cli;
use budgetpad::config::BudgetPaths;
use budgetpad::controller::Controller;
use budgetpad::export::ExportFormat;
use budgetpad::storage::SnapshotStore;
use budgetpad::tui;

#[derive(Parser)]
#[command(
    name = "budgetpad",
    version,
    about = "Terminal-based monthly budget calculator",
    long_about = "Budgetpad is a one-screen monthly budget calculator: enter \
                  your income and expense categories, watch the total, balance, \
                  and breakdown update live, and export the result as CSV or \
                  JSON. Data is saved automatically after every edit."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive budget screen (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the current budget
    Show,

    /// Add an expense row
    Add {
        /// Category name (blank becomes "Unnamed")
        category: String,
        /// Amount; unparsable or missing input counts as 0
        amount: Option<String>,
    },

    /// Remove the expense row at the given position (0-based)
    Remove {
        index: usize,
    },

    /// Set the monthly income
    Income {
        /// Amount; unparsable input counts as 0
        value: String,
    },

    /// Export the budget as a dated file
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Directory to write the file into (default: current directory)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Delete all budget data (asks for confirmation)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;

    let store = SnapshotStore::new(paths.snapshot_file());
    let mut controller = Controller::startup(store);

    match cli.command {
        Some(Commands::Tui) | None => {
            tui::run_tui(&mut controller)?;
        }
        Some(Commands::Show) => {
            cli::handle_show(&controller);
        }
        Some(Commands::Add { category, amount }) => {
            cli::handle_add(&mut controller, category, amount)?;
        }
        Some(Commands::Remove { index }) => {
            cli::handle_remove(&mut controller, index)?;
        }
        Some(Commands::Income { value }) => {
            cli::handle_income(&mut controller, value)?;
        }
        Some(Commands::Export { format, output }) => {
            cli::handle_export(&controller, format, output)?;
        }
        Some(Commands::Clear { yes }) => {
            cli::handle_clear(&mut controller, yes)?;
        }
        Some(Commands::Config) => {
            cli::handle_config(&paths);
        }
    }

    Ok(())
}
