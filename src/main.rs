use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, run_menu, ExpenseCommands, ExportArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::{ExpenseRepository, JsonExpenseRepository};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses and see where the money goes",
    long_about = "A personal expense tracker. Expenses are kept in a single JSON \
                  file; every change is written back immediately."
)]
struct Cli {
    /// Use this expenses file instead of the configured one
    #[arg(long, global = true, env = "EXPENSES_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export expenses to CSV, JSON or YAML
    Export(ExportArgs),

    /// Interactive menu
    Menu,

    /// Show current configuration and paths
    Config {
        /// Write the settings file with the current values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let expenses_file = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.expenses_file(&paths));

    if let Some(Commands::Config { init }) = cli.command {
        if init {
            settings.save(&paths)?;
            println!("Wrote {}", paths.settings_file().display());
            println!();
        }
        println!("Expense Tracker Configuration");
        println!("=============================");
        println!("Config directory: {}", paths.base_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!("Expenses file:    {}", expenses_file.display());
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Date format:     {}", settings.date_format);
        return Ok(());
    }

    let mut repo = JsonExpenseRepository::open(expenses_file);
    if repo.recovered_from_corruption() {
        eprintln!(
            "Warning: {} could not be read and was ignored. \
             It will be overwritten by the next change.",
            repo.path().display()
        );
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut repo, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&repo, args)?,
        Some(Commands::Menu) => {
            let stdin = io::stdin();
            run_menu(&mut repo, &settings, &mut stdin.lock(), &mut io::stdout())?;
        }
        Some(Commands::Config { .. }) => {}
        None => {
            println!("Expense Tracker");
            println!();
            println!(
                "{} expense(s), {} total",
                repo.count(),
                repo.total_spending()
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses menu' for the interactive menu.");
        }
    }

    Ok(())
}
