use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_breakdown_command, handle_config_command, handle_expense_command,
    handle_export_command, handle_filter_command, handle_history_command, handle_init_command,
    handle_summary_command, AppContext, ConfigCommands, ExpenseCommands, ExportArgs,
    FilterCommands, GroupByArg, SummaryCommands,
};
use spendlog::config::{Settings, SpendlogPaths};

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Personal expense tracker",
    long_about = "spendlog records expenses in a local JSON file and answers \
                  questions about them: filters by category, date, month or \
                  amount, totals and averages, and CSV export."
)]
struct Cli {
    /// Use this directory instead of the default data location
    #[arg(long, global = true, env = "SPENDLOG_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Filter expenses by one dimension
    #[command(subcommand)]
    Filter(FilterCommands),

    /// Count, total and average for a scope
    #[command(subcommand)]
    Summary(SummaryCommands),

    /// Per-group totals with share of overall spending
    Breakdown {
        /// Group by this dimension
        #[arg(short, long, value_enum, default_value = "category")]
        by: GroupByArg,
    },

    /// Export expenses to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Create the data directory, settings and an empty expense file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --data-dir / SPENDLOG_DATA_DIR, else the platform default
    let paths = match cli.data_dir {
        Some(dir) => SpendlogPaths::with_base_dir(dir),
        None => SpendlogPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let mut ctx = AppContext::new(paths, settings);

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&ctx, cmd)?,
        Some(Commands::Filter(cmd)) => handle_filter_command(&ctx, cmd)?,
        Some(Commands::Summary(cmd)) => handle_summary_command(&ctx, cmd)?,
        Some(Commands::Breakdown { by }) => handle_breakdown_command(&ctx, by)?,
        Some(Commands::Export(args)) => handle_export_command(&ctx, args)?,
        Some(Commands::History { limit }) => handle_history_command(&ctx, limit)?,
        Some(Commands::Config(cmd)) => handle_config_command(&mut ctx, cmd)?,
        Some(Commands::Init) => handle_init_command(&ctx)?,
        None => {
            println!("spendlog - personal expense tracker");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog init' to set up the data directory.");
        }
    }

    for warning in ctx.store.take_warnings() {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}
