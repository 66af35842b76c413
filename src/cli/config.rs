//! Configuration CLI commands
//!
//! Shows paths and settings, and updates individual settings.

use clap::Subcommand;

use super::AppContext;
use crate::config::Settings;
use crate::error::SpendlogResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Change a setting
    Set {
        /// Setting name (currency_symbol, theme, category_match, audit_enabled)
        key: String,
        /// New value
        value: String,
    },
}

/// Handle a config command
pub fn handle_config_command(ctx: &mut AppContext, cmd: ConfigCommands) -> SpendlogResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let paths = &ctx.paths;
            let repository = ctx.store.repository();
            let document_state = if !repository.path().exists() {
                "not created yet"
            } else if repository.is_valid() {
                "ok"
            } else {
                "unreadable (treated as empty)"
            };

            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {} ({})", paths.expenses_file().display(), document_state);
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  currency_symbol: {}", ctx.settings.currency_symbol);
            println!("  theme:           {}", ctx.settings.theme);
            println!("  category_match:  {}", ctx.settings.category_match);
            println!("  audit_enabled:   {}", ctx.settings.audit_enabled);
        }
        ConfigCommands::Set { key, value } => {
            ctx.settings.set(&key, &value)?;
            ctx.settings.save(&ctx.paths)?;
            ctx.reload_store();
            println!("Set {} = {}", key, value);
            println!("Known settings: {}", Settings::KEYS.join(", "));
        }
    }

    Ok(())
}

/// Handle the init command
///
/// Creates the data directories, writes the settings file and an empty
/// expense document. An existing document is left alone.
pub fn handle_init_command(ctx: &AppContext) -> SpendlogResult<()> {
    println!("Initializing spendlog at: {}", ctx.paths.base_dir().display());

    ctx.paths.ensure_directories()?;
    ctx.settings.save(&ctx.paths)?;

    let repository = ctx.store.repository();
    if repository.path().exists() {
        println!("Existing expense file kept: {}", repository.path().display());
    } else {
        ctx.store.save(&Default::default())?;
        println!("Created expense file: {}", repository.path().display());
    }

    println!("Initialization complete!");
    println!();
    println!("Run 'spendlog add \"Coffee\" 3.50' to record your first expense.");

    Ok(())
}
