//! History CLI command
//!
//! Prints the most recent audit log entries.

use super::AppContext;
use crate::audit::AuditLogger;
use crate::display::format_history;
use crate::error::SpendlogResult;

/// Handle the history command
pub fn handle_history_command(ctx: &AppContext, limit: usize) -> SpendlogResult<()> {
    let logger = AuditLogger::new(ctx.paths.audit_log());
    let entries = logger.read_recent(limit)?;
    println!("{}", format_history(&entries));

    if !ctx.settings.audit_enabled {
        println!();
        println!("Note: audit logging is disabled. Enable it with 'spendlog config set audit_enabled true'.");
    }

    Ok(())
}
