//! CLI command for data export
//!
//! Exports all expenses, or a filtered subset, to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::AppContext;
use crate::error::{SpendlogError, SpendlogResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml};
use crate::models::YearMonth;
use crate::services::ExpenseFilter;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV (id, description, amount, date, category)
    Csv,
    /// JSON snapshot
    Json,
    /// YAML snapshot
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Only export this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only export this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(ctx: &AppContext, args: ExportArgs) -> SpendlogResult<()> {
    let mut filter = ExpenseFilter::new();
    if let Some(category) = args.category {
        filter = filter.category(category);
    }
    if let Some(month) = args.month {
        filter = filter.month(YearMonth::parse(&month)?);
    }
    let expenses = ctx.store.filter(&filter)?;

    let file = File::create(&args.output).map_err(|e| {
        SpendlogError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_expenses_csv(&expenses, &mut writer)?,
        ExportFormat::Json => export_expenses_json(&expenses, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_expenses_yaml(&expenses, &mut writer)?,
    }
    writer.flush()?;

    println!(
        "Exported {} expense(s) to: {}",
        expenses.len(),
        args.output.display()
    );

    Ok(())
}
