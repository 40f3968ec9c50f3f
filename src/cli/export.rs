//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::reports::SpendingSummary;
use crate::storage::ExpenseRepository;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// CSV, one row per category with totals
    Summary,
    /// JSON, full export with metadata
    Json,
    /// YAML, full export with metadata
    Yaml,
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(repo: &dyn ExpenseRepository, args: ExportArgs) -> ExpenseResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(repo, args.format, args.pretty, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;

            println!(
                "Exported {} expense(s) to {}",
                repo.count(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(repo, args.format, args.pretty, &mut handle)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    repo: &dyn ExpenseRepository,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(repo, writer),
        ExportFormat::Summary => SpendingSummary::build(&repo.get_all()).export_csv(writer),
        ExportFormat::Json => {
            export_full_json(repo, writer, pretty)?;
            writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))
        }
        ExportFormat::Yaml => export_full_yaml(repo, writer),
    }
}
