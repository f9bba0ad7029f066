//! CLI commands for reports
//!
//! Runs the revenue analysis over an export file, lists the catalog, and
//! classifies single ad-hoc records.

use std::io::Write;
use std::path::Path;

use clap::{Subcommand, ValueEnum};

use crate::classifier::{Classifier, PriceCatalog};
use crate::config::Settings;
use crate::display::format_catalog;
use crate::error::{ReportError, ReportResult};
use crate::models::Money;
use crate::reports::{Analysis, RevenueReport};
use crate::services::load_transactions;

/// How the analysis is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Full text report with the JavaScript data block
    #[default]
    Text,
    /// Only the performance export, as JSON
    Json,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List catalog prices and description rules
    Catalog,

    /// Identify the product for a single amount and description
    Classify {
        /// Charged amount (e.g., "1990" or "1,990.00")
        amount: String,

        /// Transaction description
        description: Option<String>,
    },
}

/// Handle report subcommands
pub fn handle_report_command(settings: &Settings, cmd: ReportCommands) -> ReportResult<()> {
    match cmd {
        ReportCommands::Catalog => handle_catalog(settings),
        ReportCommands::Classify {
            amount,
            description,
        } => handle_classify(settings, &amount, description.as_deref()),
    }
}

fn classifier_for(settings: &Settings) -> Classifier {
    Classifier::new(PriceCatalog::standard(), settings.test_threshold)
}

/// Load, analyze and print the report for one export file
///
/// Nothing is printed unless the whole report was produced.
pub fn handle_analyze(settings: &Settings, input: &Path, format: OutputFormat) -> ReportResult<()> {
    let transactions = load_transactions(input)?;
    let analysis = Analysis::generate(&transactions, &classifier_for(settings));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            let text = RevenueReport::new(&analysis, settings).format_terminal()?;
            out.write_all(text.as_bytes())?;
        }
        OutputFormat::Json => {
            let mut buf = Vec::new();
            analysis.export.write_json(&mut buf)?;
            out.write_all(&buf)?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Handle the catalog listing
fn handle_catalog(settings: &Settings) -> ReportResult<()> {
    println!("{}", format_catalog(&PriceCatalog::standard(), settings));
    Ok(())
}

/// Handle single-record classification
fn handle_classify(settings: &Settings, amount: &str, description: Option<&str>) -> ReportResult<()> {
    let amount = Money::parse(amount).map_err(|e| {
        ReportError::Validation(format!("{}. Use a decimal amount (e.g., 590.00)", e))
    })?;

    let classification = classifier_for(settings).classify(amount, description);
    let product = classification.product();

    println!("Amount:      {}", settings.money(amount));
    println!("Description: {}", description.unwrap_or("(none)"));
    println!("Matched by:  {}", classification.source());
    println!("Product:     {}", product.name);
    println!("Category:    {}", product.category);
    println!("Type:        {}", product.kind);

    Ok(())
}
