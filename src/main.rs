use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::Level;

use clinic_revenue::cli::{handle_analyze, handle_report_command, OutputFormat, ReportCommands};
use clinic_revenue::config::Settings;

#[derive(Parser)]
#[command(
    name = "revenue-report",
    version,
    about = "Categorized monthly revenue report from a Stripe payment export",
    long_about = "Reads a Stripe payment export, identifies the clinical service behind \
                  each paid charge, and prints monthly revenue, product and category \
                  breakdowns plus a performance data block for the projections file."
)]
struct Cli {
    /// Path to the payment export CSV [default: unified_payments.csv]
    input: Option<PathBuf>,

    /// Output format for the analysis
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Currency symbol for amounts in the text report
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<ReportCommands>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut settings = Settings::default();
    if let Some(symbol) = cli.currency {
        settings = settings.with_currency_symbol(symbol)?;
    }

    match cli.command {
        Some(cmd) => handle_report_command(&settings, cmd)?,
        None => {
            let input = settings.resolve_input(cli.input);
            handle_analyze(&settings, &input, cli.format)?;
        }
    }

    Ok(())
}
