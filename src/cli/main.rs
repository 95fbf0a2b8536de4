mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Args;
use payment_ledger::PaymentLedger;

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of info (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Initialize the PaymentLedger
    let mut ledger = PaymentLedger::new();

    // 2. Open and process the input file
    log::info!("Processing events from {}", args.input_file.display());
    let file = std::fs::File::open(&args.input_file)
        .with_context(|| format!("Failed to open input file: {}", args.input_file.display()))?;

    ledger
        .process_events(file)
        .context("Failed to process events")?;

    log::info!(
        "Processing complete, exporting {} records",
        ledger.record_count()
    );

    // 3. Export the records to stdout
    ledger
        .export_records(std::io::stdout())
        .context("Failed to export records to stdout")?;

    log::info!("Export complete");

    Ok(())
}
