pub(crate) use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "payment-ledger",
    author,
    version,
    about = "A payment ledger for fixed-tariff charges",
    long_about = None,
    after_help = "OUTPUT:\n    Final records are printed to stdout in CSV format.\n    Use shell redirection to save to a file:\n\n    payment-ledger events.csv > records.csv"
)]
pub struct Args {
    /// Path to the input events CSV file
    #[arg(
        index = 1,
        value_name = "FILE",
        help = "Input CSV file with columns: event, tx, subject, kind, amount, status"
    )]
    pub input_file: PathBuf,
}
