//! Basic example of using the `PaymentLedger`.
//!
//! Run with: `cargo run --example basic`

use payment_ledger::PaymentLedger;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Sample events as CSV
    let events = r"event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,
charge,2,user-7,subscription,,
charge,3,seller-5,listing,,pending
charge,4,user-7,withdrawal_fee,150,
status,1,,,,pending
status,1,,,,success
status,1,,,,paid
status,2,,,,pending
status,2,,,,failed
status,3,,,,cancelled
";

    // Create ledger and process events
    let mut ledger = PaymentLedger::new();
    ledger
        .process_events(Cursor::new(events))
        .expect("Failed to process events");

    // Export results to stdout
    println!("\n=== Final Ledger State ===");
    ledger
        .export_records(std::io::stdout())
        .expect("Failed to export records");
}
