//! Integration tests for the `PaymentLedger`.
//!
//! These tests exercise the full E2E flow: CSV input → processing → CSV output.
use payment_ledger::{PaymentKind, PaymentLedger, PaymentRecord, PaymentStatus};
use rust_decimal_macros::dec;
use std::io::Cursor;

/// Helper to run an event CSV through the ledger and get output
fn process_csv(input: &str) -> String {
    let mut ledger = PaymentLedger::new();
    let reader = Cursor::new(input);
    ledger.process_events(reader).unwrap();

    let mut output = Vec::new();
    ledger.export_records(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Parse CSV output into a vec of payment records
fn parse_output(output: &str) -> Vec<PaymentRecord> {
    let mut rdr = csv::Reader::from_reader(output.as_bytes());
    rdr.deserialize::<PaymentRecord>().map(|r| r.unwrap()).collect()
}

#[test]
fn test_bid_fee_charge() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), 1);
    assert_eq!(records[0].kind(), PaymentKind::BidFee);
    assert_eq!(records[0].subject(), "user-42");
    assert_eq!(records[0].amount(), dec!(9)); // fixed tariff
    assert_eq!(records[0].status(), PaymentStatus::Created);
    assert!(!records[0].is_settled());
}

#[test]
fn test_every_kind_charges_its_tariff() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-1,bid_fee,,
charge,2,user-2,bonus_funding,,
charge,3,user-3,withdrawal_fee,,
charge,4,user-4,subscription,,
charge,5,user-5,listing,,";

    let output = process_csv(input);
    let records = parse_output(&output);
    assert_eq!(records.len(), 5);

    let amount_of = |tx: u32| records.iter().find(|r| r.id() == tx).unwrap().amount();
    assert_eq!(amount_of(1), dec!(9));
    assert_eq!(amount_of(2), dec!(200));
    assert_eq!(amount_of(3), dec!(20)); // flat fee, no payout requested
    assert_eq!(amount_of(4), dec!(299));
    assert_eq!(amount_of(5), dec!(199));
}

#[test]
fn test_full_lifecycle_to_paid() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,subscription,,
status,1,,,,pending
status,1,,,,success
status,1,,,,paid";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records[0].status(), PaymentStatus::Paid);
    assert!(records[0].is_settled());
}

#[test]
fn test_failed_path() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,listing,,
status,1,,,,pending
status,1,,,,failed";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records[0].status(), PaymentStatus::Failed);
    assert!(records[0].is_settled());
}

#[test]
fn test_cancelled_path() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,
status,1,,,,pending
status,1,,,,cancelled";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records[0].status(), PaymentStatus::Cancelled);
}

#[test]
fn test_refund_after_success() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-7,withdrawal_fee,500,
status,1,,,,pending
status,1,,,,success
status,1,,,,refunded";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records[0].amount(), dec!(500));
    assert_eq!(records[0].status(), PaymentStatus::Refunded);
}

#[test]
fn test_pending_entry_status() {
    // A charge may enter as pending (awaiting external confirmation)
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,pending
status,1,,,,success";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records[0].status(), PaymentStatus::Success);
}

#[test]
fn test_skipping_success_is_ignored() {
    // pending -> paid is not on the lifecycle graph
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,pending
status,1,,,,paid";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records[0].status(), PaymentStatus::Pending);
}

#[test]
fn test_settled_record_ignores_further_updates() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,
status,1,,,,pending
status,1,,,,failed
status,1,,,,pending
status,1,,,,success";

    let output = process_csv(input);
    let records = parse_output(&output);

    // Updates after settling are skipped
    assert_eq!(records[0].status(), PaymentStatus::Failed);
}

#[test]
fn test_terminal_redelivery_is_noop() {
    // A gateway redelivering the same terminal status is not an error
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,
status,1,,,,pending
status,1,,,,success
status,1,,,,paid
status,1,,,,paid";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records[0].status(), PaymentStatus::Paid);
}

#[test]
fn test_status_for_unknown_record_is_ignored() {
    let input = "event,tx,subject,kind,amount,status
status,99,,,,pending";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records.len(), 0);
}

#[test]
fn test_duplicate_charge_is_ignored() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,
charge,1,user-42,listing,,";

    let output = process_csv(input);
    let records = parse_output(&output);

    // First charge wins, second is skipped
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), PaymentKind::BidFee);
    assert_eq!(records[0].amount(), dec!(9));
}

#[test]
fn test_multiple_subjects() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-1,bid_fee,,
charge,2,user-2,subscription,,
status,2,,,,pending";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records.len(), 2);
    // Note: order may vary, so find by record id
    let first = records.iter().find(|r| r.id() == 1).unwrap();
    let second = records.iter().find(|r| r.id() == 2).unwrap();

    assert_eq!(first.subject(), "user-1");
    assert_eq!(first.status(), PaymentStatus::Created);
    assert_eq!(second.subject(), "user-2");
    assert_eq!(second.status(), PaymentStatus::Pending);
}

#[test]
fn test_whitespace_handling() {
    let input = "event,  tx,  subject,  kind,  amount,  status
charge,  1,  user-42,  bid_fee,  ,  ";

    let output = process_csv(input);
    let records = parse_output(&output);

    assert_eq!(records[0].amount(), dec!(9));
}

// ============================================================================
// Invalid Input Tests - These should cause errors
// ============================================================================

/// Helper that returns Result to test error cases
fn try_process_csv(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut ledger = PaymentLedger::new();
    let reader = Cursor::new(input);
    ledger.process_events(reader)?;

    let mut output = Vec::new();
    ledger.export_records(&mut output)?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn test_rejects_unknown_payment_kind() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,refund,,";

    assert!(try_process_csv(input).is_err());
}

#[test]
fn test_rejects_mismatched_tariff_amount() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,10,";

    // Callers cannot price their own charges
    assert!(try_process_csv(input).is_err());
}

#[test]
fn test_withdrawal_boundary_amounts() {
    // 100 and 10000 are inside the bounds, 99 and 10001 are not
    let valid = [
        "event,tx,subject,kind,amount,status\ncharge,1,user-7,withdrawal_fee,100,",
        "event,tx,subject,kind,amount,status\ncharge,1,user-7,withdrawal_fee,10000,",
    ];
    for input in valid {
        assert!(try_process_csv(input).is_ok(), "Should accept: {input}");
    }

    let invalid = [
        "event,tx,subject,kind,amount,status\ncharge,1,user-7,withdrawal_fee,99,",
        "event,tx,subject,kind,amount,status\ncharge,1,user-7,withdrawal_fee,10001,",
    ];
    for input in invalid {
        assert!(try_process_csv(input).is_err(), "Should reject: {input}");
    }
}

#[test]
fn test_rejects_withdrawal_below_minimum() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-7,withdrawal_fee,50,";

    assert!(try_process_csv(input).is_err());
}

#[test]
fn test_rejects_fractional_withdrawal() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-7,withdrawal_fee,150.5,";

    assert!(try_process_csv(input).is_err());
}

#[test]
fn test_rejects_charge_without_subject() {
    let input = "event,tx,subject,kind,amount,status
charge,1,,bid_fee,,";

    assert!(try_process_csv(input).is_err());
}

#[test]
fn test_rejects_charge_with_terminal_entry_status() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,paid";

    assert!(try_process_csv(input).is_err());
}

#[test]
fn test_rejects_status_update_with_amount() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,
status,1,,,9,success";

    assert!(try_process_csv(input).is_err());
}

#[test]
fn test_accepts_matching_tariff_amounts() {
    // Explicit amounts are fine as long as they match the tariff
    let inputs = [
        "event,tx,subject,kind,amount,status\ncharge,1,user-1,bid_fee,9,",
        "event,tx,subject,kind,amount,status\ncharge,1,user-1,bonus_funding,200,",
        "event,tx,subject,kind,amount,status\ncharge,1,user-1,subscription,299,",
        "event,tx,subject,kind,amount,status\ncharge,1,user-1,listing,199,",
    ];

    for input in inputs {
        assert!(try_process_csv(input).is_ok(), "Should accept: {input}");
    }
}

// ============================================================================
// Advanced Edge Cases
// ============================================================================

#[test]
fn test_interleaved_lifecycles() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-1,bid_fee,,
charge,2,user-2,withdrawal_fee,2500,
status,1,,,,pending
status,2,,,,pending
status,1,,,,success
status,2,,,,failed
status,1,,,,paid";

    let output = process_csv(input);
    let records = parse_output(&output);

    let first = records.iter().find(|r| r.id() == 1).unwrap();
    let second = records.iter().find(|r| r.id() == 2).unwrap();

    assert_eq!(first.status(), PaymentStatus::Paid);
    assert_eq!(second.status(), PaymentStatus::Failed);
    assert_eq!(second.amount(), dec!(2500));
}

#[test]
fn test_created_record_cannot_settle_directly() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,bid_fee,,
status,1,,,,success
status,1,,,,failed";

    let output = process_csv(input);
    let records = parse_output(&output);

    // Both updates skip the mandatory pending step and are ignored
    assert_eq!(records[0].status(), PaymentStatus::Created);
}

#[test]
fn test_refund_does_not_follow_paid() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,subscription,,
status,1,,,,pending
status,1,,,,success
status,1,,,,paid
status,1,,,,refunded";

    let output = process_csv(input);
    let records = parse_output(&output);

    // Refunds chain off success, not off a completed payout
    assert_eq!(records[0].status(), PaymentStatus::Paid);
}

#[test]
fn test_ledger_lookup_by_id() {
    let input = "event,tx,subject,kind,amount,status
charge,7,user-42,listing,,
status,7,,,,pending";

    let mut ledger = PaymentLedger::new();
    ledger.process_events(Cursor::new(input)).unwrap();

    assert_eq!(ledger.record_count(), 1);
    let record = ledger.record(7).unwrap();
    assert_eq!(record.kind(), PaymentKind::Listing);
    assert_eq!(record.status(), PaymentStatus::Pending);
    assert!(ledger.record(8).is_none());
}

#[test]
fn test_export_round_trips() {
    let input = "event,tx,subject,kind,amount,status
charge,1,user-42,withdrawal_fee,150,
status,1,,,,pending";

    let output = process_csv(input);

    let header = output.lines().next().unwrap();
    assert_eq!(header, "tx,kind,subject,amount,status");

    let records = parse_output(&output);
    assert_eq!(records[0].id(), 1);
    assert_eq!(records[0].kind(), PaymentKind::WithdrawalFee);
    assert_eq!(records[0].amount(), dec!(150));
    assert_eq!(records[0].status(), PaymentStatus::Pending);
}
