use crate::ledger::event::EventRecord;
use crate::ledger::record::{PaymentKind, PaymentStatus, RecordId};
use crate::ledger::Decimal;

/// Top-level error type for the payment ledger.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

/// Errors during `EventRecord` -> `Event` conversion (hard errors).
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Unknown payment type: {0}")]
    UnknownType(String),

    #[error("Invalid amount {got} for {kind} charge")]
    InvalidAmount { kind: PaymentKind, got: Decimal },

    #[error("Invalid event: {0}")]
    InvalidEvent(EventRecord),
}

/// Soft (gateway/partner) errors during event processing.
/// These don't stop batch processing, we log and continue.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Record {tx} not found")]
    RecordNotFound { tx: RecordId },

    #[error("Record {tx} already exists")]
    DuplicateRecord { tx: RecordId },

    #[error("Illegal transition for record {tx}: {from} -> {to}")]
    IllegalTransition {
        tx: RecordId,
        from: PaymentStatus,
        to: PaymentStatus,
    },
}
