//! Payment ledger module.
//!
//! This module contains the core payment ledger logic including:
//! - `PaymentLedger` - The main event processor
//! - `PaymentRecord` - Payment record state and status lifecycle
//! - `Event` types - One charge per payment kind, plus gateway status updates
//! - `Error` types - Processing and validation errors

mod error;
mod event;
mod payment_ledger;
mod record;
pub mod tariff;

pub(crate) use rust_decimal::Decimal;

pub use error::{Error, ProcessingError, RecordError};
pub use event::{
    BidFee, BonusFunding, Charge, Event, EventRecord, EventType, Listing, StatusUpdate,
    Subscription, Withdrawal,
};
pub use payment_ledger::PaymentLedger;
pub use record::{PaymentKind, PaymentRecord, PaymentStatus, RecordId, SubjectId};
