//! A payment ledger model with fixed tariffs and a status lifecycle.
//!
//! Charges are priced from a fixed tariff table (bid fees, bonus funding,
//! withdrawals, subscriptions, listing fees) and recorded as payment
//! records that move through a status lifecycle driven by gateway status
//! updates. Amount and transition rules live here; routing, persistence,
//! and retry policy belong to the surrounding application.
//!
//! ```
//! use payment_ledger::{PaymentLedger, PaymentStatus};
//! use std::io::Cursor;
//!
//! let events = "event,tx,subject,kind,amount,status
//! charge,1,user-42,bid_fee,,
//! status,1,,,,pending";
//!
//! let mut ledger = PaymentLedger::new();
//! ledger.process_events(Cursor::new(events)).unwrap();
//!
//! let record = ledger.record(1).unwrap();
//! assert_eq!(record.status(), PaymentStatus::Pending);
//! ```

mod ledger;

pub use ledger::tariff;
pub use ledger::{
    BidFee, BonusFunding, Charge, Error, Event, EventRecord, EventType, Listing, PaymentKind,
    PaymentLedger, PaymentRecord, PaymentStatus, ProcessingError, RecordError, RecordId,
    StatusUpdate, Subscription, Withdrawal,
};
