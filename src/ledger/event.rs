mod bid_fee;
mod bonus_funding;
mod listing;
mod status;
mod subscription;
mod withdrawal;

pub use bid_fee::BidFee;
pub use bonus_funding::BonusFunding;
pub use listing::Listing;
pub use status::StatusUpdate;
pub use subscription::Subscription;
pub use withdrawal::Withdrawal;

use super::Decimal;
use crate::ledger::error::RecordError;
use crate::ledger::record::{PaymentKind, PaymentStatus, RecordId};
use serde::Deserialize;

/// Raw event row as parsed from CSV input.
/// This is the unvalidated form that needs conversion to a specific Event type.
#[derive(Debug, Deserialize, Clone)]
pub struct EventRecord {
    #[serde(rename = "event")]
    pub event_type: EventType,
    /// Record ID the event creates (charge) or references (status update)
    pub tx: RecordId,
    /// Subject of a charge; must be empty for status updates
    pub subject: Option<String>,
    /// Payment kind of a charge; kept raw so unrecognized kinds surface as
    /// `UnknownType` rather than a CSV parse failure
    pub kind: Option<String>,
    /// Amount: optional for charges (the tariff applies), must be empty for status updates
    pub amount: Option<Decimal>,
    /// Entry status of a charge (created/pending), or the new status of a status update
    pub status: Option<PaymentStatus>,
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (tx: {}", self.event_type, self.tx)?;
        if let Some(subject) = &self.subject {
            write!(f, ", subject: {subject}")?;
        }
        if let Some(kind) = &self.kind {
            write!(f, ", kind: {kind}")?;
        }
        if let Some(amount) = self.amount {
            write!(f, ", amount: {amount}")?;
        }
        if let Some(status) = self.status {
            write!(f, ", status: {status}")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Charge,
    Status,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Charge => write!(f, "charge"),
            EventType::Status => write!(f, "status"),
        }
    }
}

/// Resolve the optional entry status of a charge row.
/// Charges enter the ledger as `created` (the default) or `pending`;
/// anything else is a malformed event.
pub(super) fn entry_status(status: Option<PaymentStatus>) -> Option<PaymentStatus> {
    match status {
        None => Some(PaymentStatus::Created),
        Some(s @ (PaymentStatus::Created | PaymentStatus::Pending)) => Some(s),
        Some(_) => None,
    }
}

/// A validated charge, one variant per payment kind.
#[derive(Debug, Clone)]
pub enum Charge {
    BidFee(BidFee),
    BonusFunding(BonusFunding),
    Withdrawal(Withdrawal),
    Subscription(Subscription),
    Listing(Listing),
}

impl Charge {
    pub fn tx(&self) -> RecordId {
        match self {
            Charge::BidFee(c) => c.tx(),
            Charge::BonusFunding(c) => c.tx(),
            Charge::Withdrawal(c) => c.tx(),
            Charge::Subscription(c) => c.tx(),
            Charge::Listing(c) => c.tx(),
        }
    }

    pub fn kind(&self) -> PaymentKind {
        match self {
            Charge::BidFee(_) => PaymentKind::BidFee,
            Charge::BonusFunding(_) => PaymentKind::BonusFunding,
            Charge::Withdrawal(_) => PaymentKind::WithdrawalFee,
            Charge::Subscription(_) => PaymentKind::Subscription,
            Charge::Listing(_) => PaymentKind::Listing,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            Charge::BidFee(c) => c.subject(),
            Charge::BonusFunding(c) => c.subject(),
            Charge::Withdrawal(c) => c.subject(),
            Charge::Subscription(c) => c.subject(),
            Charge::Listing(c) => c.subject(),
        }
    }

    /// The tariff-resolved amount this charge records.
    pub fn amount(&self) -> Decimal {
        match self {
            Charge::BidFee(c) => c.amount(),
            Charge::BonusFunding(c) => c.amount(),
            Charge::Withdrawal(c) => c.amount(),
            Charge::Subscription(c) => c.amount(),
            Charge::Listing(c) => c.amount(),
        }
    }

    /// The status the resulting record enters the ledger with.
    pub fn entry(&self) -> PaymentStatus {
        match self {
            Charge::BidFee(c) => c.entry(),
            Charge::BonusFunding(c) => c.entry(),
            Charge::Withdrawal(c) => c.entry(),
            Charge::Subscription(c) => c.entry(),
            Charge::Listing(c) => c.entry(),
        }
    }
}

/// A validated event ready for processing by the payment ledger.
#[derive(Debug, Clone)]
pub enum Event {
    Charge(Charge),
    Status(StatusUpdate),
}

impl TryFrom<EventRecord> for Event {
    type Error = RecordError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        match record.event_type {
            EventType::Charge => {
                let kind = record
                    .kind
                    .as_deref()
                    .ok_or_else(|| RecordError::InvalidEvent(record.clone()))?
                    .parse::<PaymentKind>()?;
                let charge = match kind {
                    PaymentKind::BidFee => Charge::BidFee(BidFee::try_from(record)?),
                    PaymentKind::BonusFunding => {
                        Charge::BonusFunding(BonusFunding::try_from(record)?)
                    }
                    PaymentKind::WithdrawalFee => Charge::Withdrawal(Withdrawal::try_from(record)?),
                    PaymentKind::Subscription => {
                        Charge::Subscription(Subscription::try_from(record)?)
                    }
                    PaymentKind::Listing => Charge::Listing(Listing::try_from(record)?),
                };
                Ok(Event::Charge(charge))
            }
            EventType::Status => Ok(Event::Status(StatusUpdate::try_from(record)?)),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Charge(charge) => {
                write!(
                    f,
                    "[charge] kind={} tx={} subject={} amount={} entry={}",
                    charge.kind(),
                    charge.tx(),
                    charge.subject(),
                    charge.amount(),
                    charge.entry()
                )
            }
            Event::Status(update) => {
                write!(f, "[status] tx={} status={}", update.tx(), update.status())
            }
        }
    }
}
