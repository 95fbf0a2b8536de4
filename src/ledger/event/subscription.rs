use crate::ledger::{
    error::RecordError,
    event::{entry_status, EventRecord, EventType},
    record::{PaymentKind, PaymentStatus, RecordId},
    Decimal,
};

/// A validated subscription purchase charge.
#[derive(Debug, Clone)]
pub struct Subscription {
    tx: RecordId,
    subject: String,
    entry: PaymentStatus,
}

impl Subscription {
    pub fn tx(&self) -> RecordId {
        self.tx
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn amount(&self) -> Decimal {
        PaymentKind::Subscription.tariff()
    }

    pub fn entry(&self) -> PaymentStatus {
        self.entry
    }
}

impl TryFrom<EventRecord> for Subscription {
    type Error = RecordError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let EventRecord {
            event_type: EventType::Charge,
            tx,
            subject: Some(subject),
            kind: Some(kind),
            amount,
            status,
        } = record.clone()
        else {
            return Err(RecordError::InvalidEvent(record));
        };
        if kind.parse::<PaymentKind>()? != PaymentKind::Subscription {
            return Err(RecordError::InvalidEvent(record));
        }
        let Some(entry) = entry_status(status) else {
            return Err(RecordError::InvalidEvent(record));
        };
        if let Some(got) = amount {
            if got != PaymentKind::Subscription.tariff() {
                return Err(RecordError::InvalidAmount {
                    kind: PaymentKind::Subscription,
                    got,
                });
            }
        }
        Ok(Subscription { tx, subject, entry })
    }
}
