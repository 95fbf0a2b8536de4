use crate::ledger::{
    error::RecordError,
    event::{entry_status, EventRecord, EventType},
    record::{PaymentKind, PaymentStatus, RecordId},
    Decimal,
};

/// A validated bonus funding charge.
///
/// Funds the per-contributor bonus for one contributor. A project funding
/// several contributors issues one charge per contributor.
#[derive(Debug, Clone)]
pub struct BonusFunding {
    tx: RecordId,
    subject: String,
    entry: PaymentStatus,
}

impl BonusFunding {
    pub fn tx(&self) -> RecordId {
        self.tx
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn amount(&self) -> Decimal {
        PaymentKind::BonusFunding.tariff()
    }

    pub fn entry(&self) -> PaymentStatus {
        self.entry
    }
}

impl TryFrom<EventRecord> for BonusFunding {
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
        if kind.parse::<PaymentKind>()? != PaymentKind::BonusFunding {
            return Err(RecordError::InvalidEvent(record));
        }
        let Some(entry) = entry_status(status) else {
            return Err(RecordError::InvalidEvent(record));
        };
        if let Some(got) = amount {
            if got != PaymentKind::BonusFunding.tariff() {
                return Err(RecordError::InvalidAmount {
                    kind: PaymentKind::BonusFunding,
                    got,
                });
            }
        }
        Ok(BonusFunding { tx, subject, entry })
    }
}
