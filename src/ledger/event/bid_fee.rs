use crate::ledger::{
    error::RecordError,
    event::{entry_status, EventRecord, EventType},
    record::{PaymentKind, PaymentStatus, RecordId},
    Decimal,
};

/// A validated bid fee charge.
///
/// Charged when a bid is placed. The amount is always the bid fee tariff;
/// a caller-supplied amount is only accepted if it matches.
#[derive(Debug, Clone)]
pub struct BidFee {
    tx: RecordId,
    subject: String,
    entry: PaymentStatus,
}

impl BidFee {
    pub fn tx(&self) -> RecordId {
        self.tx
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn amount(&self) -> Decimal {
        PaymentKind::BidFee.tariff()
    }

    pub fn entry(&self) -> PaymentStatus {
        self.entry
    }
}

impl TryFrom<EventRecord> for BidFee {
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
        if kind.parse::<PaymentKind>()? != PaymentKind::BidFee {
            return Err(RecordError::InvalidEvent(record));
        }
        let Some(entry) = entry_status(status) else {
            return Err(RecordError::InvalidEvent(record));
        };
        if let Some(got) = amount {
            if got != PaymentKind::BidFee.tariff() {
                return Err(RecordError::InvalidAmount {
                    kind: PaymentKind::BidFee,
                    got,
                });
            }
        }
        Ok(BidFee { tx, subject, entry })
    }
}
