use crate::ledger::{
    error::RecordError,
    event::{entry_status, EventRecord, EventType},
    record::{PaymentKind, PaymentStatus, RecordId},
    Decimal,
};

/// A validated listing fee charge, taken when a listing is published.
#[derive(Debug, Clone)]
pub struct Listing {
    tx: RecordId,
    subject: String,
    entry: PaymentStatus,
}

impl Listing {
    pub fn tx(&self) -> RecordId {
        self.tx
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn amount(&self) -> Decimal {
        PaymentKind::Listing.tariff()
    }

    pub fn entry(&self) -> PaymentStatus {
        self.entry
    }
}

impl TryFrom<EventRecord> for Listing {
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
        if kind.parse::<PaymentKind>()? != PaymentKind::Listing {
            return Err(RecordError::InvalidEvent(record));
        }
        let Some(entry) = entry_status(status) else {
            return Err(RecordError::InvalidEvent(record));
        };
        if let Some(got) = amount {
            if got != PaymentKind::Listing.tariff() {
                return Err(RecordError::InvalidAmount {
                    kind: PaymentKind::Listing,
                    got,
                });
            }
        }
        Ok(Listing { tx, subject, entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_record(amount: Option<Decimal>) -> EventRecord {
        EventRecord {
            event_type: EventType::Charge,
            tx: 12,
            subject: Some("seller-5".to_owned()),
            kind: Some("listing".to_owned()),
            amount,
            status: None,
        }
    }

    #[test]
    fn test_charges_the_tariff() {
        let charge = Listing::try_from(make_record(None)).unwrap();
        assert_eq!(charge.amount(), dec!(199));
        assert_eq!(charge.entry(), PaymentStatus::Created);
    }

    #[test]
    fn test_accepts_matching_amount() {
        assert!(Listing::try_from(make_record(Some(dec!(199)))).is_ok());
    }

    #[test]
    fn test_rejects_mismatched_amount() {
        assert!(Listing::try_from(make_record(Some(dec!(200)))).is_err());
    }

    #[test]
    fn test_rejects_missing_subject() {
        let mut record = make_record(None);
        record.subject = None;
        assert!(Listing::try_from(record).is_err());
    }
}
