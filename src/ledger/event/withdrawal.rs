use crate::ledger::{
    error::RecordError,
    event::{entry_status, EventRecord, EventType},
    record::{PaymentKind, PaymentStatus, RecordId},
    tariff, Decimal,
};

/// A validated withdrawal charge.
///
/// Without an amount this records the flat withdrawal request fee. With an
/// amount it records the requested payout, which must be a whole number of
/// currency units within the withdrawal bounds.
#[derive(Debug, Clone)]
pub struct Withdrawal {
    tx: RecordId,
    subject: String,
    amount: Decimal,
    entry: PaymentStatus,
}

impl Withdrawal {
    pub fn tx(&self) -> RecordId {
        self.tx
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn entry(&self) -> PaymentStatus {
        self.entry
    }
}

impl TryFrom<EventRecord> for Withdrawal {
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
        if kind.parse::<PaymentKind>()? != PaymentKind::WithdrawalFee {
            return Err(RecordError::InvalidEvent(record));
        }
        let Some(entry) = entry_status(status) else {
            return Err(RecordError::InvalidEvent(record));
        };
        let amount = match amount {
            None => PaymentKind::WithdrawalFee.tariff(),
            Some(got) => {
                let min = Decimal::from(tariff::WITHDRAWAL_MIN);
                let max = Decimal::from(tariff::WITHDRAWAL_MAX);
                if !got.is_integer() || got < min || got > max {
                    return Err(RecordError::InvalidAmount {
                        kind: PaymentKind::WithdrawalFee,
                        got,
                    });
                }
                got
            }
        };
        Ok(Withdrawal {
            tx,
            subject,
            amount,
            entry,
        })
    }
}
