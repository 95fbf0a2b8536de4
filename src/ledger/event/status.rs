use crate::ledger::{
    error::RecordError,
    event::{EventRecord, EventType},
    record::{PaymentStatus, RecordId},
};

/// A validated status update.
///
/// Reports a new status for an existing record, as a payment gateway
/// webhook would after normalization. Status updates reference the record
/// by ID and carry no subject, kind, or amount.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    /// The ID of the record being updated
    tx: RecordId,
    status: PaymentStatus,
}

impl StatusUpdate {
    pub fn tx(&self) -> RecordId {
        self.tx
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }
}

impl TryFrom<EventRecord> for StatusUpdate {
    type Error = RecordError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        match record {
            EventRecord {
                event_type: EventType::Status,
                tx,
                subject: None,
                kind: None,
                amount: None,
                status: Some(status),
            } => Ok(StatusUpdate { tx, status }),
            _ => Err(RecordError::InvalidEvent(record)),
        }
    }
}
