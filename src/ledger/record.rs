use super::error::{ProcessingError, RecordError};
use super::{tariff, Decimal};
use serde::{Deserialize, Serialize};

pub type RecordId = u32;
pub type SubjectId = String;

/// The recognized payment kinds. Each kind has a fixed tariff; amounts are
/// never priced by the caller.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    BidFee,
    BonusFunding,
    WithdrawalFee,
    Subscription,
    Listing,
}

impl PaymentKind {
    /// Returns the fixed tariff for this kind.
    ///
    /// For withdrawals this is the flat request fee; requested payout
    /// amounts are validated separately against the withdrawal bounds.
    pub fn tariff(self) -> Decimal {
        match self {
            PaymentKind::BidFee => Decimal::from(tariff::BID_FEE),
            PaymentKind::BonusFunding => Decimal::from(tariff::BONUS_PER_CONTRIBUTOR),
            PaymentKind::WithdrawalFee => Decimal::from(tariff::WITHDRAWAL_FEE),
            PaymentKind::Subscription => Decimal::from(tariff::SUBSCRIPTION),
            PaymentKind::Listing => Decimal::from(tariff::LISTING_FEE),
        }
    }
}

impl std::str::FromStr for PaymentKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bid_fee" => Ok(PaymentKind::BidFee),
            "bonus_funding" => Ok(PaymentKind::BonusFunding),
            "withdrawal_fee" => Ok(PaymentKind::WithdrawalFee),
            "subscription" => Ok(PaymentKind::Subscription),
            "listing" => Ok(PaymentKind::Listing),
            other => Err(RecordError::UnknownType(other.to_owned())),
        }
    }
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentKind::BidFee => write!(f, "bid_fee"),
            PaymentKind::BonusFunding => write!(f, "bonus_funding"),
            PaymentKind::WithdrawalFee => write!(f, "withdrawal_fee"),
            PaymentKind::Subscription => write!(f, "subscription"),
            PaymentKind::Listing => write!(f, "listing"),
        }
    }
}

/// Lifecycle status of a payment record.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Created,
    Pending,
    Success,
    Paid,
    Failed,
    Cancelled,
    Refunded,
}

impl PaymentStatus {
    /// Whether this status admits no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PaymentStatus::Paid
                | PaymentStatus::Failed
                | PaymentStatus::Cancelled
                | PaymentStatus::Refunded
        )
    }

    /// Whether `next` is directly reachable from this status.
    ///
    /// This is the pure legality predicate; a persistence layer doing
    /// compare-and-set can call it without constructing a record.
    pub fn can_transition_to(self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (PaymentStatus::Created, PaymentStatus::Pending)
                | (
                    PaymentStatus::Pending,
                    PaymentStatus::Success | PaymentStatus::Failed | PaymentStatus::Cancelled,
                )
                | (
                    PaymentStatus::Success,
                    PaymentStatus::Paid | PaymentStatus::Refunded,
                )
        )
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Created => write!(f, "created"),
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Success => write!(f, "success"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Cancelled => write!(f, "cancelled"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

/// A single payment record: one charge against one subject, at a fixed
/// tariff, moving through the status lifecycle until it settles.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    #[serde(rename = "tx")]
    id: RecordId,
    kind: PaymentKind,
    subject: SubjectId,
    amount: Decimal,
    status: PaymentStatus,
}

impl PaymentRecord {
    pub(super) fn new(
        id: RecordId,
        kind: PaymentKind,
        subject: SubjectId,
        amount: Decimal,
        status: PaymentStatus,
    ) -> Self {
        let record = Self {
            id,
            kind,
            subject,
            amount,
            status,
        };
        #[cfg(debug_assertions)]
        record.assert_invariant();
        record
    }

    /// Returns the record ID
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the payment kind
    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    /// Returns the subject this payment concerns
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the charged amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the current status
    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Returns whether the record has settled (no further transitions)
    pub fn is_settled(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply a status change.
    ///
    /// Re-applying the current status to an already settled record is a
    /// no-op, so a gateway redelivering a webhook gets a success back.
    /// Every other move not on the lifecycle graph fails.
    pub fn transition(&mut self, next: PaymentStatus) -> Result<(), ProcessingError> {
        if self.status == next && self.status.is_terminal() {
            return Ok(());
        }

        if !self.status.can_transition_to(next) {
            return Err(ProcessingError::IllegalTransition {
                tx: self.id,
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        #[cfg(debug_assertions)]
        self.assert_invariant();
        Ok(())
    }

    /// Assert the tariff invariant: the charged amount is positive and
    /// matches the kind's tariff (or, for withdrawals, is either the flat
    /// fee or a payout within the withdrawal bounds).
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        debug_assert!(
            self.amount > Decimal::ZERO,
            "Invariant violated: amount ({}) is not positive",
            self.amount
        );
        match self.kind {
            PaymentKind::WithdrawalFee => {
                let fee = Decimal::from(tariff::WITHDRAWAL_FEE);
                let min = Decimal::from(tariff::WITHDRAWAL_MIN);
                let max = Decimal::from(tariff::WITHDRAWAL_MAX);
                debug_assert!(
                    self.amount == fee || (self.amount >= min && self.amount <= max),
                    "Invariant violated: withdrawal amount ({}) is neither the flat fee ({}) nor within [{}, {}]",
                    self.amount,
                    fee,
                    min,
                    max
                );
            }
            kind => debug_assert_eq!(
                self.amount,
                kind.tariff(),
                "Invariant violated: {} amount ({}) != tariff ({})",
                kind,
                self.amount,
                kind.tariff()
            ),
        }
    }
}
