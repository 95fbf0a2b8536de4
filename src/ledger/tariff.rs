//! Fixed tariff table.
//!
//! Every charge amount in the ledger comes from this table; callers never
//! price their own charges. Values are whole currency units.

/// Fee charged when a bid is placed.
pub const BID_FEE: u32 = 9;

/// Bonus funded per contributor.
pub const BONUS_PER_CONTRIBUTOR: u32 = 200;

/// Flat fee charged on a withdrawal request.
pub const WITHDRAWAL_FEE: u32 = 20;

// Withdrawal payout bounds (inclusive)
pub const WITHDRAWAL_MIN: u32 = 100;
pub const WITHDRAWAL_MAX: u32 = 10_000;

/// Subscription purchase price.
pub const SUBSCRIPTION: u32 = 299;

/// Fee charged when a listing is published.
pub const LISTING_FEE: u32 = 199;
