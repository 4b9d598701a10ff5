//! Reward points calculation.
//!
//! Tiers:
//!
//! - amount <= 50: no points
//! - 50 < amount <= 100: 1 point per dollar over 50
//! - amount > 100: 50 points plus 2 points per dollar over 100
//!
//! Fractional points are truncated after the tier arithmetic.

use crate::amount::Amount;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Lower bound of the single-rate tier (exclusive).
pub const SINGLE_RATE_THRESHOLD: i64 = 50;

/// Lower bound of the double-rate tier (exclusive).
pub const DOUBLE_RATE_THRESHOLD: i64 = 100;

/// Points granted by a full single-rate tier.
const SINGLE_RATE_TIER_POINTS: i64 = DOUBLE_RATE_THRESHOLD - SINGLE_RATE_THRESHOLD;

/// Points per dollar above the double-rate threshold.
const DOUBLE_RATE: i64 = 2;

/// Computes the reward points earned by a purchase of `amount`.
///
/// Never fails and never returns a negative value: zero and negative
/// amounts earn nothing.
///
/// # Examples
///
/// ```
/// use customer_rewards::{reward_points, Amount};
///
/// assert_eq!(reward_points(Amount::from(120)), 90);
/// assert_eq!(reward_points(Amount::from(50)), 0);
/// ```
pub fn reward_points(amount: Amount) -> u64 {
    let value = amount.value();
    let single = Decimal::from(SINGLE_RATE_THRESHOLD);
    let double = Decimal::from(DOUBLE_RATE_THRESHOLD);

    let points = if value <= single {
        Some(Decimal::ZERO)
    } else if value <= double {
        Some(value - single)
    } else {
        (value - double)
            .checked_mul(Decimal::from(DOUBLE_RATE))
            .and_then(|over| over.checked_add(Decimal::from(SINGLE_RATE_TIER_POINTS)))
    };

    // Saturates past u64::MAX, including when Decimal itself overflows.
    points
        .and_then(|p| p.trunc().to_u64())
        .unwrap_or(u64::MAX)
}
