//! Monetary types for participant earnings.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Earnings represented as a Decimal for precision.
pub type Earnings = Decimal;

/// Value of one win (credited) or one loss (debited) for a claimed team.
pub const RATE: Decimal = dec!(0.25);

/// Round an earnings amount to the 2 fractional digits the ledger stores.
#[must_use]
pub fn round_earnings(amount: Earnings) -> Earnings {
    amount.round_dp(2)
}
