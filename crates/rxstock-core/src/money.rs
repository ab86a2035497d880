//! Currency helpers shared across the client.
//!
//! All monetary amounts are [`rust_decimal::Decimal`] to keep price math
//! exact; comparisons against supplier catalogs still use a small epsilon
//! because catalog costs originate from systems that round differently.

use rust_decimal::Decimal;

/// Monetary amount in the store's base currency.
pub type Money = Decimal;

/// Minimum cost difference considered a real price change.
///
/// Differences at or below this threshold are treated as rounding noise and
/// never reported as supplier cost changes.
#[must_use]
pub fn cost_epsilon() -> Decimal {
    // 0.001
    Decimal::new(1, 3)
}

/// Percentage change from `old` to `new`, as a percentage value (20.0 for a
/// 10.00 → 12.00 move). Returns zero when `old` is zero.
#[must_use]
pub fn percent_change(old: Decimal, new: Decimal) -> Decimal {
    if old.is_zero() {
        return Decimal::ZERO;
    }
    (new - old) / old * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_of_increase() {
        let old = Decimal::new(1000, 2); // 10.00
        let new = Decimal::new(1200, 2); // 12.00
        assert_eq!(percent_change(old, new), Decimal::from(20));
    }

    #[test]
    fn percent_change_of_decrease() {
        let old = Decimal::from(10);
        let new = Decimal::from(5);
        assert_eq!(percent_change(old, new), Decimal::from(-50));
    }

    #[test]
    fn percent_change_from_zero_is_zero() {
        assert_eq!(
            percent_change(Decimal::ZERO, Decimal::from(7)),
            Decimal::ZERO
        );
    }

    #[test]
    fn epsilon_is_one_thousandth() {
        assert_eq!(cost_epsilon(), Decimal::new(1, 3));
    }
}
