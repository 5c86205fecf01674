use rust_decimal::Decimal;

use crate::decimal::{saturating_mul, Money, Rate};

/// `(1 + rate)^periods`
///
/// Saturates at `Decimal::MAX` (or `Decimal::MIN` for a negative base)
/// once the power leaves the representable range.
pub fn compound_factor(rate: Rate, periods: u32) -> Decimal {
    let base = Decimal::ONE + rate.as_decimal();
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = saturating_mul(factor, base);
        if factor == Decimal::MAX || factor == Decimal::MIN {
            break;
        }
    }
    factor
}

/// future value under compound interest: `principal * (1 + rate)^periods`
///
/// `monthly_rate` is a decimal fraction; nothing is rounded here. Values
/// beyond the `Decimal` range saturate instead of overflowing.
pub fn compound_interest_value(principal: Money, monthly_rate: Rate, periods: u32) -> Money {
    principal.saturating_mul(compound_factor(monthly_rate, periods))
}

/// interest earned under compound interest, without the principal
pub fn compound_interest(principal: Money, monthly_rate: Rate, periods: u32) -> Money {
    compound_interest_value(principal, monthly_rate, periods) - principal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::simple_interest_value;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_interest_value() {
        let value = compound_interest_value(Money::from_major(1_000), Rate::from_decimal(dec!(0.025)), 12);
        assert_eq!(value.round_cents(), Money::from_decimal(dec!(1344.89)));
    }

    #[test]
    fn test_compound_factor() {
        assert_eq!(compound_factor(Rate::from_decimal(dec!(0.1)), 0), Decimal::ONE);
        assert_eq!(compound_factor(Rate::from_decimal(dec!(0.1)), 2), dec!(1.21));
        assert_eq!(compound_factor(Rate::ZERO, 24), Decimal::ONE);
    }

    #[test]
    fn test_compound_beats_simple_after_one_period() {
        let principal = Money::from_major(10_000);
        let rate = Rate::from_percent(dec!(1.5));

        assert_eq!(
            compound_interest_value(principal, rate, 1),
            simple_interest_value(principal, rate, 1)
        );
        assert!(compound_interest_value(principal, rate, 12) > simple_interest_value(principal, rate, 12));
    }

    #[test]
    fn test_large_exponent_saturates() {
        let doubling = Rate::from_decimal(dec!(1.0));
        assert_eq!(compound_factor(doubling, 100), Decimal::MAX);

        let value = compound_interest_value(Money::from_major(1_000), doubling, 100);
        assert_eq!(value, Money::from_decimal(Decimal::MAX));

        let owed = compound_interest_value(Money::from_major(-1_000), doubling, 100);
        assert_eq!(owed, Money::from_decimal(Decimal::MIN));
    }

    #[test]
    fn test_compound_interest() {
        let interest = compound_interest(Money::from_major(10_000), Rate::from_percent(dec!(1)), 12);
        assert_eq!(interest.round_cents(), Money::from_decimal(dec!(1268.25)));
    }
}
