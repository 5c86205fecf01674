use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// monetary amount, kept at full precision until booked with `round_cents`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str_exact(s)?))
    }

    /// create from integer amount (reais, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (centavos, cents)
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// book the amount: two places, half away from zero
    pub fn round_cents(&self) -> Self {
        Money(round2(self.0))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// apply a rate, unrounded
    pub fn apply(&self, rate: Rate) -> Self {
        Money(self.0 * rate.as_decimal())
    }

    /// multiply, clamping to the representable range instead of overflowing
    pub fn saturating_mul(&self, factor: Decimal) -> Self {
        Money(saturating_mul(self.0, factor))
    }
}

/// product clamped to `Decimal::MAX` / `Decimal::MIN` by the sign it would have had
pub(crate) fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        if a.is_sign_negative() != b.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// commercial rounding to cents
pub(crate) fn round2(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(self.0 * other)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(self.0 / other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + *x)
    }
}

/// rate type for interest rates, expressed as a decimal fraction (0.025 = 2.5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.025 for 2.5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 2.5 for 2.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_cents_half_away_from_zero() {
        assert_eq!(Money::from_decimal(dec!(2.345)).round_cents(), Money::from_decimal(dec!(2.35)));
        assert_eq!(Money::from_decimal(dec!(2.335)).round_cents(), Money::from_decimal(dec!(2.34)));
        assert_eq!(Money::from_decimal(dec!(-2.345)).round_cents(), Money::from_decimal(dec!(-2.35)));
        assert_eq!(Money::from_decimal(dec!(3.3333)).round_cents(), Money::from_decimal(dec!(3.33)));
    }

    #[test]
    fn test_money_keeps_precision_until_booked() {
        let third = Money::from_major(100) / dec!(3);
        assert!(third.as_decimal().scale() > 2);
        assert_eq!(third.round_cents().to_string(), "33.33");
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(12_345), Money::from_decimal(dec!(123.45)));
        assert_eq!(Money::from_cents(-5), Money::from_decimal(dec!(-0.05)));
    }

    #[test]
    fn test_rate_from_percent() {
        let amount = Money::from_major(1_000);
        let rate = Rate::from_percent(dec!(2.5));
        assert_eq!(rate.as_decimal(), dec!(0.025));
        assert_eq!(amount.apply(rate), Money::from_major(25));
        assert_eq!(rate.to_string(), "2.5%");
    }

    #[test]
    fn test_saturating_mul() {
        let amount = Money::from_major(1_000);
        assert_eq!(amount.saturating_mul(dec!(2.5)), Money::from_major(2_500));
        assert_eq!(amount.saturating_mul(Decimal::MAX), Money::from_decimal(Decimal::MAX));
        assert_eq!((-amount).saturating_mul(Decimal::MAX), Money::from_decimal(Decimal::MIN));
        assert_eq!(Money::ZERO.saturating_mul(Decimal::MAX), Money::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(1), Money::from_cents(50)].iter().sum();
        assert_eq!(total, Money::from_decimal(dec!(1.50)));
    }
}
