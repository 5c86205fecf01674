use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// future value under simple interest: `principal * (1 + rate * periods)`
///
/// `monthly_rate` is a decimal fraction; nothing is rounded here.
pub fn simple_interest_value(principal: Money, monthly_rate: Rate, periods: u32) -> Money {
    let factor = Decimal::ONE + monthly_rate.as_decimal() * Decimal::from(periods);
    principal * factor
}

/// interest earned under simple interest, without the principal
pub fn simple_interest(principal: Money, monthly_rate: Rate, periods: u32) -> Money {
    simple_interest_value(principal, monthly_rate, periods) - principal
}
