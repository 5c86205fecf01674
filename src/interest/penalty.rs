use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculationOptions;
use crate::decimal::Money;
use crate::types::LateChargeResult;

/// raw (unbooked) fee and interest for an overdue amount
fn raw_charges(amount_due: Money, days_late: u32, options: &CalculationOptions) -> (Money, Money) {
    let fee = amount_due.apply(options.late_fee_rate());
    // prorate over a 30-day month last, so exact half cents stay exact
    let interest = amount_due.apply(options.late_interest_rate()) * Decimal::from(days_late) / Decimal::from(30);
    (fee, interest)
}

fn within_grace(amount_due: Money) -> LateChargeResult {
    LateChargeResult {
        fee_amount: Money::ZERO,
        interest_amount: Money::ZERO,
        total_amount: amount_due,
    }
}

/// late fee and prorated late interest on an overdue amount
///
/// Inside the grace window (inclusive) nothing is charged. Without a grace
/// period the fee applies even at zero days late. Fee and interest are booked
/// to cents first and the total is the booked sum.
pub fn late_charge(amount_due: Money, days_late: u32, options: &CalculationOptions) -> LateChargeResult {
    if options.is_within_grace(days_late) {
        debug!(%amount_due, days_late, max_grace_days = options.max_grace_days, "late charge waived within grace");
        return within_grace(amount_due);
    }

    let (fee, interest) = raw_charges(amount_due, days_late, options);
    let fee_amount = fee.round_cents();
    let interest_amount = interest.round_cents();
    let total_amount = (amount_due + fee_amount + interest_amount).round_cents();

    debug!(%amount_due, days_late, %fee_amount, %interest_amount, %total_amount, "late charge assessed");

    LateChargeResult {
        fee_amount,
        interest_amount,
        total_amount,
    }
}

/// same policy as [`late_charge`], with fee, interest and total booked independently
///
/// The total is rounded from the unrounded fee and interest, so it can differ
/// by a cent from `amount + fee_amount + interest_amount`.
pub fn overdue_installment_charge(
    amount_due: Money,
    days_late: u32,
    options: &CalculationOptions,
) -> LateChargeResult {
    if options.is_within_grace(days_late) {
        return within_grace(amount_due);
    }

    let (fee, interest) = raw_charges(amount_due, days_late, options);

    LateChargeResult {
        fee_amount: fee.round_cents(),
        interest_amount: interest.round_cents(),
        total_amount: (amount_due + fee + interest).round_cents(),
    }
}
