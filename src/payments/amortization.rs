use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::CalculationOptions;
use crate::decimal::{saturating_mul, Money, Rate};
use crate::errors::Result;
use crate::interest::compound_factor;
use crate::payments::calendar;
use crate::types::InstallmentLine;

/// simulated repayment plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub installment_count: u32,
    pub monthly_rate: Rate,
    pub compounds_interest: bool,
    pub lines: Vec<InstallmentLine>,
    pub total_interest: Money,
    pub total_amount: Money,
}

impl AmortizationSchedule {
    fn from_lines(
        principal: Money,
        monthly_rate: Rate,
        compounds_interest: bool,
        lines: Vec<InstallmentLine>,
    ) -> Self {
        let total_interest = lines.iter().map(|l| l.interest_portion).sum();
        let total_amount = lines.iter().map(|l| l.total_amount).sum();

        Self {
            principal,
            installment_count: lines.len() as u32,
            monthly_rate,
            compounds_interest,
            lines,
            total_interest,
            total_amount,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// get line by its 1-based number
    pub fn line(&self, number: u32) -> Option<&InstallmentLine> {
        let index = number.checked_sub(1)?;
        self.lines.get(index as usize)
    }

    /// remaining balance after the given installment; principal before the first
    pub fn balance_after(&self, number: u32) -> Money {
        self.line(number)
            .map(|l| l.remaining_balance)
            .unwrap_or(self.principal)
    }

    /// sum of booked principal portions
    pub fn total_principal(&self) -> Money {
        self.lines.iter().map(|l| l.principal_portion).sum()
    }

    /// pair each line with its monthly due date, starting at `first_due`
    pub fn dated_lines(&self, first_due: NaiveDate) -> Result<Vec<(NaiveDate, &InstallmentLine)>> {
        let dates = calendar::due_dates(first_due, self.installment_count)?;
        Ok(dates.into_iter().zip(self.lines.iter()).collect())
    }

    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// fixed payment of a price table: `P * r(1+r)^n / ((1+r)^n - 1)`, booked to cents
///
/// A zero rate spreads the principal evenly and zero periods return the
/// principal, since `Decimal` has no NaN to carry the singular cases.
/// When `(1+r)^n` is too large to multiply out, the equivalent form
/// `P * r / (1 - (1+r)^-n)` is used; anything still out of range saturates.
pub fn fixed_installment_amount(principal: Money, monthly_rate: Rate, periods: u32) -> Money {
    if periods == 0 {
        return principal.round_cents();
    }

    if monthly_rate.is_zero() {
        return (principal / Decimal::from(periods)).round_cents();
    }

    let r = monthly_rate.as_decimal();
    let compound = compound_factor(monthly_rate, periods);
    let interest_only = saturating_mul(principal.as_decimal(), r);

    let payment = match interest_only.checked_mul(compound) {
        Some(numerator) => numerator.checked_div(compound - Decimal::ONE),
        None => {
            // (1+r)^-n underflows to zero at this magnitude
            let discount = Decimal::ONE.checked_div(compound).unwrap_or(Decimal::ZERO);
            interest_only.checked_div(Decimal::ONE - discount)
        }
    };

    match payment {
        Some(payment) => Money::from_decimal(payment).round_cents(),
        // the rate is so small that (1+r)^n rounds to one
        None => (principal / Decimal::from(periods)).round_cents(),
    }
}

/// simulate the repayment plan for a loan
///
/// `options.compounds_interest` selects the regime: a price table with
/// interest on the running balance, or a flat rate charged once on the
/// principal and spread evenly. Every figure is booked to cents line by
/// line and the last line always closes the balance at zero.
pub fn simulate_loan(
    principal: Money,
    installment_count: u32,
    monthly_rate_percent: Decimal,
    options: &CalculationOptions,
) -> AmortizationSchedule {
    let monthly_rate = Rate::from_percent(monthly_rate_percent);

    debug!(
        %principal,
        installment_count,
        %monthly_rate,
        compounds_interest = options.compounds_interest,
        "simulating loan"
    );

    let lines = if installment_count == 0 {
        Vec::new()
    } else if options.compounds_interest {
        price_table_lines(principal, installment_count, monthly_rate)
    } else {
        flat_rate_lines(principal, installment_count, monthly_rate)
    };

    AmortizationSchedule::from_lines(principal, monthly_rate, options.compounds_interest, lines)
}

/// simulate using the options' default monthly rate
pub fn simulate_loan_with_defaults(
    principal: Money,
    installment_count: u32,
    options: &CalculationOptions,
) -> AmortizationSchedule {
    simulate_loan(
        principal,
        installment_count,
        options.default_monthly_rate_percent,
        options,
    )
}

/// flat interest on principal, spread evenly over every installment
fn flat_rate_lines(principal: Money, installment_count: u32, monthly_rate: Rate) -> Vec<InstallmentLine> {
    let count = Decimal::from(installment_count);
    let total_interest = principal.apply(monthly_rate);

    let amortization = principal / count;
    let interest = total_interest / count;
    let installment_amount = (amortization + interest).round_cents();

    let mut lines = Vec::with_capacity(installment_count as usize);
    let mut balance = principal;

    for number in 1..=installment_count {
        let remaining_balance = if number < installment_count {
            (balance - amortization).round_cents()
        } else {
            Money::ZERO
        };

        trace!(number, %installment_amount, %remaining_balance, "flat rate line");

        lines.push(InstallmentLine {
            number,
            installment_amount,
            interest_portion: interest.round_cents(),
            principal_portion: amortization.round_cents(),
            remaining_balance,
            total_amount: installment_amount,
        });

        balance = remaining_balance;
    }

    lines
}

/// constant installment, interest on the running balance
fn price_table_lines(principal: Money, installment_count: u32, monthly_rate: Rate) -> Vec<InstallmentLine> {
    let installment_amount = fixed_installment_amount(principal, monthly_rate, installment_count);

    let mut lines = Vec::with_capacity(installment_count as usize);
    let mut balance = principal;

    for number in 1..=installment_count {
        let interest_portion = balance.apply(monthly_rate).round_cents();
        let principal_portion = (installment_amount - interest_portion).round_cents();
        let remaining_balance = if number < installment_count {
            (balance - principal_portion).round_cents()
        } else {
            Money::ZERO
        };

        trace!(number, %interest_portion, %principal_portion, %remaining_balance, "price table line");

        lines.push(InstallmentLine {
            number,
            installment_amount,
            interest_portion,
            principal_portion,
            remaining_balance,
            total_amount: installment_amount,
        });

        balance = remaining_balance;
    }

    lines
}
