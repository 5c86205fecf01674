use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CalculationOptions;
use crate::decimal::Money;
use crate::errors::{EngineError, Result};
use crate::interest::late_charge;
use crate::payments::amortization::{simulate_loan, AmortizationSchedule};
use crate::types::OverdueInstallment;

/// terms proposed for folding an overdue loan into a new schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenegotiationRequest {
    pub overdue: Vec<OverdueInstallment>,
    /// principal of installments not yet due
    pub outstanding_principal: Money,
    pub down_payment: Money,
    pub installment_count: u32,
    pub monthly_rate_percent: Decimal,
}

impl RenegotiationRequest {
    pub fn new(outstanding_principal: Money, installment_count: u32, monthly_rate_percent: Decimal) -> Self {
        Self {
            overdue: Vec::new(),
            outstanding_principal,
            down_payment: Money::ZERO,
            installment_count,
            monthly_rate_percent,
        }
    }

    pub fn with_overdue(mut self, amount_due: Money, days_late: u32) -> Self {
        self.overdue.push(OverdueInstallment::new(amount_due, days_late));
        self
    }

    pub fn with_down_payment(mut self, down_payment: Money) -> Self {
        self.down_payment = down_payment;
        self
    }
}

/// breakdown of a renegotiated debt and its new schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenegotiationQuote {
    pub overdue_amount: Money,
    pub late_fees: Money,
    pub late_interest: Money,
    pub outstanding_principal: Money,
    pub down_payment: Money,
    pub renegotiated_principal: Money,
    pub schedule: AmortizationSchedule,
}

impl RenegotiationQuote {
    /// debt before the down payment
    pub fn total_debt(&self) -> Money {
        self.overdue_amount + self.late_fees + self.late_interest + self.outstanding_principal
    }
}

/// charge every overdue installment, subtract the down payment and schedule the rest
pub fn quote(request: &RenegotiationRequest, options: &CalculationOptions) -> Result<RenegotiationQuote> {
    if request.installment_count == 0 {
        return Err(EngineError::InvalidConfiguration {
            message: "renegotiation needs at least one installment".to_string(),
        });
    }

    let mut overdue_amount = Money::ZERO;
    let mut late_fees = Money::ZERO;
    let mut late_interest = Money::ZERO;

    for installment in &request.overdue {
        let charge = late_charge(installment.amount_due, installment.days_late, options);
        overdue_amount += installment.amount_due;
        late_fees += charge.fee_amount;
        late_interest += charge.interest_amount;
    }

    let debt = (overdue_amount + late_fees + late_interest + request.outstanding_principal).round_cents();
    if request.down_payment > debt {
        return Err(EngineError::DownPaymentExceedsDebt {
            debt,
            down_payment: request.down_payment,
        });
    }

    let renegotiated_principal = (debt - request.down_payment).round_cents();

    debug!(
        overdue_installments = request.overdue.len(),
        %debt,
        down_payment = %request.down_payment,
        %renegotiated_principal,
        installment_count = request.installment_count,
        "renegotiation quoted"
    );

    let schedule = simulate_loan(
        renegotiated_principal,
        request.installment_count,
        request.monthly_rate_percent,
        options,
    );

    Ok(RenegotiationQuote {
        overdue_amount,
        late_fees,
        late_interest,
        outstanding_principal: request.outstanding_principal,
        down_payment: request.down_payment,
        renegotiated_principal,
        schedule,
    })
}
