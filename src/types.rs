use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// one row of a simulated amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentLine {
    /// 1-based, contiguous
    pub number: u32,
    /// what the borrower pays this period
    pub installment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    /// outstanding principal after this installment; zero on the last line
    pub remaining_balance: Money,
    /// equal to `installment_amount` here; callers compose late charges on top
    pub total_amount: Money,
}

/// outcome of a late charge assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LateChargeResult {
    pub fee_amount: Money,
    pub interest_amount: Money,
    pub total_amount: Money,
}

impl LateChargeResult {
    /// fee plus interest, without the original amount
    pub fn charges(&self) -> Money {
        self.fee_amount + self.interest_amount
    }

    pub fn is_charged(&self) -> bool {
        !self.charges().is_zero()
    }
}

/// an installment past its due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueInstallment {
    pub amount_due: Money,
    pub days_late: u32,
}

impl OverdueInstallment {
    pub fn new(amount_due: Money, days_late: u32) -> Self {
        Self { amount_due, days_late }
    }
}
