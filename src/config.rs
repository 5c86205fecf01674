use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{EngineError, Result};

/// interest regime for one loan product
///
/// percentage fields are per-100 values (`2.5` means 2.5%). The calculations
/// never validate them; call [`CalculationOptions::validate`] when loading
/// user-edited records if negative values should be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CalculationOptions {
    /// interest accrues on accumulated interest (price table)
    pub compounds_interest: bool,
    /// the nominal rate escalates month over month; accepted but not used by the schedules
    pub accrues_monthly_rate: bool,
    /// no late charges while days late <= `max_grace_days`
    pub allows_grace_period: bool,
    pub max_grace_days: u32,
    pub default_monthly_rate_percent: Decimal,
    /// monthly rate charged per day late, prorated over 30 days
    pub late_interest_rate_percent: Decimal,
    /// one-time fee once grace is exceeded
    pub late_fee_percent: Decimal,
}

impl CalculationOptions {
    /// compound interest, fixed installments
    pub fn price_table(monthly_rate_percent: Decimal) -> Self {
        Self {
            compounds_interest: true,
            default_monthly_rate_percent: monthly_rate_percent,
            ..Self::default()
        }
    }

    /// flat interest on principal, spread evenly
    pub fn flat_rate(monthly_rate_percent: Decimal) -> Self {
        Self {
            compounds_interest: false,
            default_monthly_rate_percent: monthly_rate_percent,
            ..Self::default()
        }
    }

    pub fn with_grace_period(mut self, max_grace_days: u32) -> Self {
        self.allows_grace_period = true;
        self.max_grace_days = max_grace_days;
        self
    }

    pub fn without_grace_period(mut self) -> Self {
        self.allows_grace_period = false;
        self.max_grace_days = 0;
        self
    }

    pub fn with_late_charges(mut self, fee_percent: Decimal, interest_rate_percent: Decimal) -> Self {
        self.late_fee_percent = fee_percent;
        self.late_interest_rate_percent = interest_rate_percent;
        self
    }

    pub fn with_monthly_rate_escalation(mut self, accrues: bool) -> Self {
        self.accrues_monthly_rate = accrues;
        self
    }

    pub fn default_monthly_rate(&self) -> Rate {
        Rate::from_percent(self.default_monthly_rate_percent)
    }

    pub fn late_interest_rate(&self) -> Rate {
        Rate::from_percent(self.late_interest_rate_percent)
    }

    pub fn late_fee_rate(&self) -> Rate {
        Rate::from_percent(self.late_fee_percent)
    }

    /// true when `days_late` falls inside the grace window (inclusive)
    pub fn is_within_grace(&self, days_late: u32) -> bool {
        self.allows_grace_period && days_late <= self.max_grace_days
    }

    /// load a configuration record; every field is required and strictly typed
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// reject negative percentages
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("default_monthly_rate_percent", self.default_monthly_rate_percent),
            ("late_interest_rate_percent", self.late_interest_rate_percent),
            ("late_fee_percent", self.late_fee_percent),
        ];

        for (name, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::InvalidConfiguration {
                    message: format!("{name} must not be negative, got {value}"),
                });
            }
        }

        Ok(())
    }
}
