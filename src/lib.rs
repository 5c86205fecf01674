pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod interest;
pub mod payments;
pub mod types;

// re-export key types
pub use config::CalculationOptions;
pub use decimal::{Money, Rate};
pub use errors::{EngineError, Result};
pub use format::format_currency;
pub use interest::{
    compound_interest_value, late_charge, overdue_installment_charge, simple_interest_value,
};
pub use payments::{
    fixed_installment_amount, simulate_loan, simulate_loan_with_defaults, AmortizationSchedule,
    RenegotiationQuote, RenegotiationRequest,
};
pub use types::{InstallmentLine, LateChargeResult, OverdueInstallment};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
