pub mod amortization;
pub mod calendar;
pub mod renegotiation;

pub use amortization::{
    fixed_installment_amount, simulate_loan, simulate_loan_with_defaults, AmortizationSchedule,
};
pub use calendar::{days_late, days_late_now, due_dates};
pub use renegotiation::{quote, RenegotiationQuote, RenegotiationRequest};
