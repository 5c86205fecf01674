pub mod accrual;
pub mod compound;
pub mod penalty;

pub use accrual::simple_interest_value;
pub use compound::{compound_factor, compound_interest_value};
pub use penalty::{late_charge, overdue_installment_charge};
