use chrono::{Months, NaiveDate};
use hourglass_rs::SafeTimeProvider;

use crate::errors::{EngineError, Result};

/// monthly due dates starting at `first_due`
///
/// Each date is offset from `first_due`, so a loan due on the 31st falls on
/// the last day of shorter months and returns to the 31st afterwards.
pub fn due_dates(first_due: NaiveDate, count: u32) -> Result<Vec<NaiveDate>> {
    (0..count)
        .map(|offset| {
            first_due
                .checked_add_months(Months::new(offset))
                .ok_or_else(|| EngineError::InvalidDate {
                    message: format!("installment {} after {first_due} is out of range", offset + 1),
                })
        })
        .collect()
}

/// whole days past `due` as of `as_of`; zero when paid on or before the due date
pub fn days_late(due: NaiveDate, as_of: NaiveDate) -> u32 {
    let days = (as_of - due).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// days past `due` according to the given clock
pub fn days_late_now(due: NaiveDate, time_provider: &SafeTimeProvider) -> u32 {
    days_late(due, time_provider.now().date_naive())
}
