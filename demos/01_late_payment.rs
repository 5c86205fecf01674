/// late payment - grace window, late fee and prorated late interest
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use loan_engine::payments::days_late_now;
use loan_engine::{format_currency, late_charge, CalculationOptions, Money, SafeTimeProvider, TimeSource};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = CalculationOptions::from_json(
        r#"{
            "compounds_interest": true,
            "accrues_monthly_rate": false,
            "allows_grace_period": true,
            "max_grace_days": 5,
            "default_monthly_rate_percent": "2.5",
            "late_interest_rate_percent": "1",
            "late_fee_percent": "2"
        }"#,
    )?;
    options.validate()?;

    let due = NaiveDate::from_ymd_opt(2024, 3, 10).ok_or("invalid due date")?;
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();
    let amount_due = Money::from_major(1_000);

    for step in [0, 3, 2, 5, 20] {
        controller.advance(Duration::days(step));
        let days = days_late_now(due, &time);
        let charge = late_charge(amount_due, days, &options);

        println!(
            "{} | {:>2} days late | fee {} | interest {} | total {}",
            time.now().format("%Y-%m-%d"),
            days,
            format_currency(charge.fee_amount),
            format_currency(charge.interest_amount),
            format_currency(charge.total_amount),
        );
    }

    Ok(())
}
