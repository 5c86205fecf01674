/// renegotiation - fold overdue installments and their charges into a new plan
use chrono::NaiveDate;
use loan_engine::payments::quote;
use loan_engine::{format_currency, CalculationOptions, Money, RenegotiationRequest};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = CalculationOptions::price_table(dec!(3))
        .with_grace_period(5)
        .with_late_charges(dec!(2), dec!(1));

    let request = RenegotiationRequest::new(Money::from_major(4_000), 8, dec!(3))
        .with_overdue(Money::from_major(650), 42)
        .with_overdue(Money::from_major(650), 12)
        .with_down_payment(Money::from_major(500));

    let quote = quote(&request, &options)?;

    println!("overdue:        {}", format_currency(quote.overdue_amount));
    println!("late fees:      {}", format_currency(quote.late_fees));
    println!("late interest:  {}", format_currency(quote.late_interest));
    println!("down payment:   {}", format_currency(quote.down_payment));
    println!("renegotiated:   {}", format_currency(quote.renegotiated_principal));
    println!();

    let first_due = NaiveDate::from_ymd_opt(2024, 5, 15).ok_or("invalid due date")?;
    for (due, line) in quote.schedule.dated_lines(first_due)? {
        println!(
            "  {} #{} {} (balance {})",
            due,
            line.number,
            format_currency(line.installment_amount),
            format_currency(line.remaining_balance),
        );
    }

    println!("\n{}", quote.schedule.json()?);

    Ok(())
}
