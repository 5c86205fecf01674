/// quick start - simulate both interest regimes for the same loan
use loan_engine::{format_currency, simulate_loan, CalculationOptions, Money};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let principal = Money::from_major(1_000);

    for options in [
        CalculationOptions::flat_rate(dec!(2.5)),
        CalculationOptions::price_table(dec!(2.5)),
    ] {
        let schedule = simulate_loan(principal, 10, dec!(2.5), &options);

        println!(
            "compounds interest: {} | total paid {} | total interest {}",
            options.compounds_interest,
            format_currency(schedule.total_amount),
            format_currency(schedule.total_interest),
        );
        for line in &schedule.lines {
            println!(
                "  #{:>2}  installment {:>12}  interest {:>10}  principal {:>12}  balance {:>12}",
                line.number,
                format_currency(line.installment_amount),
                format_currency(line.interest_portion),
                format_currency(line.principal_portion),
                format_currency(line.remaining_balance),
            );
        }
        println!();
    }

    Ok(())
}
