use loan_engine::{
    compound_interest_value, fixed_installment_amount, format_currency, late_charge, simple_interest_value,
    simulate_loan, CalculationOptions, Money, Rate,
};
use rust_decimal_macros::dec;

fn cents(value: rust_decimal::Decimal) -> Money {
    Money::from_decimal(value)
}

#[test]
fn test_accrual_reference_values() {
    let principal = Money::from_major(1_000);
    let rate = Rate::from_decimal(dec!(0.025));

    assert_eq!(simple_interest_value(principal, rate, 12).round_cents(), cents(dec!(1300.00)));
    assert_eq!(compound_interest_value(principal, rate, 12).round_cents(), cents(dec!(1344.89)));
    assert_eq!(fixed_installment_amount(principal, rate, 12), cents(dec!(97.49)));
}

#[test]
fn test_late_charge_reference_values() {
    let options = CalculationOptions::default()
        .with_grace_period(5)
        .with_late_charges(dec!(2), dec!(1));

    let within = late_charge(Money::from_major(1_000), 3, &options);
    assert_eq!(within.fee_amount, Money::ZERO);
    assert_eq!(within.interest_amount, Money::ZERO);
    assert_eq!(within.total_amount, Money::from_major(1_000));

    let past = late_charge(Money::from_major(1_000), 10, &options);
    assert_eq!(past.fee_amount, cents(dec!(20.00)));
    assert_eq!(past.interest_amount, cents(dec!(3.33)));
    assert_eq!(past.total_amount, cents(dec!(1023.33)));
}

#[test]
fn test_flat_rate_schedule_reference() {
    let options = CalculationOptions::flat_rate(dec!(2.5));
    let schedule = simulate_loan(Money::from_major(1_000), 10, dec!(2.5), &options);

    assert_eq!(schedule.len(), 10);
    assert!(schedule
        .lines
        .iter()
        .all(|line| line.installment_amount == cents(dec!(102.50))));
    assert_eq!(schedule.lines[9].remaining_balance, Money::ZERO);
}

#[test]
fn test_price_table_schedule_reference() {
    let options = CalculationOptions::price_table(dec!(2.5));
    let schedule = simulate_loan(Money::from_major(1_000), 10, dec!(2.5), &options);

    assert_eq!(schedule.len(), 10);
    assert_eq!(schedule.lines[0].installment_amount, cents(dec!(114.26)));
    assert_eq!(schedule.lines[9].remaining_balance, Money::ZERO);

    let drift = (schedule.total_principal() - Money::from_major(1_000)).abs();
    assert!(drift <= Money::from_cents(2), "principal drift {drift}");
}

#[test]
fn test_currency_reference_values() {
    assert_eq!(format_currency(Money::from_major(1_000)), "R$ 1.000,00");
    assert_eq!(format_currency(cents(dec!(1234.56))), "R$ 1.234,56");
    assert_eq!(format_currency(cents(dec!(0.99))), "R$ 0,99");
    assert_eq!(format_currency(cents(dec!(1234.5))), "R$ 1.234,50");
}
