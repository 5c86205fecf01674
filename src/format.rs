use crate::decimal::{round2, Money};

/// render as Brazilian real: `R$ 1.234,50`
///
/// The sign is dropped; negative amounts render as their absolute value.
pub fn format_currency(value: Money) -> String {
    let mut amount = round2(value.as_decimal().abs());
    amount.rescale(2);

    let text = amount.to_string();
    let (integer, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("R$ {},{}", group_thousands(integer), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
