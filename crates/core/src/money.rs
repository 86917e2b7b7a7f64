//! Currency display for prices and order totals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol prefixed to every displayed amount (Philippine peso).
pub const CURRENCY_SYMBOL: &str = "\u{20b1}";

/// Format an amount as `₱1,234.50`: two decimals, comma thousands separators.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction}")
}
