use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::domain::logic::rounding::round_amount;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, EUR = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format amount with currency symbol, correct number of decimal places and
/// thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of currency.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let rounded = round_amount(amount, decimal_places);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let integer_part = abs
        .trunc()
        .to_u64()
        .map_or_else(|| abs.trunc().to_string(), |i| i.to_formatted_string(&Locale::en));
    if decimal_places == 0 {
        return format!("{}{} {}", sign, integer_part, currency.symbol());
    }
    let fractional_part = ((abs - abs.trunc()) * Decimal::from(10u64.pow(decimal_places)))
        .trunc()
        .to_u64()
        .unwrap_or(0);
    format!(
        "{}{}.{:0width$} {}",
        sign,
        integer_part,
        fractional_part,
        currency.symbol(),
        width = decimal_places as usize,
    )
}
