//! Amount and date rendering shared by statement listings.

use chrono::NaiveDate;

/// Symbol prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "S$";

/// Renders an amount with at least one decimal place (`200.0`, `50.5`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}

/// Renders an amount prefixed with the currency symbol.
pub fn format_currency_value(amount: f64) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_amount(amount))
}

/// ISO-8601 date rendering used in listings.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
