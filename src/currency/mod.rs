//! Money parsing and display helpers.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{BookError, BookResult};

pub const CURRENCY_SYMBOL: &str = "$";
const DISPLAY_PLACES: u32 = 2;

/// Renders an amount as `$<value>` rounded to two places, e.g. `$-5.00`.
pub fn format_money(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("{CURRENCY_SYMBOL}{rounded:.2}")
}

/// Parses user input such as `12`, `12.5` or `$12.50` into a decimal amount.
pub fn parse_amount(raw: &str) -> BookResult<Decimal> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
    Decimal::from_str(digits.trim())
        .map_err(|_| BookError::InvalidInput(format!("`{}` is not a valid amount", raw.trim())))
}
