use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use savings_core::calculations::common::round_half_up;

/// Anything that cannot be part of a plain decimal number.
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d.\-]").expect("static pattern"));

/// Longest leading `-123.45`, `123.`, or `.45` shape.
static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(\d*)(?:\.(\d*))?").expect("static pattern"));

/// Parses free-form text such as `"$10,000"` or `"6%"` into a [`Decimal`].
///
/// Every character other than digits, `.` and `-` is dropped, then the
/// longest leading number is read. Text with no number in it yields zero.
pub fn parse_tolerant_number(text: &str) -> Decimal {
    let stripped = NON_NUMERIC.replace_all(text, "");
    let Some(captures) = NUMERIC_PREFIX.captures(&stripped) else {
        return Decimal::ZERO;
    };

    let sign = captures.get(1).map_or("", |m| m.as_str());
    let whole = captures.get(2).map_or("", |m| m.as_str());
    let fraction = captures.get(3).map_or("", |m| m.as_str());
    if whole.is_empty() && fraction.is_empty() {
        tracing::debug!(input = %text, "no number in input, using 0");
        return Decimal::ZERO;
    }

    let normalized = format!(
        "{sign}{}.{}",
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction }
    );
    normalized.parse().unwrap_or_else(|e| {
        tracing::debug!(input = %text, "unparseable number, using 0: {}", e);
        Decimal::ZERO
    })
}

/// Parses percentage text (`"6%"`, `"6.5"`) into a fraction (`0.06`, `0.065`).
pub fn parse_percentage(text: &str) -> Decimal {
    parse_tolerant_number(&text.replace('%', "")) / Decimal::ONE_HUNDRED
}

/// Parses a term such as `"10 year"` into whole years.
///
/// Fractions are truncated; negative values become zero.
pub fn parse_term_years(text: &str) -> u32 {
    parse_tolerant_number(text).trunc().to_u32().unwrap_or(0)
}

/// Groups the integer digits of an already-rounded, non-negative amount.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_dollars(
    amount: Decimal,
    decimal_places: u32,
) -> String {
    let mut rounded = if decimal_places == 2 {
        round_half_up(amount)
    } else {
        amount.round_dp_with_strategy(
            decimal_places,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        )
    };
    rounded.rescale(decimal_places);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    match fraction {
        Some(fraction) => format!("{sign}${}.{fraction}", group_thousands(whole)),
        None => format!("{sign}${}", group_thousands(whole)),
    }
}

/// Formats an amount as US dollars with cents: `$1,234.56`, `-$12.00`.
pub fn format_usd(amount: Decimal) -> String {
    format_dollars(amount, 2)
}

/// Formats an amount as whole US dollars: `$1,235`.
pub fn format_usd_whole(amount: Decimal) -> String {
    format_dollars(amount, 0)
}

/// Formats an amount with exactly two decimals and no grouping: `216.35`.
pub fn format_fixed(amount: Decimal) -> String {
    let mut rounded = round_half_up(amount);
    rounded.rescale(2);
    rounded.to_string()
}

/// Formats a value-axis tick, abbreviating thousands: `2.5K`, `10K`, `500`.
pub fn abbreviate_tick(value: Decimal) -> String {
    if value >= Decimal::ONE_THOUSAND {
        format!("{}K", (value / Decimal::ONE_THOUSAND).normalize())
    } else {
        value.normalize().to_string()
    }
}
