//! Display Formatting
//!
//! Helpers that turn analytics output into the strings shown on the
//! dashboard. Numbers follow Italian conventions: `.` groups thousands and
//! `,` separates decimals.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency used when none is given
pub const DEFAULT_CURRENCY: &str = "EUR";

const PALETTE: [&str; 10] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6",
    "#EC4899", "#06B6D4", "#84CC16", "#F97316", "#6366F1",
];

const MONTHS_SHORT: [&str; 12] = [
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
];

const MONTHS_LONG: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno",
    "luglio", "agosto", "settembre", "ottobre", "novembre", "dicembre",
];

/// Rewrite a plain `-1234.56` rendering with Italian separators
fn localize(plain: &str) -> String {
    let (sign, digits) = plain
        .strip_prefix('-')
        .map_or(("", plain), |rest| ("-", rest));
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    let sign = if is_zero { "" } else { sign };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}

/// Symbols the Italian locale prints in place of the ISO code
fn currency_symbol(currency: &str) -> &str {
    match currency {
        "EUR" => "€",
        "GBP" => "£",
        other => other,
    }
}

/// Format a money amount with two decimals, e.g. `1.234,56 €`.
///
/// The symbol follows the amount after a non-breaking space. Currencies
/// without a local symbol (including `USD`) are printed as their ISO code.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!(
        "{}\u{a0}{}",
        localize(&format!("{rounded:.2}")),
        currency_symbol(currency)
    )
}

/// Format a number with a fixed number of decimals
pub fn format_number(value: f64, decimals: usize) -> String {
    localize(&format!("{value:.decimals$}"))
}

/// Signed percentage, e.g. `+1,34%` or `-0,77%`
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", format_number(value, decimals))
}

/// Compact rendering with `K`, `M` and `B` suffixes
pub fn format_large_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{}B", format_number(value / 1e9, 1))
    } else if value >= 1e6 {
        format!("{}M", format_number(value / 1e6, 1))
    } else if value >= 1e3 {
        format!("{}K", format_number(value / 1e3, 1))
    } else {
        format_number(value, 0)
    }
}

/// Sign of a price or value change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Positive,
    Negative,
    Neutral,
}

impl ChangeDirection {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Self::Positive
        } else if change < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Chart colours for `count` series, cycling through a fixed palette
pub fn color_palette(count: usize) -> Vec<&'static str> {
    PALETTE.iter().copied().cycle().take(count).collect()
}

/// Level of detail for [`format_date`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `15 gen`
    Short,
    /// `15 gen 2023`
    #[default]
    Medium,
    /// `15 gennaio 2023 alle 09:30`
    Long,
}

pub fn format_date(date: DateTime<Utc>, style: DateStyle) -> String {
    let month = date.month0() as usize;
    match style {
        DateStyle::Short => format!("{} {}", date.day(), MONTHS_SHORT[month]),
        DateStyle::Medium => format!("{} {} {}", date.day(), MONTHS_SHORT[month], date.year()),
        DateStyle::Long => format!(
            "{} {} {} alle {}",
            date.day(),
            MONTHS_LONG[month],
            date.year(),
            date.format("%H:%M")
        ),
    }
}

/// Short random identifier (9 lowercase alphanumeric characters)
pub fn generate_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(9);
    id
}
