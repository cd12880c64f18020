//! Currency helpers (Indian Rupee)
//!
//! Amounts are `Decimal` end to end; these helpers only parse user input and
//! format for display.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a typed amount, tolerating surrounding spaces, `₹` and commas
///
/// # Examples
///
/// ```
/// use mtc_portal::utils::money::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" ₹1,500 "), Some(Decimal::from(1500)));
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}

/// Group digits the Indian way: last three, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Format an amount with Indian digit grouping, no currency sign
///
/// Whole amounts print without decimals; fractional ones with two places.
pub fn format_amount(amount: Decimal) -> String {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let abs = amount.abs().round_dp(2);
    let text = if abs.fract().is_zero() {
        abs.trunc().to_string()
    } else {
        format!("{:.2}", abs)
    };
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(&int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Format an amount as rupees, e.g. `₹1,23,456.50`
pub fn format_inr(amount: Decimal) -> String {
    format!("₹{}", format_amount(amount))
}
