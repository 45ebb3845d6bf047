//! GBP display and input parsing.

/// Placeholder for a figure that was not provided.
pub const UNSET: &str = "—";

/// Compact GBP: `£2.4M`, `£350K`, `£950`.
#[must_use]
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return UNSET.to_string();
    };
    if value >= 1_000_000.0 {
        format!("£{:.1}M", (value / 100_000.0).round() / 10.0)
    } else if value >= 1_000.0 {
        format!("£{:.0}K", (value / 1_000.0).round())
    } else {
        let sign = if value.round() < 0.0 { "-" } else { "" };
        format!("{sign}£{}", group_thousands(&format!("{:.0}", value.abs().round())))
    }
}

/// Thousands-separated number with up to three decimals, e.g. `1,250,000`.
/// Empty for an unset value.
#[must_use]
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let text = format!("{rounded:.3}");
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    let mut out = format!("{sign}{}", group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Parse user input such as `£1,250,000` or ` 400 000 `.
///
/// `£`, commas and whitespace are ignored. Empty or unparsable input is
/// "not provided".
#[must_use]
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|ch| *ch != '£' && *ch != ',' && !ch.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
