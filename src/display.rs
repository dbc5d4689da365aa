use rust_decimal::Decimal;

/// Default symbol for statement amounts.
pub const DEFAULT_CURRENCY: &str = "₦";

/// Two decimal places with comma-grouped thousands, e.g. `₦1,234,567.89`.
/// Amounts that round to zero are never shown with a minus sign.
pub fn format_amount(val: Decimal, symbol: &str) -> String {
    let rounded = val.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{grouped}.{cents}")
}

/// Format a ratio in `[0, 1]` as a whole percentage.
pub fn format_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "0%".to_string();
    }
    format!("{:.0}%", ratio * 100.0)
}

/// Cut `s` to at most `max` characters, the last one being "…" when
/// anything was dropped.
pub fn truncate(s: &str, max: usize) -> String {
    if s.char_indices().nth(max).is_none() {
        return s.to_string();
    }
    match max.checked_sub(1) {
        None => String::new(),
        Some(keep) => {
            let cut = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
            format!("{}…", &s[..cut])
        }
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
