use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// Month name prefixes. Banks abbreviate inconsistently, so only the first
/// three letters are compared, plus the odd four-letter "sept".
const MONTHS: &[(&str, u32)] = &[
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("sept", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Layouts tried once none of the known statement shapes matched.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%d-%b-%y",
    "%d %b %y",
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%Y",
    "%d.%m.%y",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%a %b %d %Y",
    "%A, %B %d, %Y",
    // Unpadded ISO. Last, so two-digit-year day-first dashes win.
    "%Y-%m-%d",
];

const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%b-%Y %H:%M:%S",
];

#[allow(clippy::expect_used)]
fn iso_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("iso date regex"))
}

#[allow(clippy::expect_used)]
fn day_first_numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4})$").expect("numeric date regex")
    })
}

#[allow(clippy::expect_used)]
fn day_month_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})[\s/.,-]+([A-Za-z]{3,})\.?[\s/.,-]+(\d{4})$")
            .expect("day-month-name regex")
    })
}

#[allow(clippy::expect_used)]
fn year_month_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{4})[\s/.,-]+([A-Za-z]{3,})\.?[\s/.,-]+(\d{1,2})$")
            .expect("year-month-name regex")
    })
}

/// Normalize a statement date to `YYYY-MM-DD`, or `None` when it cannot be read.
pub fn normalize_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Parse a statement date. Numeric dates are read day first.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let parsed = parse_iso(s)
        .or_else(|| parse_day_first_numeric(s))
        .or_else(|| parse_day_month_name(s))
        .or_else(|| parse_year_month_name(s))
        .or_else(|| parse_fallback(s))?;

    // Keep the output expressible as a plain four-digit-year ISO string.
    (1..=9999).contains(&parsed.year()).then_some(parsed)
}

/// Resolve a month name like "Jan", "january" or "Sept".
pub fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.trim().trim_end_matches('.').to_lowercase();
    if let Some(&(_, m)) = MONTHS.iter().find(|(prefix, _)| *prefix == lower) {
        return Some(m);
    }
    let prefix: String = lower.chars().take(3).collect();
    if prefix.chars().count() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|&(_, m)| m)
}

fn parse_iso(s: &str) -> Option<NaiveDate> {
    if !iso_re().is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_day_first_numeric(s: &str) -> Option<NaiveDate> {
    let caps = day_first_numeric_re().captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_day_month_name(s: &str) -> Option<NaiveDate> {
    let caps = day_month_name_re().captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_from_name(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year_month_name(s: &str) -> Option<NaiveDate> {
    let caps = year_month_name_re().captures(s)?;
    let year: i32 = caps[1].parse().ok()?;
    let month = month_from_name(&caps[2])?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_fallback(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    for fmt in FALLBACK_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
