use chrono::{Duration, NaiveDate};

use crate::models::{AnalysisFilters, DateWindow, RangePreset, TransactionRow};

/// Earliest and latest readable transaction dates in the set.
pub fn dataset_span<'a>(
    rows: impl IntoIterator<Item = &'a TransactionRow>,
) -> Option<(NaiveDate, NaiveDate)> {
    rows.into_iter()
        .filter_map(TransactionRow::txn_day)
        .fold(None, |span, day| match span {
            None => Some((day, day)),
            Some((lo, hi)) => Some((lo.min(day), hi.max(day))),
        })
}

/// Work out the active date window for `filters`.
///
/// Presets are anchored to the newest transaction in `raw`, not to today.
/// `None` means no date filtering at all, which is also the answer when not
/// a single row carries a readable date.
pub fn resolve_window(raw: &[TransactionRow], filters: &AnalysisFilters) -> Option<DateWindow> {
    let (min, max) = dataset_span(raw)?;

    let window = match filters.range {
        RangePreset::All => DateWindow::new(Some(min), Some(max)),
        RangePreset::Custom => DateWindow::new(filters.custom_from, filters.custom_to),
        preset => {
            let days = preset.days().unwrap_or(1);
            let from = max
                .checked_sub_signed(Duration::days(days - 1))
                .unwrap_or(NaiveDate::MIN);
            DateWindow::new(Some(from), Some(max))
        }
    };

    if window.is_open() {
        None
    } else {
        Some(window)
    }
}

/// Keep rows whose transaction date is inside `window`.
///
/// Without a window every row passes. With one, rows with an unreadable date
/// are dropped.
pub fn filter_by_window<'a>(
    rows: impl IntoIterator<Item = &'a TransactionRow>,
    window: Option<DateWindow>,
) -> Vec<&'a TransactionRow> {
    match window {
        None => rows.into_iter().collect(),
        Some(w) => rows
            .into_iter()
            .filter(|r| r.txn_day().is_some_and(|d| w.contains(d)))
            .collect(),
    }
}

/// Keyword search over remarks and reference.
///
/// The query is split on whitespace and every token must appear
/// (case-insensitive). A blank query keeps everything.
pub fn search_rows<'a>(
    rows: impl IntoIterator<Item = &'a TransactionRow>,
    query: &str,
) -> Vec<&'a TransactionRow> {
    let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if tokens.is_empty() {
        return rows.into_iter().collect();
    }

    rows.into_iter()
        .filter(|r| {
            let haystack = r.haystack();
            tokens.iter().all(|t| haystack.contains(t.as_str()))
        })
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
