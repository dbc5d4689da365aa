//! The derived view over a statement: filter, sort, summarise.
//!
//! Every function here is pure and total. [`recompute`] is the single entry
//! point a caller needs; the stages are public so they can be used alone.

mod bucket;
mod counterparties;
mod filter;
mod health;
mod rolling;
mod sort;
mod totals;
mod types;

pub use bucket::{bucket_label, bucketize, ALL_LABEL};
pub use counterparties::top_counterparties;
pub use filter::{dataset_span, filter_by_window, resolve_window, search_rows};
pub use health::{needs_recheck, recheck_balances};
pub use rolling::{rolling_credit, ROLLING_WINDOWS};
pub use sort::sort_rows;
pub use totals::{compute_totals, RELIABLE_PASS_RATIO};
pub use types::type_summary;

use crate::models::{AnalysisFilters, DerivedState, TransactionRow};

/// Build a fresh snapshot of everything derived from `raw` under `filters`.
///
/// Rows go through the date window, then keyword search, then sorting; totals,
/// buckets and the type summary describe that filtered set. Rolling credit is
/// always computed over all of `raw`.
pub fn recompute(raw: &[TransactionRow], filters: &AnalysisFilters) -> DerivedState {
    let window = resolve_window(raw, filters);
    let in_range = filter_by_window(raw, window);
    let in_range_count = in_range.len();
    let mut rows = search_rows(in_range, &filters.search);
    sort_rows(&mut rows, filters.sort);

    tracing::debug!(
        raw = raw.len(),
        in_range = in_range_count,
        matched = rows.len(),
        range = %filters.range,
        sort = %filters.sort,
        bucket = %filters.bucket,
        "recomputed statement view"
    );

    let totals = compute_totals(rows.iter().copied());
    let buckets = bucketize(rows.iter().copied(), filters.bucket);
    let type_summary = type_summary(rows.iter().copied());
    let rolling_credit = rolling_credit(raw);

    DerivedState {
        rows: rows.into_iter().cloned().collect(),
        window,
        totals,
        buckets,
        rolling_credit,
        type_summary,
    }
}

#[cfg(test)]
mod tests;
