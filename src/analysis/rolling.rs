use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::filter::dataset_span;
use crate::models::{DateWindow, RollingCredit, TransactionRow};
use crate::parse::sum_money;

/// Trailing windows, in days. Each is a multiple of 30.
pub const ROLLING_WINDOWS: [i64; 3] = [30, 90, 180];

/// Trailing credit totals and 30-day averages for the whole raw set.
///
/// Ignores any active filter. The anchor is the newest transaction date; rows
/// are matched on their value date. No readable date anywhere gives zeros.
pub fn rolling_credit(raw: &[TransactionRow]) -> RollingCredit {
    let Some((_, anchor)) = dataset_span(raw) else {
        return RollingCredit::default();
    };

    let totals = ROLLING_WINDOWS.map(|w| window_credit(raw, anchor, w));
    let averages: [Option<Decimal>; 3] =
        std::array::from_fn(|i| thirty_day_average(totals[i], ROLLING_WINDOWS[i]));

    RollingCredit {
        total30: totals[0],
        total90: totals[1],
        total180: totals[2],
        avg30: averages[0].unwrap_or(Decimal::ZERO),
        avg90: averages[1].unwrap_or(Decimal::ZERO),
        avg180: averages[2].unwrap_or(Decimal::ZERO),
        combined_avg: mean_of_present(&averages),
    }
}

fn window_credit(raw: &[TransactionRow], anchor: NaiveDate, days: i64) -> Decimal {
    let from = anchor
        .checked_sub_signed(Duration::days(days - 1))
        .unwrap_or(NaiveDate::MIN);
    let window = DateWindow::new(Some(from), Some(anchor));

    sum_money(
        raw.iter()
            .filter(|r| r.value_day().is_some_and(|d| window.contains(d)))
            .map(TransactionRow::credit_amount),
    )
}

/// `total / (days / 30)`; `None` if the division cannot be represented.
fn thirty_day_average(total: Decimal, days: i64) -> Option<Decimal> {
    total.checked_div(Decimal::from(days / 30))
}

/// Mean over the averages that could be computed. Missing ones shrink the
/// denominator instead of counting as zero.
fn mean_of_present(values: &[Option<Decimal>]) -> Decimal {
    let present: Vec<Decimal> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return Decimal::ZERO;
    }
    sum_money(present.iter().copied())
        .checked_div(Decimal::from(present.len()))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
#[path = "rolling_tests.rs"]
mod tests;
