use std::cmp::Reverse;

use crate::models::{SortKey, TransactionRow};

/// Reorder rows in place. Stable: ties keep their input order.
///
/// Date sorts compare normalized transaction dates; a row without one sorts
/// before every dated row ascending and after every dated row descending.
pub fn sort_rows(rows: &mut [&TransactionRow], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::LargestCredit => rows.sort_by_cached_key(|r| Reverse(r.credit_amount())),
        SortKey::LargestDebit => rows.sort_by_cached_key(|r| Reverse(r.debit_amount())),
        SortKey::DateAsc => rows.sort_by_cached_key(|r| r.txn_day()),
        SortKey::DateDesc => rows.sort_by_cached_key(|r| Reverse(r.txn_day())),
    }
}
