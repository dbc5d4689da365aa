use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Bucket, BucketMode, TransactionRow};

/// Label for rows that cannot be placed in a period, and for `BucketMode::None`.
pub const ALL_LABEL: &str = "All";

/// Period label for a value date. Labels sort lexicographically in
/// chronological order.
pub fn bucket_label(day: Option<NaiveDate>, mode: BucketMode) -> String {
    let Some(day) = day else {
        return ALL_LABEL.to_string();
    };
    let (year, month) = (day.year(), day.month());
    match mode {
        BucketMode::None => ALL_LABEL.to_string(),
        BucketMode::Monthly => format!("{year:04}-{month:02}"),
        BucketMode::BiMonthly => {
            let start = if month % 2 == 1 { month } else { month - 1 };
            format!("{year:04}-{start:02}..{year:04}-{:02}", start + 1)
        }
        BucketMode::Quarterly => format!("{year:04} Q{}", month.div_ceil(3)),
    }
}

/// Group rows by value-date period. Output is sorted by label.
pub fn bucketize<'a>(
    rows: impl IntoIterator<Item = &'a TransactionRow>,
    mode: BucketMode,
) -> Vec<Bucket> {
    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();

    for row in rows {
        let label = bucket_label(row.value_day(), mode);
        let debit = row.debit_amount();
        let credit = row.credit_amount();

        let bucket = buckets
            .entry(label)
            .or_insert_with_key(|label| Bucket::new(label.clone()));
        bucket.debit = bucket.debit.saturating_add(debit);
        bucket.credit = bucket.credit.saturating_add(credit);
        bucket.count += 1;
        if !debit.is_zero() {
            bucket.debit_count += 1;
        }
        if !credit.is_zero() {
            bucket.credit_count += 1;
        }
    }

    buckets
        .into_values()
        .map(|mut b| {
            b.net = b.credit.saturating_sub(b.debit);
            b
        })
        .collect()
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
