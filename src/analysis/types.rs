use std::collections::BTreeMap;

use crate::classify::classify_type;
use crate::models::{TransactionRow, TxnType, TypeSummary};

/// Count and sums per transaction type. Only types that occur are present.
pub fn type_summary<'a>(
    rows: impl IntoIterator<Item = &'a TransactionRow>,
) -> BTreeMap<TxnType, TypeSummary> {
    let mut summary: BTreeMap<TxnType, TypeSummary> = BTreeMap::new();
    for row in rows {
        let entry = summary.entry(classify_type(&row.remarks)).or_default();
        entry.count += 1;
        entry.debit = entry.debit.saturating_add(row.debit_amount());
        entry.credit = entry.credit.saturating_add(row.credit_amount());
    }
    summary
}
