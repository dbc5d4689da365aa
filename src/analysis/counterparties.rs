use std::collections::HashMap;

use crate::classify::extract_counterparty;
use crate::models::{CounterpartyTotal, TransactionRow};

/// Busiest counterparties by debit plus credit volume.
///
/// Names are grouped case-insensitively; the first spelling seen is kept.
/// Rows without a recognisable counterparty are skipped.
pub fn top_counterparties<'a>(
    rows: impl IntoIterator<Item = &'a TransactionRow>,
    limit: usize,
) -> Vec<CounterpartyTotal> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<CounterpartyTotal> = Vec::new();

    for row in rows {
        let Some(name) = extract_counterparty(&row.remarks) else {
            continue;
        };
        let slot = *index.entry(name.to_lowercase()).or_insert_with(|| {
            totals.push(CounterpartyTotal {
                name: name.clone(),
                count: 0,
                debit: Default::default(),
                credit: Default::default(),
            });
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.count += 1;
        entry.debit = entry.debit.saturating_add(row.debit_amount());
        entry.credit = entry.credit.saturating_add(row.credit_amount());
    }

    totals.sort_by(|a, b| b.volume().cmp(&a.volume()).then_with(|| a.name.cmp(&b.name)));
    totals.truncate(limit);
    totals
}
