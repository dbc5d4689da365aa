use rust_decimal::Decimal;

use crate::models::TransactionRow;

/// Largest gap between expected and stated balance that still passes.
const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// True when no row carries a consistency flag, i.e. the extractor skipped
/// the balance check and it should be run here.
pub fn needs_recheck(rows: &[TransactionRow]) -> bool {
    !rows.is_empty() && rows.iter().all(|r| r.check.trim().is_empty())
}

/// Recompute `check` / `check2` from the running balance.
///
/// Each row is expected to equal the previous balance minus its debit plus
/// its credit. `check2` carries the absolute discrepancy. The first row has
/// nothing to compare against and always passes.
pub fn recheck_balances(rows: &[TransactionRow]) -> Vec<TransactionRow> {
    let mut out = Vec::with_capacity(rows.len());
    let mut prev_balance: Option<Decimal> = None;

    for row in rows {
        let mut row = row.clone();
        let balance = row.balance_amount();

        let gap = match prev_balance {
            None => Decimal::ZERO,
            Some(prev) => {
                let expected = prev
                    .saturating_sub(row.debit_amount())
                    .saturating_add(row.credit_amount())
                    .round_dp(2);
                expected.saturating_sub(balance.round_dp(2)).abs()
            }
        };

        if gap <= BALANCE_TOLERANCE {
            row.check = "TRUE".into();
            row.check2 = "0.00".into();
        } else {
            row.check = "FALSE".into();
            row.check2 = format!("{:.2}", gap);
        }

        prev_balance = Some(balance);
        out.push(row);
    }

    out
}
