use crate::models::{Totals, TransactionRow};
use crate::parse::sum_money;

/// Pass ratio at or above which a parsed statement is trusted.
pub const RELIABLE_PASS_RATIO: f64 = 0.70;

/// Sums, row count and consistency pass ratio over `rows`.
pub fn compute_totals<'a>(rows: impl IntoIterator<Item = &'a TransactionRow>) -> Totals {
    let rows: Vec<&TransactionRow> = rows.into_iter().collect();
    let count = rows.len();

    let debit = sum_money(rows.iter().map(|r| r.debit_amount()));
    let credit = sum_money(rows.iter().map(|r| r.credit_amount()));
    let passed = rows.iter().filter(|r| r.check_passed()).count();

    let pass_ratio = if count == 0 {
        0.0
    } else {
        passed as f64 / count as f64
    };

    Totals {
        debit,
        credit,
        net: credit.saturating_sub(debit),
        count,
        pass_ratio,
    }
}

impl Totals {
    /// Whether enough rows passed their balance check for the parse to be trusted.
    pub fn is_reliable(&self) -> bool {
        self.count > 0 && self.pass_ratio >= RELIABLE_PASS_RATIO
    }
}
