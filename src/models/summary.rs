use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{TransactionRow, TxnType};

/// Inclusive date window. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from.map_or(true, |f| day >= f) && self.to.map_or(true, |t| day <= t)
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Aggregate of all rows sharing one period label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub label: String,
    pub debit: Decimal,
    pub credit: Decimal,
    pub net: Decimal,
    pub count: usize,
    pub debit_count: usize,
    pub credit_count: usize,
}

impl Bucket {
    pub fn new(label: String) -> Self {
        Self {
            label,
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
            net: Decimal::ZERO,
            count: 0,
            debit_count: 0,
            credit_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub debit: Decimal,
    pub credit: Decimal,
    pub net: Decimal,
    pub count: usize,
    /// Fraction of rows whose consistency check passed, in `0.0..=1.0`.
    pub pass_ratio: f64,
}

/// Trailing credit activity. Averages are normalised to a 30-day period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingCredit {
    pub total30: Decimal,
    pub total90: Decimal,
    pub total180: Decimal,
    pub avg30: Decimal,
    pub avg90: Decimal,
    pub avg180: Decimal,
    pub combined_avg: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSummary {
    pub count: usize,
    pub debit: Decimal,
    pub credit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartyTotal {
    pub name: String,
    pub count: usize,
    pub debit: Decimal,
    pub credit: Decimal,
}

impl CounterpartyTotal {
    pub fn volume(&self) -> Decimal {
        self.debit.saturating_add(self.credit)
    }
}

/// One complete recompute result. Replaced wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedState {
    pub rows: Vec<TransactionRow>,
    pub window: Option<DateWindow>,
    pub totals: Totals,
    pub buckets: Vec<Bucket>,
    pub rolling_credit: RollingCredit,
    pub type_summary: BTreeMap<TxnType, TypeSummary>,
}
