use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::parse::{parse_date, parse_money};

/// One statement line as handed over by the extraction step.
///
/// Every field is kept verbatim; nothing here is trusted until it goes
/// through the money and date parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionRow {
    #[serde(rename = "TXN_DATE", deserialize_with = "cell_text")]
    pub txn_date: String,
    #[serde(rename = "VAL_DATE", deserialize_with = "cell_text")]
    pub value_date: String,
    #[serde(rename = "REFERENCE", deserialize_with = "cell_text")]
    pub reference: String,
    #[serde(rename = "REMARKS", deserialize_with = "cell_text")]
    pub remarks: String,
    #[serde(rename = "DEBIT", deserialize_with = "cell_text")]
    pub debit: String,
    #[serde(rename = "CREDIT", deserialize_with = "cell_text")]
    pub credit: String,
    #[serde(rename = "BALANCE", deserialize_with = "cell_text")]
    pub balance: String,
    #[serde(rename = "Check", deserialize_with = "cell_text")]
    pub check: String,
    #[serde(rename = "Check 2", deserialize_with = "cell_text")]
    pub check2: String,
}

/// A cell as the extractor may write it. Money often arrives as a bare
/// number and empty cells as `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
}

fn cell_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Cell>::deserialize(deserializer)? {
        None => String::new(),
        Some(Cell::Text(s)) => s,
        Some(Cell::Int(n)) => n.to_string(),
        Some(Cell::Float(f)) => f.to_string(),
        Some(Cell::Flag(b)) => b.to_string(),
    })
}

impl TransactionRow {
    pub fn debit_amount(&self) -> Decimal {
        parse_money(self.debit.as_str())
    }

    pub fn credit_amount(&self) -> Decimal {
        parse_money(self.credit.as_str())
    }

    pub fn balance_amount(&self) -> Decimal {
        parse_money(self.balance.as_str())
    }

    /// Transaction date, used for range filtering, sorting and the rolling anchor.
    pub fn txn_day(&self) -> Option<NaiveDate> {
        parse_date(&self.txn_date)
    }

    /// Value (settlement) date, used for bucketing and rolling windows.
    pub fn value_day(&self) -> Option<NaiveDate> {
        parse_date(&self.value_date)
    }

    pub fn check_passed(&self) -> bool {
        self.check.eq_ignore_ascii_case("true")
    }

    /// Remarks and reference joined, lowercased. What keyword search runs against.
    pub fn haystack(&self) -> String {
        format!("{} {}", self.remarks, self.reference).to_lowercase()
    }
}
