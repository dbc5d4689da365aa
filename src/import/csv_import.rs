use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;

use super::detect::{detect_columns, ColumnMap};
use crate::models::TransactionRow;
use crate::parse::parse_money;

pub struct CsvImporter;

impl CsvImporter {
    /// Read every record as raw strings. The first record is the header.
    pub fn preview(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        Self::preview_reader(file)
    }

    fn preview_reader<R: Read>(reader: R) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        let mut all_rows: Vec<Vec<String>> = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            match result {
                Ok(record) => all_rows.push(record.iter().map(|s| s.to_string()).collect()),
                Err(e) => tracing::warn!(record = i + 1, error = %e, "skipping unreadable CSV record"),
            }
        }

        if all_rows.is_empty() {
            anyhow::bail!("CSV file is empty");
        }

        let headers = all_rows.remove(0);
        Ok((headers, all_rows))
    }

    /// Turn raw records into statement rows using `columns`.
    ///
    /// Blank records and repeated header lines (common in multi-page
    /// extractions) are dropped.
    pub fn parse(
        headers: &[String],
        rows: &[Vec<String>],
        columns: &ColumnMap,
    ) -> Vec<TransactionRow> {
        let mut out = Vec::with_capacity(rows.len());
        let mut prev_balance: Option<Decimal> = None;

        for row in rows {
            if row.iter().all(|c| c.trim().is_empty()) || row.as_slice() == headers {
                continue;
            }

            let cell = |idx: Option<usize>| -> String {
                idx.and_then(|i| row.get(i))
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default()
            };

            let txn_date = cell(columns.txn_date.or(columns.value_date));
            let value_date = cell(columns.value_date.or(columns.txn_date));
            let balance = cell(columns.balance);

            let (debit, credit) = match columns.amount {
                Some(_) if columns.debit.is_none() && columns.credit.is_none() => {
                    split_amount(&cell(columns.amount), &balance, prev_balance)
                }
                _ => (cell(columns.debit), cell(columns.credit)),
            };

            if columns.balance.is_some() {
                prev_balance = Some(parse_money(balance.as_str()));
            }

            out.push(TransactionRow {
                txn_date,
                value_date,
                reference: cell(columns.reference),
                remarks: cell(columns.remarks),
                debit,
                credit,
                balance,
                check: cell(columns.check),
                check2: cell(columns.check2),
            });
        }

        out
    }
}

/// Split a single amount column into (debit, credit).
///
/// With a running balance the direction follows the balance movement;
/// otherwise a negative amount is a debit.
fn split_amount(amount: &str, balance: &str, prev_balance: Option<Decimal>) -> (String, String) {
    let value = parse_money(amount);
    let magnitude = format!("{:.2}", value.abs());
    let is_debit = match (prev_balance, balance.is_empty()) {
        (Some(prev), false) => parse_money(balance) < prev,
        _ => value.is_sign_negative() && !value.is_zero(),
    };
    if is_debit {
        (magnitude, "0.00".to_string())
    } else {
        ("0.00".to_string(), magnitude)
    }
}

/// Load rows from a CSV file, detecting the column layout from the header line.
pub fn read_csv_rows(path: &Path) -> Result<Vec<TransactionRow>> {
    let (headers, rows) = CsvImporter::preview(path)?;
    let columns = detect_columns(&headers).with_context(|| {
        format!("Unrecognised statement header: {}", headers.join(", "))
    })?;
    Ok(CsvImporter::parse(&headers, &rows, &columns))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
