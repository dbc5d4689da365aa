//! Loading statement rows produced by the extraction step.

mod csv_import;
mod detect;

pub use csv_import::{read_csv_rows, CsvImporter};
pub use detect::{detect_columns, ColumnMap};

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::TransactionRow;

/// Load rows from a `.json` array of extractor records or a CSV export.
pub fn load_rows(path: &Path) -> Result<Vec<TransactionRow>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let rows = if is_json {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_json_rows(&text).with_context(|| format!("Invalid statement JSON: {}", path.display()))?
    } else {
        read_csv_rows(path).with_context(|| format!("Failed to load {}", path.display()))?
    };

    tracing::info!(rows = rows.len(), path = %path.display(), "loaded statement rows");
    Ok(rows)
}

/// Parse the extractor's JSON output: an array of row objects, optionally
/// wrapped as `{"transactions": [...]}`.
pub fn parse_json_rows(text: &str) -> Result<Vec<TransactionRow>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Payload {
        Rows(Vec<TransactionRow>),
        Wrapped { transactions: Vec<TransactionRow> },
    }

    let payload: Payload = serde_json::from_str(text).context("Expected an array of rows")?;
    Ok(match payload {
        Payload::Rows(rows) | Payload::Wrapped { transactions: rows } => rows,
    })
}
