use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use stmtlens::analysis::{compute_totals, needs_recheck, recheck_balances, top_counterparties};
use stmtlens::classify::classify_row;
use stmtlens::display::{format_amount, format_percent, truncate, DEFAULT_CURRENCY};
use stmtlens::models::{
    AnalysisFilters, Bucket, BucketMode, Channel, CounterpartyTotal, DateWindow, RangePreset,
    RollingCredit, SortKey, Totals, TransactionRow, TxnType, TypeSummary,
};
use stmtlens::parse::{normalize_date, parse_date};
use stmtlens::recompute;

const TOP_COUNTERPARTIES: usize = 5;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..]),
        "rows" | "r" => cli_rows(&args[2..]),
        "check" => cli_check(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("stmtlens {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("stmtlens — bank statement analysis");
    println!();
    println!("Usage: stmtlens <command> <file> [options]");
    println!();
    println!("Commands:");
    println!("  summary <file>                Totals, buckets, rolling credit and type summary");
    println!("  rows <file>                   Filtered and sorted rows with labels");
    println!("  check <file>                  Re-check running balances");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Files ending in .json are read as extractor output, anything else as CSV.");
    println!();
    println!("Options:");
    println!("  --range <preset>              last30 | last60 | last90 | last180 | all | custom");
    println!("  --from <date>, --to <date>    Custom window bounds (implies --range custom)");
    println!("  --search <text>               Keep rows containing every word");
    println!("  --sort <key>                  none | largestCredit | largestDebit | dateAsc | dateDesc");
    println!("  --bucket <mode>               none | monthly | biMonthly | quarterly");
    println!("  --currency <symbol>           Currency symbol for text output (default: ₦)");
    println!("  --json                        Print JSON instead of text");
    println!();
    println!("Environment variables:");
    println!("  RUST_LOG                      Log level (e.g. RUST_LOG=stmtlens=debug)");
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

fn has_switch(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

pub(crate) fn parse_filters(args: &[String]) -> Result<AnalysisFilters> {
    let mut filters = AnalysisFilters {
        range: flag(args, "--range").map(RangePreset::parse).unwrap_or_default(),
        search: flag(args, "--search").unwrap_or_default().to_string(),
        sort: flag(args, "--sort").map(SortKey::parse).unwrap_or_default(),
        bucket: flag(args, "--bucket").map(BucketMode::parse).unwrap_or_default(),
        ..AnalysisFilters::default()
    };

    for (name, slot) in [
        ("--from", &mut filters.custom_from),
        ("--to", &mut filters.custom_to),
    ] {
        if let Some(raw) = flag(args, name) {
            let day = parse_date(raw).with_context(|| format!("Invalid date for {name}: {raw}"))?;
            *slot = Some(day);
        }
    }
    if filters.custom_from.is_some() || filters.custom_to.is_some() {
        filters.range = RangePreset::Custom;
    }

    Ok(filters)
}

/// Load rows from the first positional argument, re-checking balances
/// when the extractor left the consistency flags empty.
fn load(args: &[String]) -> Result<Vec<TransactionRow>> {
    let file_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .ok_or_else(|| anyhow::anyhow!("Missing statement file. See `stmtlens --help`"))?;
    let path = Path::new(file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }

    let rows = stmtlens::load_rows(path)?;
    if needs_recheck(&rows) {
        tracing::info!(rows = rows.len(), "no balance checks present, recomputing");
        return Ok(recheck_balances(&rows));
    }
    Ok(rows)
}

// ── summary ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    window: Option<DateWindow>,
    totals: &'a Totals,
    reliable: bool,
    buckets: &'a [Bucket],
    rolling_credit: &'a RollingCredit,
    type_summary: &'a BTreeMap<TxnType, TypeSummary>,
    top_counterparties: Vec<CounterpartyTotal>,
}

fn cli_summary(args: &[String]) -> Result<()> {
    let raw = load(args)?;
    let filters = parse_filters(args)?;
    let currency = flag(args, "--currency").unwrap_or(DEFAULT_CURRENCY);
    let state = recompute(&raw, &filters);

    let report = SummaryReport {
        window: state.window,
        totals: &state.totals,
        reliable: state.totals.is_reliable(),
        buckets: &state.buckets,
        rolling_credit: &state.rolling_credit,
        type_summary: &state.type_summary,
        top_counterparties: top_counterparties(&state.rows, TOP_COUNTERPARTIES),
    };

    if has_switch(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let money = |v| format_amount(v, currency);
    let window = match report.window {
        Some(DateWindow { from, to }) => format!(
            "{} to {}",
            from.map_or_else(|| "start".to_string(), |d| d.to_string()),
            to.map_or_else(|| "end".to_string(), |d| d.to_string()),
        ),
        None => "all rows".to_string(),
    };

    println!("Statement summary — {window}");
    println!("{}", "─".repeat(44));
    println!("  Debit:       {}", money(report.totals.debit));
    println!("  Credit:      {}", money(report.totals.credit));
    println!("  Net:         {}", money(report.totals.net));
    println!("  Rows:        {}", report.totals.count);
    println!(
        "  Checks:      {} passed{}",
        format_percent(report.totals.pass_ratio),
        if report.reliable { "" } else { " (unreliable extraction)" }
    );

    if !report.buckets.is_empty() {
        println!();
        println!("{:<22} {:>16} {:>16} {:>16}", "Period", "Debit", "Credit", "Net");
        for b in report.buckets {
            println!(
                "{:<22} {:>16} {:>16} {:>16}",
                b.label,
                money(b.debit),
                money(b.credit),
                money(b.net)
            );
        }
    }

    let rc = report.rolling_credit;
    println!();
    println!("Rolling credit (per 30 days):");
    println!("  30d:  {:>16}  avg {}", money(rc.total30), money(rc.avg30));
    println!("  90d:  {:>16}  avg {}", money(rc.total90), money(rc.avg90));
    println!("  180d: {:>16}  avg {}", money(rc.total180), money(rc.avg180));
    println!("  Combined average: {}", money(rc.combined_avg));

    if !report.type_summary.is_empty() {
        println!();
        println!("By type:");
        for (kind, s) in report.type_summary {
            println!(
                "  {:<14} {:>5}  {:>16} {:>16}",
                kind.as_str(),
                s.count,
                money(s.debit),
                money(s.credit)
            );
        }
    }

    if !report.top_counterparties.is_empty() {
        println!();
        println!("Top counterparties:");
        for c in &report.top_counterparties {
            println!(
                "  {:<28} {:>5}  {:>16}",
                truncate(&c.name, 28),
                c.count,
                money(c.volume())
            );
        }
    }

    Ok(())
}

// ── rows ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RowView<'a> {
    txn_date: Option<String>,
    value_date: Option<String>,
    reference: &'a str,
    remarks: &'a str,
    debit: rust_decimal::Decimal,
    credit: rust_decimal::Decimal,
    balance: rust_decimal::Decimal,
    #[serde(rename = "type")]
    txn_type: TxnType,
    channel: Channel,
    counterparty: Option<String>,
}

impl<'a> RowView<'a> {
    fn new(row: &'a TransactionRow) -> Self {
        let labels = classify_row(row);
        Self {
            txn_date: normalize_date(&row.txn_date),
            value_date: normalize_date(&row.value_date),
            reference: &row.reference,
            remarks: &row.remarks,
            debit: row.debit_amount(),
            credit: row.credit_amount(),
            balance: row.balance_amount(),
            txn_type: labels.txn_type,
            channel: labels.channel,
            counterparty: labels.counterparty,
        }
    }
}

fn cli_rows(args: &[String]) -> Result<()> {
    let raw = load(args)?;
    let filters = parse_filters(args)?;
    let currency = flag(args, "--currency").unwrap_or(DEFAULT_CURRENCY);
    let state = recompute(&raw, &filters);
    let views: Vec<RowView<'_>> = state.rows.iter().map(RowView::new).collect();

    if has_switch(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("No rows");
        return Ok(());
    }

    println!(
        "{:<10} {:<12} {:<7} {:<32} {:>15} {:>15}",
        "Date", "Type", "Channel", "Remarks", "Debit", "Credit"
    );
    println!("{}", "─".repeat(96));
    for v in &views {
        println!(
            "{:<10} {:<12} {:<7} {:<32} {:>15} {:>15}",
            v.txn_date.as_deref().unwrap_or("?"),
            v.txn_type.as_str(),
            v.channel.as_str(),
            truncate(v.remarks, 32),
            format_amount(v.debit, currency),
            format_amount(v.credit, currency),
        );
    }
    println!();
    println!("{} of {} rows", views.len(), raw.len());
    Ok(())
}

// ── check ────────────────────────────────────────────────────

fn cli_check(args: &[String]) -> Result<()> {
    let raw = load(args)?;
    let checked = recheck_balances(&raw);
    let totals = compute_totals(&checked);

    let failures: Vec<(usize, &TransactionRow)> = checked
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.check_passed())
        .collect();

    println!(
        "{} rows, {} passed balance checks",
        totals.count,
        format_percent(totals.pass_ratio)
    );
    for (i, row) in &failures {
        println!(
            "  row {:<5} {:<12} off by {:<12} {}",
            i + 1,
            row.txn_date,
            row.check2,
            truncate(&row.remarks, 40)
        );
    }

    if !totals.is_reliable() {
        anyhow::bail!(
            "Pass ratio {} is below the reliable threshold",
            format_percent(totals.pass_ratio)
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
