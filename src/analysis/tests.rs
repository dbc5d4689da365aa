#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{BucketMode, RangePreset, SortKey, TxnType};

fn txn(date: &str, remarks: &str, debit: &str, credit: &str) -> TransactionRow {
    TransactionRow {
        txn_date: date.into(),
        value_date: date.into(),
        reference: String::new(),
        remarks: remarks.into(),
        debit: debit.into(),
        credit: credit.into(),
        balance: String::new(),
        check: "TRUE".into(),
        check2: "0.00".into(),
    }
}

fn sample() -> Vec<TransactionRow> {
    vec![
        txn("01-Jan-2025", "Opening deposit received from ACME", "", "5,000.00"),
        txn("15-Jan-2025", "POS purchase SHOPRITE", "1,200.00", ""),
        txn("02-Feb-2025", "MTN airtime", "500.00", ""),
        txn("10-Mar-2025", "Transfer to JANE DOE - rent", "2,000.00", ""),
        txn("11-Mar-2025", "Electronic Money Transfer Levy", "50.00", ""),
        txn("not a date", "Salary received from ACME", "", "3,000.00"),
    ]
}

fn remarks(rows: &[&TransactionRow]) -> Vec<String> {
    rows.iter().map(|r| r.remarks.clone()).collect()
}

// ── sort_rows ─────────────────────────────────────────────────

#[test]
fn test_sort_none_keeps_input_order() {
    let raw = sample();
    let mut rows: Vec<&TransactionRow> = raw.iter().collect();
    sort_rows(&mut rows, SortKey::None);
    assert_eq!(remarks(&rows), remarks(&raw.iter().collect::<Vec<_>>()));
}

#[test]
fn test_sort_largest_credit_desc() {
    let raw = sample();
    let mut rows: Vec<&TransactionRow> = raw.iter().collect();
    sort_rows(&mut rows, SortKey::LargestCredit);
    assert_eq!(rows[0].credit_amount(), dec!(5000));
    assert_eq!(rows[1].credit_amount(), dec!(3000));
    // Zero-credit rows keep their relative order.
    assert_eq!(rows[2].remarks, "POS purchase SHOPRITE");
    assert_eq!(rows[3].remarks, "MTN airtime");
}

#[test]
fn test_sort_largest_debit_desc() {
    let raw = sample();
    let mut rows: Vec<&TransactionRow> = raw.iter().collect();
    sort_rows(&mut rows, SortKey::LargestDebit);
    let debits: Vec<Decimal> = rows.iter().take(4).map(|r| r.debit_amount()).collect();
    assert_eq!(debits, vec![dec!(2000), dec!(1200), dec!(500), dec!(50)]);
}

#[test]
fn test_sort_date_asc_puts_undated_first() {
    let raw = sample();
    let mut rows: Vec<&TransactionRow> = raw.iter().collect();
    sort_rows(&mut rows, SortKey::DateAsc);
    assert_eq!(rows[0].txn_date, "not a date");
    assert_eq!(rows[1].txn_date, "01-Jan-2025");
    assert_eq!(rows[5].txn_date, "11-Mar-2025");
}

#[test]
fn test_sort_date_desc_puts_undated_last() {
    let raw = sample();
    let mut rows: Vec<&TransactionRow> = raw.iter().collect();
    sort_rows(&mut rows, SortKey::DateDesc);
    assert_eq!(rows[0].txn_date, "11-Mar-2025");
    assert_eq!(rows[4].txn_date, "01-Jan-2025");
    assert_eq!(rows[5].txn_date, "not a date");
}

#[test]
fn test_sort_date_compares_normalized_dates() {
    // Day-first numeric vs month name: lexically "02/..." < "15 ...", chronologically not.
    let raw = vec![
        txn("15 Jan 2025", "a", "", ""),
        txn("02/02/2025", "b", "", ""),
    ];
    let mut rows: Vec<&TransactionRow> = raw.iter().collect();
    sort_rows(&mut rows, SortKey::DateAsc);
    assert_eq!(remarks(&rows), vec!["a", "b"]);
}

#[test]
fn test_sort_is_stable_for_equal_dates() {
    let raw = vec![
        txn("2025-01-01", "first", "", ""),
        txn("2025-01-01", "second", "", ""),
        txn("2025-01-01", "third", "", ""),
    ];
    for key in [SortKey::DateAsc, SortKey::DateDesc] {
        let mut rows: Vec<&TransactionRow> = raw.iter().collect();
        sort_rows(&mut rows, key);
        assert_eq!(remarks(&rows), vec!["first", "second", "third"]);
    }
}

// ── compute_totals ────────────────────────────────────────────

#[test]
fn test_totals_sums_and_net() {
    let raw = sample();
    let t = compute_totals(&raw);
    assert_eq!(t.debit, dec!(3750));
    assert_eq!(t.credit, dec!(8000));
    assert_eq!(t.net, dec!(4250));
    assert_eq!(t.net, t.credit - t.debit);
    assert_eq!(t.count, 6);
    assert!((t.pass_ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_totals_empty() {
    let t = compute_totals(&Vec::<TransactionRow>::new());
    assert_eq!(t.debit, Decimal::ZERO);
    assert_eq!(t.credit, Decimal::ZERO);
    assert_eq!(t.net, Decimal::ZERO);
    assert_eq!(t.count, 0);
    assert_eq!(t.pass_ratio, 0.0);
    assert!(!t.is_reliable());
}

#[test]
fn test_totals_pass_ratio() {
    let mut raw = sample();
    raw[0].check = "false".into();
    raw[1].check = "".into();
    raw[2].check = "True".into();
    let t = compute_totals(&raw);
    assert!((t.pass_ratio - 4.0 / 6.0).abs() < 1e-12);
    assert!(t.pass_ratio >= 0.0 && t.pass_ratio <= 1.0);
    assert!(!t.is_reliable());
}

#[test]
fn test_totals_reliability_threshold() {
    let mut raw: Vec<TransactionRow> = (0..10).map(|_| txn("2025-01-01", "x", "1", "")).collect();
    for r in raw.iter_mut().take(3) {
        r.check = "FALSE".into();
    }
    let t = compute_totals(&raw);
    assert!((t.pass_ratio - RELIABLE_PASS_RATIO).abs() < 1e-12);
    assert!(t.is_reliable());

    raw[3].check = "FALSE".into();
    assert!(!compute_totals(&raw).is_reliable());
}

// ── type_summary ──────────────────────────────────────────────

#[test]
fn test_type_summary_counts_and_sums() {
    let raw = sample();
    let s = type_summary(&raw);
    assert_eq!(s[&TxnType::TransferIn].count, 2);
    assert_eq!(s[&TxnType::TransferIn].credit, dec!(8000));
    assert_eq!(s[&TxnType::Pos].debit, dec!(1200));
    assert_eq!(s[&TxnType::Airtime].count, 1);
    assert_eq!(s[&TxnType::TransferOut].debit, dec!(2000));
    assert_eq!(s[&TxnType::Levy].debit, dec!(50));
    assert!(!s.contains_key(&TxnType::Data));
    assert_eq!(s.values().map(|v| v.count).sum::<usize>(), raw.len());
}

// ── top_counterparties ────────────────────────────────────────

#[test]
fn test_top_counterparties_groups_case_insensitively() {
    let raw = vec![
        txn("2025-01-01", "Transfer from ACME LTD - inv 1", "", "100"),
        txn("2025-01-02", "transfer from acme ltd | inv 2", "", "50"),
        txn("2025-01-03", "Transfer to JANE - rent", "400", ""),
        txn("2025-01-04", "POS purchase", "10", ""),
    ];
    let top = top_counterparties(&raw, 10);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "JANE");
    assert_eq!(top[0].debit, dec!(400));
    assert_eq!(top[1].name, "ACME LTD");
    assert_eq!(top[1].count, 2);
    assert_eq!(top[1].credit, dec!(150));
}

#[test]
fn test_top_counterparties_limit() {
    let raw = vec![
        txn("2025-01-01", "send to A", "1", ""),
        txn("2025-01-01", "send to B", "2", ""),
        txn("2025-01-01", "send to C", "3", ""),
    ];
    let names: Vec<String> = top_counterparties(&raw, 2).into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["C", "B"]);
}

// ── recheck_balances ──────────────────────────────────────────

fn bal(debit: &str, credit: &str, balance: &str) -> TransactionRow {
    TransactionRow {
        debit: debit.into(),
        credit: credit.into(),
        balance: balance.into(),
        ..TransactionRow::default()
    }
}

#[test]
fn test_recheck_consistent_statement() {
    let rows = vec![
        bal("", "", "1,000.00"),
        bal("200.00", "", "800.00"),
        bal("", "50.50", "850.50"),
    ];
    assert!(needs_recheck(&rows));
    let checked = recheck_balances(&rows);
    assert!(checked.iter().all(|r| r.check == "TRUE" && r.check2 == "0.00"));
    assert!(!needs_recheck(&checked));
}

#[test]
fn test_recheck_flags_discrepancy() {
    let rows = vec![
        bal("", "", "1,000.00"),
        bal("200.00", "", "750.00"),
        bal("", "", "750.00"),
    ];
    let checked = recheck_balances(&rows);
    assert_eq!(checked[1].check, "FALSE");
    assert_eq!(checked[1].check2, "50.00");
    // Next row is compared against the stated balance, not the expected one.
    assert_eq!(checked[2].check, "TRUE");
}

#[test]
fn test_recheck_within_tolerance() {
    let rows = vec![bal("", "", "100.00"), bal("10.00", "", "90.01")];
    assert_eq!(recheck_balances(&rows)[1].check, "TRUE");
}

#[test]
fn test_needs_recheck_empty_or_flagged() {
    assert!(!needs_recheck(&[]));
    let mut rows = vec![bal("", "", "1")];
    rows[0].check = "FALSE".into();
    assert!(!needs_recheck(&rows));
}

// ── recompute ─────────────────────────────────────────────────

#[test]
fn test_recompute_empty_dataset() {
    let state = recompute(&[], &AnalysisFilters::default());
    assert!(state.rows.is_empty());
    assert!(state.window.is_none());
    assert_eq!(state.totals.count, 0);
    assert_eq!(state.totals.net, Decimal::ZERO);
    assert_eq!(state.totals.pass_ratio, 0.0);
    assert!(state.buckets.is_empty());
    assert_eq!(state.rolling_credit.combined_avg, Decimal::ZERO);
    assert!(state.type_summary.is_empty());
}

#[test]
fn test_recompute_default_filters() {
    let raw = sample();
    let state = recompute(&raw, &AnalysisFilters::default());
    // "all" drops the undated row.
    assert_eq!(state.rows.len(), 5);
    assert_eq!(state.totals.credit, dec!(5000));
    assert_eq!(state.buckets.len(), 1);
    assert_eq!(state.buckets[0].label, "All");
}

#[test]
fn test_recompute_pipeline_order() {
    let raw = sample();
    let filters = AnalysisFilters {
        range: RangePreset::Last60,
        search: "transfer".into(),
        sort: SortKey::LargestDebit,
        bucket: BucketMode::Monthly,
        ..AnalysisFilters::default()
    };
    let state = recompute(&raw, &filters);
    let got: Vec<&str> = state.rows.iter().map(|r| r.remarks.as_str()).collect();
    assert_eq!(got, vec!["Transfer to JANE DOE - rent", "Electronic Money Transfer Levy"]);
    assert_eq!(state.totals.debit, dec!(2050));
    assert_eq!(state.buckets.len(), 1);
    assert_eq!(state.buckets[0].label, "2025-03");
    assert_eq!(state.type_summary.len(), 2);
}

#[test]
fn test_recompute_rolling_ignores_filters() {
    let raw = sample();
    let narrow = AnalysisFilters {
        search: "nothing matches this".into(),
        ..AnalysisFilters::default()
    };
    let state = recompute(&raw, &narrow);
    assert!(state.rows.is_empty());
    assert_eq!(state.totals.count, 0);
    assert_eq!(state.rolling_credit, rolling_credit(&raw));
    assert_eq!(state.rolling_credit.total90, dec!(5000));
}

#[test]
fn test_recompute_filtered_never_exceeds_raw() {
    let raw = sample();
    for range in RangePreset::all() {
        for sort in SortKey::all() {
            let f = AnalysisFilters {
                range: *range,
                sort: *sort,
                ..AnalysisFilters::default()
            };
            let state = recompute(&raw, &f);
            assert!(state.rows.len() <= raw.len());
            assert_eq!(state.totals.net, state.totals.credit - state.totals.debit);
        }
    }
}

#[test]
fn test_recompute_no_dates_disables_range_filter() {
    let raw = vec![
        txn("??", "a", "1", ""),
        txn("", "b", "2", ""),
    ];
    let f = AnalysisFilters {
        range: RangePreset::Last30,
        ..AnalysisFilters::default()
    };
    let state = recompute(&raw, &f);
    assert_eq!(state.rows.len(), 2);
    assert!(state.window.is_none());
}

#[test]
fn test_recompute_is_deterministic() {
    let raw = sample();
    let f = AnalysisFilters {
        sort: SortKey::DateDesc,
        bucket: BucketMode::Quarterly,
        ..AnalysisFilters::default()
    };
    assert_eq!(recompute(&raw, &f), recompute(&raw, &f));
}

#[test]
fn test_derived_state_serializes() {
    let raw = sample();
    let state = recompute(&raw, &AnalysisFilters::default());
    let json = serde_json::to_value(&state).unwrap();
    assert!(json["totals"]["passRatio"].is_number());
    assert!(json["rollingCredit"]["combinedAvg"].is_number());
    assert!(json["typeSummary"]["TRANSFER_IN"].is_object());
}
