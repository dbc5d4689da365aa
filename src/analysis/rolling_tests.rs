#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn credit(txn_date: &str, value_date: &str, amount: &str) -> TransactionRow {
    TransactionRow {
        txn_date: txn_date.into(),
        value_date: value_date.into(),
        credit: amount.into(),
        ..TransactionRow::default()
    }
}

#[test]
fn test_single_credit_inside_all_windows() {
    let rows = vec![
        credit("2025-06-30", "2025-06-30", ""),
        credit("2025-06-15", "2025-06-15", "300"),
    ];
    let r = rolling_credit(&rows);
    assert_eq!(r.total30, dec!(300));
    assert_eq!(r.total90, dec!(300));
    assert_eq!(r.total180, dec!(300));
    assert_eq!(r.avg30, dec!(300));
    assert_eq!(r.avg90, dec!(100));
    assert_eq!(r.avg180, dec!(50));
    assert_eq!(r.combined_avg, dec!(150));
}

#[test]
fn test_window_edges_are_inclusive() {
    // 2025-06-30 minus 29 days is 2025-06-01.
    let rows = vec![
        credit("2025-06-30", "2025-06-01", "10"),
        credit("2025-06-30", "2025-05-31", "20"),
    ];
    let r = rolling_credit(&rows);
    assert_eq!(r.total30, dec!(10));
    assert_eq!(r.total90, dec!(30));
}

#[test]
fn test_windows_nest() {
    let rows = vec![
        credit("2025-06-30", "2025-06-20", "30"),
        credit("2025-06-30", "2025-04-15", "60"),
        credit("2025-06-30", "2025-02-01", "120"),
        credit("2025-06-30", "2024-06-01", "999"),
    ];
    let r = rolling_credit(&rows);
    assert_eq!(r.total30, dec!(30));
    assert_eq!(r.total90, dec!(90));
    assert_eq!(r.total180, dec!(210));
    assert_eq!(r.avg30, dec!(30));
    assert_eq!(r.avg90, dec!(30));
    assert_eq!(r.avg180, dec!(35));
    assert!(r.total30 <= r.total90 && r.total90 <= r.total180);
}

#[test]
fn test_anchor_is_txn_date_not_value_date() {
    // Latest transaction date is 2025-06-30 even though a value date runs later.
    let rows = vec![
        credit("2025-06-30", "2025-07-02", "50"),
        credit("2025-06-29", "2025-06-29", "25"),
    ];
    let r = rolling_credit(&rows);
    assert_eq!(r.total30, dec!(25));
}

#[test]
fn test_rows_with_unreadable_value_date_are_skipped() {
    let rows = vec![
        credit("2025-06-30", "??", "500"),
        credit("2025-06-30", "2025-06-30", "5"),
    ];
    assert_eq!(rolling_credit(&rows).total30, dec!(5));
}

#[test]
fn test_debits_do_not_count() {
    let rows = vec![TransactionRow {
        txn_date: "2025-06-30".into(),
        value_date: "2025-06-30".into(),
        debit: "1000".into(),
        ..TransactionRow::default()
    }];
    assert_eq!(rolling_credit(&rows), RollingCredit::default());
}

#[test]
fn test_empty_and_undated_sets_are_zero() {
    assert_eq!(rolling_credit(&[]), RollingCredit::default());
    let rows = vec![credit("junk", "2025-06-30", "100")];
    assert_eq!(rolling_credit(&rows), RollingCredit::default());
}

#[test]
fn test_mean_of_present_skips_missing() {
    assert_eq!(mean_of_present(&[Some(dec!(30)), None, Some(dec!(10))]), dec!(20));
    assert_eq!(mean_of_present(&[None, None, None]), Decimal::ZERO);
    assert_eq!(mean_of_present(&[]), Decimal::ZERO);
}

#[test]
fn test_thirty_day_average() {
    assert_eq!(thirty_day_average(dec!(90), 90), Some(dec!(30)));
    assert_eq!(thirty_day_average(dec!(60), 180), Some(dec!(10)));
}
