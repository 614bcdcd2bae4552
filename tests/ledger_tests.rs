// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use shopbook::dates::{self, parse_entry_date};
use shopbook::error::LedgerError;
use shopbook::ledger::Ledger;
use shopbook::models::{EntryKind, NewEntry};
use shopbook::store::EntryStore;
use shopbook::utils::parse_amount;

fn setup() -> Ledger {
    Ledger::new(EntryStore::open_in_memory().unwrap())
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn input(amount: &str) -> NewEntry {
    NewEntry {
        amount: dec(amount),
        description: None,
        payment_mode: None,
        date: None,
    }
}

#[test]
fn add_defaults_date_to_today() {
    let ledger = setup();
    let entry = ledger.add_income(1, input("100")).unwrap();
    assert_eq!(entry.date, dates::today());
}

#[test]
fn add_normalizes_description_and_payment_mode() {
    let ledger = setup();
    let entry = ledger.add_income(1, input("10")).unwrap();
    assert_eq!(entry.description, "none provided");
    assert_eq!(entry.payment_mode, "cash");

    let entry = ledger
        .add_expense(
            1,
            NewEntry {
                amount: dec("5"),
                description: Some("   ".to_string()),
                payment_mode: Some(" upi ".to_string()),
                date: None,
            },
        )
        .unwrap();
    assert_eq!(entry.description, "none provided");
    assert_eq!(entry.payment_mode, "upi");

    let entry = ledger
        .add_expense(
            1,
            NewEntry {
                amount: dec("5"),
                description: Some("  chai stall  ".to_string()),
                payment_mode: None,
                date: None,
            },
        )
        .unwrap();
    assert_eq!(entry.description, "chai stall");
}

#[test]
fn add_rejects_non_positive_amounts_without_persisting() {
    let ledger = setup();
    for amount in ["0", "-5"] {
        let err = ledger.add_income(1, input(amount)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)), "{err}");
        assert_eq!(err.to_string(), "Amount must be greater than 0");
    }
    assert_eq!(
        ledger.store().sum_all(EntryKind::Income, 1).unwrap(),
        Decimal::ZERO
    );
}

#[test]
fn add_rejects_malformed_dates_without_persisting() {
    let ledger = setup();
    for date in ["15-03-2024", "2024-13-01", "2024-03-99", "yesterday"] {
        let err = ledger
            .add_income(
                1,
                NewEntry {
                    amount: dec("10"),
                    description: None,
                    payment_mode: None,
                    date: Some(date.to_string()),
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)), "{date}");
    }
    assert_eq!(
        ledger.store().sum_all(EntryKind::Income, 1).unwrap(),
        Decimal::ZERO
    );
}

#[test]
fn delete_rejects_non_positive_ids_before_touching_storage() {
    let ledger = setup();
    for id in [0, -3] {
        let err = ledger.delete_entry(1, EntryKind::Income, id).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid transaction id");
    }
}

#[test]
fn delete_reports_not_found_for_missing_wrong_kind_and_wrong_owner() {
    let ledger = setup();
    let entry = ledger.add_income(1, input("100")).unwrap();

    let err = ledger.delete_entry(1, EntryKind::Income, 999).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound));

    // The income id passed as an expense must not delete the income.
    let err = ledger
        .delete_entry(1, EntryKind::Expense, entry.id)
        .unwrap_err();
    assert!(matches!(err, LedgerError::NotFound));

    // Cross-owner access is indistinguishable from a missing row.
    let err = ledger
        .delete_entry(2, EntryKind::Income, entry.id)
        .unwrap_err();
    assert!(matches!(err, LedgerError::NotFound));
    assert_eq!(err.to_string(), "Transaction not found");
    assert_eq!(
        ledger.store().sum_all(EntryKind::Income, 1).unwrap(),
        dec("100")
    );

    ledger.delete_entry(1, EntryKind::Income, entry.id).unwrap();
    assert_eq!(
        ledger.store().sum_all(EntryKind::Income, 1).unwrap(),
        Decimal::ZERO
    );
}

#[test]
fn amount_strings_must_be_decimal() {
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("").is_err());
    assert_eq!(parse_amount(" 100.50 ").unwrap(), dec("100.50"));
}

#[test]
fn entry_dates_must_be_iso() {
    assert!(parse_entry_date("2024-03-15").is_ok());
    assert!(parse_entry_date("2024-3-15").is_err());
    assert!(parse_entry_date("03/15/2024").is_err());
}

#[test]
fn entry_kind_parses_strictly() {
    assert_eq!("income".parse::<EntryKind>().unwrap(), EntryKind::Income);
    assert_eq!("expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
    let err = "transfer".parse::<EntryKind>().unwrap_err();
    assert_eq!(err.to_string(), "type must be income or expense");
}

#[test]
fn add_output_serializes_boundary_field_names() {
    let ledger = setup();
    let entry = ledger
        .add_income(
            1,
            NewEntry {
                amount: dec("100"),
                description: Some("sale".to_string()),
                payment_mode: Some("card".to_string()),
                date: Some("2024-03-01".to_string()),
            },
        )
        .unwrap();
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "income");
    assert_eq!(json["paymentMode"], "card");
    assert_eq!(json["date"], "2024-03-01");
    assert!(json.get("ownerId").is_none());
    assert!(json.get("createdAt").is_some());
}
