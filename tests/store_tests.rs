// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use wallettrack::models::{
    CategoryPatch, Frequency, NewCategory, NewTransaction, TransactionKind, TransactionPatch,
};
use wallettrack::store::{Store, StoreError};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> Store {
    let mut store = Store::new();
    store
        .add_category(NewCategory {
            name: "Salary".into(),
            color: "#10B981".into(),
            kind: TransactionKind::Income,
            budget: None,
        })
        .unwrap();
    store
        .add_category(NewCategory {
            name: "Groceries".into(),
            color: "#EF4444".into(),
            kind: TransactionKind::Expense,
            budget: Some(dec!(400)),
        })
        .unwrap();
    store
}

fn grocery_run(amount: rust_decimal::Decimal, day: &str) -> NewTransaction {
    NewTransaction {
        kind: TransactionKind::Expense,
        amount,
        category_id: 2,
        description: "Groceries".into(),
        date: date(day),
        recurring: None,
        next_due: None,
    }
}

#[test]
fn ids_are_sequential_and_newest_comes_first() {
    let mut store = setup();
    let a = store.add_transaction(grocery_run(dec!(10), "2025-01-01")).unwrap();
    let b = store.add_transaction(grocery_run(dec!(20), "2025-01-02")).unwrap();
    let c = store.add_transaction(grocery_run(dec!(30), "2025-01-03")).unwrap();
    assert_eq!((a, b, c), (1, 2, 3));
    let ids: Vec<i64> = store.transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn add_rejects_unknown_category() {
    let mut store = setup();
    let mut t = grocery_run(dec!(10), "2025-01-01");
    t.category_id = 99;
    assert!(matches!(
        store.add_transaction(t),
        Err(StoreError::CategoryNotFound(99))
    ));
}

#[test]
fn add_rejects_kind_mismatch() {
    let mut store = setup();
    let mut t = grocery_run(dec!(10), "2025-01-01");
    t.kind = TransactionKind::Income; // Groceries is an expense category
    assert!(matches!(
        store.add_transaction(t),
        Err(StoreError::KindMismatch { .. })
    ));
}

#[test]
fn add_rejects_non_positive_amount() {
    let mut store = setup();
    assert!(matches!(
        store.add_transaction(grocery_run(dec!(0), "2025-01-01")),
        Err(StoreError::NonPositiveAmount)
    ));
    assert!(matches!(
        store.add_transaction(grocery_run(dec!(-5), "2025-01-01")),
        Err(StoreError::NonPositiveAmount)
    ));
}

#[test]
fn add_derives_next_due_for_recurring_transactions() {
    let mut store = setup();
    let id = store
        .add_transaction(NewTransaction {
            recurring: Some(Frequency::Monthly),
            ..grocery_run(dec!(60), "2025-01-31")
        })
        .unwrap();
    let t = store.transaction(id).unwrap();
    assert_eq!(t.next_due, Some(date("2025-02-28")));

    // an explicit due date wins over derivation
    let id = store
        .add_transaction(NewTransaction {
            recurring: Some(Frequency::Weekly),
            next_due: Some(date("2025-03-01")),
            ..grocery_run(dec!(60), "2025-01-01")
        })
        .unwrap();
    assert_eq!(store.transaction(id).unwrap().next_due, Some(date("2025-03-01")));
}

#[test]
fn update_merges_only_the_given_fields() {
    let mut store = setup();
    let id = store.add_transaction(grocery_run(dec!(42), "2025-01-05")).unwrap();
    store
        .update_transaction(
            id,
            TransactionPatch {
                amount: Some(dec!(55)),
                ..TransactionPatch::default()
            },
        )
        .unwrap();
    let t = store.transaction(id).unwrap();
    assert_eq!(t.amount, dec!(55));
    assert_eq!(t.date, date("2025-01-05"));
    assert_eq!(t.description, "Groceries");
    assert_eq!(t.category_id, 2);
}

#[test]
fn update_validates_the_resulting_category_pairing() {
    let mut store = setup();
    let id = store.add_transaction(grocery_run(dec!(42), "2025-01-05")).unwrap();
    // moving an expense onto the income category must fail
    assert!(matches!(
        store.update_transaction(
            id,
            TransactionPatch {
                category_id: Some(1),
                ..TransactionPatch::default()
            }
        ),
        Err(StoreError::KindMismatch { .. })
    ));
    // moving it while also flipping the kind is fine
    store
        .update_transaction(
            id,
            TransactionPatch {
                kind: Some(TransactionKind::Income),
                category_id: Some(1),
                ..TransactionPatch::default()
            },
        )
        .unwrap();
    assert_eq!(store.transaction(id).unwrap().category_id, 1);
}

#[test]
fn missing_ids_surface_not_found() {
    let mut store = setup();
    assert!(matches!(
        store.update_transaction(7, TransactionPatch::default()),
        Err(StoreError::TransactionNotFound(7))
    ));
    assert!(matches!(
        store.delete_transaction(7),
        Err(StoreError::TransactionNotFound(7))
    ));
    assert!(matches!(
        store.update_category(42, CategoryPatch::default()),
        Err(StoreError::CategoryNotFound(42))
    ));
}

#[test]
fn delete_removes_the_transaction() {
    let mut store = setup();
    let id = store.add_transaction(grocery_run(dec!(10), "2025-01-01")).unwrap();
    store.delete_transaction(id).unwrap();
    assert!(store.transactions().is_empty());
}

#[test]
fn duplicate_category_names_are_rejected() {
    let mut store = setup();
    let dup = NewCategory {
        name: "groceries".into(), // case-insensitive match
        color: "#000000".into(),
        kind: TransactionKind::Expense,
        budget: None,
    };
    assert!(matches!(
        store.add_category(dup),
        Err(StoreError::DuplicateCategory(_))
    ));
}

#[test]
fn category_budget_must_be_positive() {
    let mut store = setup();
    let bad = NewCategory {
        name: "Misc".into(),
        color: "#000000".into(),
        kind: TransactionKind::Expense,
        budget: Some(dec!(0)),
    };
    assert!(matches!(
        store.add_category(bad),
        Err(StoreError::NonPositiveBudget)
    ));
    assert!(matches!(
        store.update_category(
            2,
            CategoryPatch {
                budget: Some(Some(dec!(-1))),
                ..CategoryPatch::default()
            }
        ),
        Err(StoreError::NonPositiveBudget)
    ));
}

#[test]
fn referenced_categories_cannot_be_deleted() {
    let mut store = setup();
    let id = store.add_transaction(grocery_run(dec!(10), "2025-01-01")).unwrap();
    assert!(matches!(
        store.delete_category(2),
        Err(StoreError::CategoryInUse(_))
    ));
    store.delete_transaction(id).unwrap();
    store.delete_category(2).unwrap();
    assert!(store.category_by_name("Groceries").is_none());
}

#[test]
fn renaming_a_category_keeps_history_attached() {
    let mut store = setup();
    let id = store.add_transaction(grocery_run(dec!(320), "2025-01-05")).unwrap();
    store
        .update_category(
            2,
            CategoryPatch {
                name: Some("Food".into()),
                ..CategoryPatch::default()
            },
        )
        .unwrap();
    // the id join survives the rename
    assert_eq!(store.transaction(id).unwrap().category_id, 2);
    let s = store.summary(date("2025-01-15"));
    assert_eq!(s.budget_status[0].category_id, 2);
    assert_eq!(s.budget_status[0].spent, dec!(320));
}

#[test]
fn clearing_a_budget_stops_tracking() {
    let mut store = setup();
    store.add_transaction(grocery_run(dec!(10), "2025-01-05")).unwrap();
    store
        .update_category(
            2,
            CategoryPatch {
                budget: Some(None),
                ..CategoryPatch::default()
            },
        )
        .unwrap();
    assert!(store.summary(date("2025-01-15")).budget_status.is_empty());
}

#[test]
fn with_defaults_seeds_the_starter_categories() {
    let store = Store::with_defaults();
    assert_eq!(store.categories().len(), 9);
    assert_eq!(store.categories()[0].name, "Salary");
    assert_eq!(store.category_by_name("Groceries").unwrap().budget, Some(dec!(400)));
    assert!(store.transactions().is_empty());
    assert_eq!(store.base_currency(), "USD");
}

#[test]
fn base_currency_is_uppercased() {
    let mut store = Store::new();
    store.set_base_currency("eur");
    assert_eq!(store.base_currency(), "EUR");
}
