// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;
use tempfile::tempdir;
use wallettrack::models::{NewCategory, NewTransaction, TransactionKind};
use wallettrack::store::Store;
use wallettrack::{cli, commands::exporter};

fn setup() -> Store {
    let mut store = Store::new();
    store
        .add_category(NewCategory {
            name: "Groceries".into(),
            color: "#EF4444".into(),
            kind: TransactionKind::Expense,
            budget: None,
        })
        .unwrap();
    store
        .add_transaction(NewTransaction {
            kind: TransactionKind::Expense,
            amount: dec!(12.34),
            category_id: 1,
            description: "Corner Shop".into(),
            date: NaiveDate::parse_from_str("2025-01-02", "%Y-%m-%d").unwrap(),
            recurring: None,
            next_due: None,
        })
        .unwrap();
    store
}

fn run_export(store: &Store, format: &str, out: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "wallettrack",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_writes_pretty_json() {
    let store = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&store, "json", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-02",
                "kind": "expense",
                "amount": "12.34",
                "category": "Groceries",
                "description": "Corner Shop",
                "recurring": null,
                "next_due": null
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_oldest_first() {
    let mut store = setup();
    store
        .add_transaction(NewTransaction {
            kind: TransactionKind::Expense,
            amount: dec!(5),
            category_id: 1,
            description: "Snacks".into(),
            date: NaiveDate::parse_from_str("2025-01-01", "%Y-%m-%d").unwrap(),
            recurring: None,
            next_due: None,
        })
        .unwrap();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&store, "csv", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "date,kind,amount,category,description,recurring,next_due"
    );
    assert_eq!(lines[1], "2025-01-01,expense,5,Groceries,Snacks,,");
    assert_eq!(lines[2], "2025-01-02,expense,12.34,Groceries,Corner Shop,,");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let store = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&store, "xml", &out_str).is_err());
    assert!(!out_path.exists());
}
