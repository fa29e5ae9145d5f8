// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::models::Transaction;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut txns: Vec<&Transaction> = store.transactions().iter().collect();
    txns.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
    let category_name = |t: &Transaction| {
        store
            .category(t.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    };

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "kind",
                "amount",
                "category",
                "description",
                "recurring",
                "next_due",
            ])?;
            for t in txns {
                wtr.write_record([
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.amount.to_string(),
                    category_name(t),
                    t.description.clone(),
                    t.recurring.map(|f| f.to_string()).unwrap_or_default(),
                    t.next_due.map(|d| d.to_string()).unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for t in txns {
                items.push(json!({
                    "date": t.date.to_string(),
                    "kind": t.kind.to_string(),
                    "amount": t.amount.to_string(),
                    "category": category_name(t),
                    "description": t.description,
                    "recurring": t.recurring.map(|f| f.to_string()),
                    "next_due": t.next_due.map(|d| d.to_string()),
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            anyhow::bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
