// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::recurring::process_due;
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("process", sub)) => process(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct RecurringRow {
    id: i64,
    description: String,
    category: String,
    amount: String,
    frequency: String,
    next_due: String,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<RecurringRow> = store
        .transactions()
        .iter()
        .filter(|t| t.recurring.is_some())
        .map(|t| RecurringRow {
            id: t.id,
            description: t.description.clone(),
            category: store
                .category(t.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            amount: t.amount.to_string(),
            frequency: t.recurring.map(|f| f.to_string()).unwrap_or_default(),
            next_due: t.next_due.map(|d| d.to_string()).unwrap_or_default(),
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.description.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.frequency.clone(),
                    r.next_due.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Description", "Category", "Amount", "Frequency", "Next due"],
                rows,
            )
        );
    }
    Ok(())
}

fn process(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = match sub.get_one::<String>("today") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let created = process_due(store, today)?;
    if created.is_empty() {
        println!("No recurring transactions due on {}", today);
    } else {
        println!(
            "Materialized {} occurrence(s) dated {}",
            created.len(),
            today
        );
    }
    Ok(())
}
