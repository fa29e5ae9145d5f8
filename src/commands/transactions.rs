// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{NewTransaction, Transaction, TransactionPatch};
use crate::store::Store;
use crate::utils::{
    maybe_print_json, month_key, parse_date, parse_decimal, parse_frequency, parse_kind,
    pretty_table,
};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category_name = sub.get_one::<String>("category").unwrap();
    let description = sub.get_one::<String>("desc").unwrap().to_string();
    let recurring = match sub.get_one::<String>("recurring") {
        Some(s) => parse_frequency(s)?,
        None => None,
    };
    let next_due = sub
        .get_one::<String>("next-due")
        .map(|s| parse_date(s))
        .transpose()?;

    let category_id = store
        .category_by_name(category_name)
        .with_context(|| format!("Category '{}' not found", category_name))?
        .id;
    let id = store.add_transaction(NewTransaction {
        kind,
        amount,
        category_id,
        description: description.clone(),
        date,
        recurring,
        next_due,
    })?;
    println!(
        "Recorded {} on {} for '{}' ({}, id {})",
        amount, date, description, category_name, id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.recurring.clone(),
                    r.next_due.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Amount", "Category", "Description", "Recurring", "Next due"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub recurring: String,
    pub next_due: String,
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub.get_one::<String>("month");
    let kind = sub
        .get_one::<String>("kind")
        .map(|s| parse_kind(s))
        .transpose()?;
    let category_id = match sub.get_one::<String>("category") {
        Some(name) => Some(
            store
                .category_by_name(name)
                .with_context(|| format!("Category '{}' not found", name))?
                .id,
        ),
        None => None,
    };

    let mut txns: Vec<&Transaction> = store
        .transactions()
        .iter()
        .filter(|t| month.is_none_or(|m| month_key(t.date) == *m))
        .filter(|t| kind.is_none_or(|k| t.kind == k))
        .filter(|t| category_id.is_none_or(|id| t.category_id == id))
        .collect();
    txns.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txns.truncate(*limit);
    }

    Ok(txns
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            amount: t.amount.to_string(),
            category: store
                .category(t.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            description: t.description.clone(),
            recurring: t.recurring.map(|f| f.to_string()).unwrap_or_default(),
            next_due: t.next_due.map(|d| d.to_string()).unwrap_or_default(),
        })
        .collect())
}

fn edit(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut patch = TransactionPatch::default();
    if let Some(s) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(s)?);
    }
    if let Some(s) = sub.get_one::<String>("kind") {
        patch.kind = Some(parse_kind(s)?);
    }
    if let Some(s) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_decimal(s)?);
    }
    if let Some(name) = sub.get_one::<String>("category") {
        patch.category_id = Some(
            store
                .category_by_name(name)
                .with_context(|| format!("Category '{}' not found", name))?
                .id,
        );
    }
    if let Some(s) = sub.get_one::<String>("desc") {
        patch.description = Some(s.clone());
    }
    if let Some(s) = sub.get_one::<String>("recurring") {
        patch.recurring = Some(parse_frequency(s)?);
    }
    if let Some(s) = sub.get_one::<String>("next-due") {
        patch.next_due = Some(Some(parse_date(s)?));
    }
    store.update_transaction(id, patch)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.delete_transaction(id)?;
    println!("Deleted transaction {}", id);
    Ok(())
}
