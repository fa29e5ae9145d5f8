// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Duration, Months, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::models::{Frequency, TransactionKind};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_kind(s: &str) -> Result<TransactionKind> {
    match s.to_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        _ => Err(anyhow::anyhow!(
            "Invalid kind '{}', expected income|expense",
            s
        )),
    }
}

/// `"none"` is a valid spelling: it clears the recurrence.
pub fn parse_frequency(s: &str) -> Result<Option<Frequency>> {
    match s.to_lowercase().as_str() {
        "none" => Ok(None),
        "weekly" => Ok(Some(Frequency::Weekly)),
        "monthly" => Ok(Some(Frequency::Monthly)),
        "yearly" => Ok(Some(Frequency::Yearly)),
        _ => Err(anyhow::anyhow!(
            "Invalid frequency '{}', expected none|weekly|monthly|yearly",
            s
        )),
    }
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Advances a date by one recurrence period. A `None` frequency returns
/// the input unchanged; month and year steps clamp to the last day of the
/// target month (Jan 31 + 1 month = Feb 28).
pub fn next_occurrence(from: NaiveDate, frequency: Option<Frequency>) -> NaiveDate {
    match frequency {
        Some(Frequency::Weekly) => from + Duration::days(7),
        Some(Frequency::Monthly) => from.checked_add_months(Months::new(1)).unwrap_or(from),
        Some(Frequency::Yearly) => from.checked_add_months(Months::new(12)).unwrap_or(from),
        None => from,
    }
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
