// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::store::Store;
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, month_key, parse_month, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => dashboard(store, sub)?,
        Some(("breakdown", sub)) => breakdown(store, sub)?,
        Some(("cashflow", sub)) => cashflow(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn dashboard(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = chrono::Utc::now().date_naive();
    let summary = store.summary(today);
    if sub.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let ccy = sub
        .get_one::<String>("currency")
        .map(|s| s.to_uppercase())
        .unwrap_or_else(|| store.base_currency().to_string());
    let rows = vec![
        vec!["Balance".to_string(), fmt_money(&summary.balance, &ccy)],
        vec!["Total income".to_string(), fmt_money(&summary.total_income, &ccy)],
        vec!["Total expenses".to_string(), fmt_money(&summary.total_expenses, &ccy)],
        vec!["Monthly income".to_string(), fmt_money(&summary.monthly_income, &ccy)],
        vec!["Monthly expenses".to_string(), fmt_money(&summary.monthly_expenses, &ccy)],
        vec!["Monthly savings".to_string(), fmt_money(&summary.savings, &ccy)],
    ];
    println!("{}", pretty_table(&["Metric", "Amount"], rows));

    if summary.monthly_income > Decimal::ZERO {
        let rate = summary.savings / summary.monthly_income * Decimal::ONE_HUNDRED;
        println!("Savings rate: {:.1}% of monthly income", rate);
    }

    if !summary.budget_status.is_empty() {
        let rows = summary
            .budget_status
            .iter()
            .map(|b| {
                vec![
                    store
                        .category(b.category_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| b.category_id.to_string()),
                    fmt_money(&b.budget, &ccy),
                    fmt_money(&b.spent, &ccy),
                    format!("{:.1}%", b.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Budget", "Spent", "Used"], rows));

        let over = summary
            .budget_status
            .iter()
            .filter(|b| b.percentage > Decimal::ONE_HUNDRED)
            .count();
        let near = summary
            .budget_status
            .iter()
            .filter(|b| b.percentage > Decimal::from(80) && b.percentage <= Decimal::ONE_HUNDRED)
            .count();
        if over > 0 {
            println!("{} categor{} over budget", over, if over == 1 { "y is" } else { "ies are" });
        }
        if near > 0 {
            println!(
                "{} categor{} approaching the budget limit",
                near,
                if near == 1 { "y is" } else { "ies are" }
            );
        }
    }
    Ok(())
}

fn breakdown(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => month_key(chrono::Utc::now().date_naive()),
    };

    let data = summary::category_breakdown(store.transactions(), store.categories(), &month);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.kind.to_string(),
                    format!("{:.2}", r.total),
                    format!("{:.1}%", r.share),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Kind", "Amount", "Share"], rows)
        );
    }
    Ok(())
}

fn cashflow(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&6);
    let today = chrono::Utc::now().date_naive();

    let data = summary::monthly_cashflow(store.transactions(), today, months);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|f| {
                vec![
                    f.month.clone(),
                    format!("{:.2}", f.income),
                    format!("{:.2}", f.expenses),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    }
    Ok(())
}
