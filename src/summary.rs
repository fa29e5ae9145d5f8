// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    BudgetStatus, Category, CategoryBreakdown, FinancialSummary, MonthCashflow, Transaction,
    TransactionKind,
};
use crate::utils::month_key;

/// Aggregates the ledger into the dashboard summary. Pure: the only
/// external input is `today`, which selects the current month window.
/// Input order does not matter except for `budget_status`, which follows
/// category insertion order.
pub fn compute(
    transactions: &[Transaction],
    categories: &[Category],
    today: NaiveDate,
) -> FinancialSummary {
    let current = month_key(today);

    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut monthly_income = Decimal::ZERO;
    let mut monthly_expenses = Decimal::ZERO;
    let mut monthly_spent: HashMap<i64, Decimal> = HashMap::new();

    for t in transactions {
        let in_month = month_key(t.date) == current;
        match t.kind {
            TransactionKind::Income => {
                total_income += t.amount;
                if in_month {
                    monthly_income += t.amount;
                }
            }
            TransactionKind::Expense => {
                total_expenses += t.amount;
                if in_month {
                    monthly_expenses += t.amount;
                    *monthly_spent.entry(t.category_id).or_insert(Decimal::ZERO) += t.amount;
                }
            }
        }
    }

    // Only expense categories with a positive budget are tracked; the
    // budget > 0 filter also rules out division by zero.
    let budget_status = categories
        .iter()
        .filter(|c| c.kind == TransactionKind::Expense)
        .filter_map(|c| {
            let budget = c.budget.filter(|b| *b > Decimal::ZERO)?;
            let spent = monthly_spent.get(&c.id).copied().unwrap_or(Decimal::ZERO);
            Some(BudgetStatus {
                category_id: c.id,
                spent,
                budget,
                percentage: spent / budget * Decimal::ONE_HUNDRED,
            })
        })
        .collect();

    FinancialSummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        monthly_income,
        monthly_expenses,
        savings: monthly_income - monthly_expenses,
        budget_status,
    }
}

/// Per-category totals for one month, each with its share of that kind's
/// monthly total. Quiet categories are omitted; income rows come first,
/// then expense rows, largest first within each kind.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    month: &str,
) -> Vec<CategoryBreakdown> {
    let monthly: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| month_key(t.date) == month)
        .collect();

    let mut income_total = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;
    let mut rows: Vec<CategoryBreakdown> = Vec::new();
    for c in categories {
        let total: Decimal = monthly
            .iter()
            .filter(|t| t.category_id == c.id && t.kind == c.kind)
            .map(|t| t.amount)
            .sum();
        if total.is_zero() {
            continue;
        }
        match c.kind {
            TransactionKind::Income => income_total += total,
            TransactionKind::Expense => expense_total += total,
        }
        rows.push(CategoryBreakdown {
            category_id: c.id,
            name: c.name.clone(),
            color: c.color.clone(),
            kind: c.kind,
            total,
            share: Decimal::ZERO,
        });
    }
    for row in &mut rows {
        let kind_total = match row.kind {
            TransactionKind::Income => income_total,
            TransactionKind::Expense => expense_total,
        };
        if kind_total > Decimal::ZERO {
            row.share = row.total / kind_total * Decimal::ONE_HUNDRED;
        }
    }
    rows.sort_by(|a, b| {
        (a.kind as u8)
            .cmp(&(b.kind as u8))
            .then_with(|| b.total.cmp(&a.total))
    });
    rows
}

/// Income/expense totals for the last `months` calendar months ending at
/// `today` inclusive, zero-filled for months with no activity.
pub fn monthly_cashflow(
    transactions: &[Transaction],
    today: NaiveDate,
    months: usize,
) -> Vec<MonthCashflow> {
    let mut flows: Vec<MonthCashflow> = (0..months)
        .rev()
        .map(|back| {
            let month = today
                .checked_sub_months(Months::new(back as u32))
                .map_or_else(|| month_key(today), month_key);
            MonthCashflow {
                month,
                income: Decimal::ZERO,
                expenses: Decimal::ZERO,
            }
        })
        .collect();

    for t in transactions {
        let key = month_key(t.date);
        if let Some(flow) = flows.iter_mut().find(|f| f.month == key) {
            match t.kind {
                TransactionKind::Income => flow.income += t.amount,
                TransactionKind::Expense => flow.expenses += t.amount,
            }
        }
    }
    flows
}
