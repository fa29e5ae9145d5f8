// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amounts are always positive; the sign of a transaction is implied by
/// its kind. A transaction with `recurring` and `next_due` both set is a
/// template that spawns occurrences when processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category_id: i64,
    pub description: String,
    pub date: NaiveDate,
    pub recurring: Option<Frequency>,
    pub next_due: Option<NaiveDate>,
}

/// Caller-provided fields of a new transaction; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category_id: i64,
    pub description: String,
    pub date: NaiveDate,
    pub recurring: Option<Frequency>,
    pub next_due: Option<NaiveDate>,
}

/// Partial update. An outer `None` leaves the field untouched; for the
/// clearable fields the inner `Option` distinguishes "set" from "clear".
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Decimal>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub recurring: Option<Option<Frequency>>,
    pub next_due: Option<Option<NaiveDate>>,
}

/// Budgets are monthly and only meaningful on expense categories; income
/// categories may carry one but it is never tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub kind: TransactionKind,
    pub budget: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub kind: TransactionKind,
    pub budget: Option<Decimal>,
}

/// Kind is fixed at creation and cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub budget: Option<Option<Decimal>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category_id: i64,
    pub spent: Decimal,
    pub budget: Decimal,
    /// Spent-to-budget ratio as a percentage, unclamped: over-budget
    /// categories exceed 100.
    pub percentage: Decimal,
}

/// Derived on demand, never stored. Total figures cover the full ledger;
/// monthly figures cover the calendar month containing "today".
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub savings: Decimal,
    pub budget_status: Vec<BudgetStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category_id: i64,
    pub name: String,
    pub color: String,
    pub kind: TransactionKind,
    pub total: Decimal,
    /// Share of this kind's monthly total, as a percentage.
    pub share: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthCashflow {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}
