// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::models::{
    Category, CategoryPatch, FinancialSummary, NewCategory, NewTransaction, Transaction,
    TransactionKind, TransactionPatch,
};
use crate::summary;
use crate::utils::next_occurrence;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Transaction {0} not found")]
    TransactionNotFound(i64),
    #[error("Category {0} not found")]
    CategoryNotFound(i64),
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("Category '{0}' still has transactions")]
    CategoryInUse(String),
    #[error("Category '{category}' does not take {kind} transactions")]
    KindMismatch {
        category: String,
        kind: TransactionKind,
    },
    #[error("Amount must be positive")]
    NonPositiveAmount,
    #[error("Budget must be positive")]
    NonPositiveBudget,
}

static DEFAULT_CATEGORIES: Lazy<Vec<NewCategory>> = Lazy::new(|| {
    [
        ("Salary", "#10B981", TransactionKind::Income, None),
        ("Freelance", "#34D399", TransactionKind::Income, None),
        ("Investment", "#6EE7B7", TransactionKind::Income, None),
        ("Groceries", "#EF4444", TransactionKind::Expense, Some(400)),
        ("Transportation", "#F87171", TransactionKind::Expense, Some(200)),
        ("Entertainment", "#FCA5A5", TransactionKind::Expense, Some(150)),
        ("Utilities", "#DC2626", TransactionKind::Expense, Some(300)),
        ("Healthcare", "#B91C1C", TransactionKind::Expense, Some(200)),
        ("Shopping", "#991B1B", TransactionKind::Expense, Some(250)),
    ]
    .into_iter()
    .map(|(name, color, kind, budget)| NewCategory {
        name: name.to_string(),
        color: color.to_string(),
        kind,
        budget: budget.map(Decimal::from),
    })
    .collect()
});

/// Single owner of all ledger state. Everything is in memory and lives as
/// long as the store; mutation goes through the entry points below, which
/// enforce the category foreign key and assign sequential ids.
/// Transactions are kept most-recent-first.
#[derive(Debug)]
pub struct Store {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    base_currency: String,
    next_transaction_id: i64,
    next_category_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Store {
            transactions: Vec::new(),
            categories: Vec::new(),
            base_currency: "USD".to_string(),
            next_transaction_id: 1,
            next_category_id: 1,
        }
    }

    /// Empty ledger carrying the built-in starter categories.
    pub fn with_defaults() -> Self {
        let mut store = Store::new();
        for cat in DEFAULT_CATEGORIES.iter() {
            store.push_category(cat.clone());
        }
        store
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn set_base_currency(&mut self, ccy: &str) {
        self.base_currency = ccy.to_uppercase();
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<i64, StoreError> {
        if new.amount <= Decimal::ZERO {
            return Err(StoreError::NonPositiveAmount);
        }
        let category = self
            .category(new.category_id)
            .ok_or(StoreError::CategoryNotFound(new.category_id))?;
        if category.kind != new.kind {
            return Err(StoreError::KindMismatch {
                category: category.name.clone(),
                kind: new.kind,
            });
        }
        // A recurring transaction with no explicit first due date enters
        // the schedule one period after its own date.
        let next_due = match (new.recurring, new.next_due) {
            (Some(freq), None) => Some(next_occurrence(new.date, Some(freq))),
            (_, explicit) => explicit,
        };
        let id = self.next_transaction_id;
        self.next_transaction_id += 1;
        self.transactions.insert(
            0,
            Transaction {
                id,
                kind: new.kind,
                amount: new.amount,
                category_id: new.category_id,
                description: new.description,
                date: new.date,
                recurring: new.recurring,
                next_due,
            },
        );
        debug!(id, "recorded transaction");
        Ok(id)
    }

    pub fn update_transaction(&mut self, id: i64, patch: TransactionPatch) -> Result<(), StoreError> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TransactionNotFound(id))?;
        if let Some(amount) = patch.amount {
            if amount <= Decimal::ZERO {
                return Err(StoreError::NonPositiveAmount);
            }
        }
        let kind = patch.kind.unwrap_or(self.transactions[idx].kind);
        let category_id = patch.category_id.unwrap_or(self.transactions[idx].category_id);
        let category = self
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or(StoreError::CategoryNotFound(category_id))?;
        if category.kind != kind {
            return Err(StoreError::KindMismatch {
                category: category.name.clone(),
                kind,
            });
        }
        let txn = &mut self.transactions[idx];
        if let Some(kind) = patch.kind {
            txn.kind = kind;
        }
        if let Some(amount) = patch.amount {
            txn.amount = amount;
        }
        if let Some(category_id) = patch.category_id {
            txn.category_id = category_id;
        }
        if let Some(description) = patch.description {
            txn.description = description;
        }
        if let Some(date) = patch.date {
            txn.date = date;
        }
        if let Some(recurring) = patch.recurring {
            txn.recurring = recurring;
        }
        if let Some(next_due) = patch.next_due {
            txn.next_due = next_due;
        }
        debug!(id, "updated transaction");
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: i64) -> Result<(), StoreError> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TransactionNotFound(id))?;
        self.transactions.remove(idx);
        debug!(id, "deleted transaction");
        Ok(())
    }

    pub fn add_category(&mut self, new: NewCategory) -> Result<i64, StoreError> {
        if let Some(budget) = new.budget {
            if budget <= Decimal::ZERO {
                return Err(StoreError::NonPositiveBudget);
            }
        }
        if self
            .categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&new.name))
        {
            return Err(StoreError::DuplicateCategory(new.name));
        }
        Ok(self.push_category(new))
    }

    pub fn update_category(&mut self, id: i64, patch: CategoryPatch) -> Result<(), StoreError> {
        let idx = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::CategoryNotFound(id))?;
        if let Some(Some(budget)) = patch.budget {
            if budget <= Decimal::ZERO {
                return Err(StoreError::NonPositiveBudget);
            }
        }
        if let Some(name) = &patch.name {
            if self
                .categories
                .iter()
                .any(|c| c.id != id && c.name.eq_ignore_ascii_case(name))
            {
                return Err(StoreError::DuplicateCategory(name.clone()));
            }
        }
        let cat = &mut self.categories[idx];
        if let Some(name) = patch.name {
            cat.name = name;
        }
        if let Some(color) = patch.color {
            cat.color = color;
        }
        if let Some(budget) = patch.budget {
            cat.budget = budget;
        }
        Ok(())
    }

    pub fn delete_category(&mut self, id: i64) -> Result<(), StoreError> {
        let idx = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::CategoryNotFound(id))?;
        if self.transactions.iter().any(|t| t.category_id == id) {
            return Err(StoreError::CategoryInUse(self.categories[idx].name.clone()));
        }
        self.categories.remove(idx);
        Ok(())
    }

    pub fn summary(&self, today: NaiveDate) -> FinancialSummary {
        summary::compute(&self.transactions, &self.categories, today)
    }

    fn push_category(&mut self, new: NewCategory) -> i64 {
        let id = self.next_category_id;
        self.next_category_id += 1;
        self.categories.push(Category {
            id,
            name: new.name,
            color: new.color,
            kind: new.kind,
            budget: new.budget,
        });
        id
    }
}
