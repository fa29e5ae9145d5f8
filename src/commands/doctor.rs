// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::TransactionKind;
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &Store) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Budgets on income categories are never tracked
    for c in store.categories() {
        if c.kind == TransactionKind::Income && c.budget.is_some() {
            rows.push(vec!["income_category_budget".to_string(), c.name.clone()]);
        }
    }

    // 2) Templates with no due date never fire; a due date without a
    //    frequency never fires either
    for t in store.transactions() {
        if t.recurring.is_some() && t.next_due.is_none() {
            rows.push(vec![
                "recurring_without_next_due".to_string(),
                format!("#{} {}", t.id, t.description),
            ]);
        }
        if t.recurring.is_none() && t.next_due.is_some() {
            rows.push(vec![
                "next_due_without_recurring".to_string(),
                format!("#{} {}", t.id, t.description),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
