// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use tracing::info;

use crate::models::{NewTransaction, TransactionPatch};
use crate::store::{Store, StoreError};
use crate::utils::next_occurrence;

/// Materializes one occurrence for every recurring template whose
/// `next_due` falls on or before `today`, then advances the template's
/// schedule. Occurrences are plain transactions detached from the series;
/// the template keeps its `id` and `date` and stays the durable anchor.
///
/// The advanced `next_due` is derived from `today`, so it always lands
/// strictly in the future: re-running on the same day is a no-op, and a
/// schedule lagging several periods catches up one day at a time.
///
/// Returns the ids of the created occurrences.
pub fn process_due(store: &mut Store, today: NaiveDate) -> Result<Vec<i64>, StoreError> {
    let due: Vec<_> = store
        .transactions()
        .iter()
        .filter(|t| matches!((t.recurring, t.next_due), (Some(_), Some(next)) if next <= today))
        .map(|t| {
            (
                t.id,
                t.recurring,
                NewTransaction {
                    kind: t.kind,
                    amount: t.amount,
                    category_id: t.category_id,
                    description: t.description.clone(),
                    date: today,
                    recurring: None,
                    next_due: None,
                },
            )
        })
        .collect();

    let mut created = Vec::with_capacity(due.len());
    for (template_id, frequency, occurrence) in due {
        created.push(store.add_transaction(occurrence)?);
        store.update_transaction(
            template_id,
            TransactionPatch {
                next_due: Some(Some(next_occurrence(today, frequency))),
                ..TransactionPatch::default()
            },
        )?;
    }

    if !created.is_empty() {
        info!(count = created.len(), %today, "materialized recurring occurrences");
    }
    Ok(created)
}
