// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::models::{CategoryPatch, NewCategory};
use crate::store::Store;
use crate::utils::{parse_decimal, parse_kind, pretty_table};

const DEFAULT_COLOR: &str = "#6B7280";

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().to_string();
            let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
            let color = sub
                .get_one::<String>("color")
                .map(|s| s.to_string())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string());
            let budget = sub
                .get_one::<String>("budget")
                .map(|s| parse_decimal(s))
                .transpose()?;
            store.add_category(NewCategory {
                name: name.clone(),
                color,
                kind,
                budget,
            })?;
            println!("Added category '{}'", name);
        }
        Some(("list", _)) => {
            let rows = store
                .categories()
                .iter()
                .map(|c| {
                    vec![
                        c.name.clone(),
                        c.kind.to_string(),
                        c.color.clone(),
                        c.budget.map(|b| b.to_string()).unwrap_or_default(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Category", "Kind", "Color", "Budget"], rows)
            );
        }
        Some(("edit", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let id = store
                .category_by_name(name)
                .with_context(|| format!("Category '{}' not found", name))?
                .id;
            let mut patch = CategoryPatch::default();
            if let Some(s) = sub.get_one::<String>("rename") {
                patch.name = Some(s.clone());
            }
            if let Some(s) = sub.get_one::<String>("color") {
                patch.color = Some(s.clone());
            }
            if sub.get_flag("clear-budget") {
                patch.budget = Some(None);
            } else if let Some(s) = sub.get_one::<String>("budget") {
                patch.budget = Some(Some(parse_decimal(s)?));
            }
            store.update_category(id, patch)?;
            println!("Updated category '{}'", name);
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let id = store
                .category_by_name(name)
                .with_context(|| format!("Category '{}' not found", name))?
                .id;
            store.delete_category(id)?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
