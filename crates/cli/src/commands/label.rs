// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tix_core::{Clock, SystemClock};

use crate::error::{Error, Result};
use crate::store::IssueRepository;

use super::open_workspace;

pub fn add(id: &str, label: &str) -> Result<()> {
    let ws = open_workspace()?;
    let (id, changed) = add_impl(&ws.store, &SystemClock, id, label)?;
    if changed {
        println!("Labeled {} with {}", id, label.trim());
    } else {
        println!("{} already has label {}", id, label.trim());
    }
    Ok(())
}

pub fn remove(id: &str, label: &str) -> Result<()> {
    let ws = open_workspace()?;
    let (id, changed) = remove_impl(&ws.store, &SystemClock, id, label)?;
    if changed {
        println!("Removed label {} from {}", label.trim(), id);
    } else {
        println!("{} does not have label {}", id, label.trim());
    }
    Ok(())
}

/// Returns the resolved ID and whether the issue changed.
pub(crate) fn add_impl(
    repo: &impl IssueRepository,
    clock: &impl Clock,
    id: &str,
    label: &str,
) -> Result<(String, bool)> {
    let label = clean_label(label)?;
    let mut issue = repo.get(id)?;
    let changed = issue.add_label(label, clock.now());
    if changed {
        repo.update(&issue)?;
    }
    Ok((issue.id, changed))
}

pub(crate) fn remove_impl(
    repo: &impl IssueRepository,
    clock: &impl Clock,
    id: &str,
    label: &str,
) -> Result<(String, bool)> {
    let label = clean_label(label)?;
    let mut issue = repo.get(id)?;
    let changed = issue.remove_label(label, clock.now());
    if changed {
        repo.update(&issue)?;
    }
    Ok((issue.id, changed))
}

fn clean_label(label: &str) -> Result<&str> {
    let label = label.trim();
    if label.is_empty() {
        Err(Error::FieldEmpty { field: "label" })
    } else {
        Ok(label)
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
