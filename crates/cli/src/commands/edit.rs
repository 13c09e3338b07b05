// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tix_core::{Clock, Issue, IssueType, Priority, SystemClock};
use tracing::debug;

use crate::error::{Error, Result};
use crate::store::IssueRepository;

use super::new::non_blank;
use super::open_workspace;

/// Values that clear an optional attribute.
const CLEAR_VALUES: [&str; 2] = ["none", "-"];

pub fn run(id: &str, attr: &str, value: &str) -> Result<()> {
    let ws = open_workspace()?;
    let issue = run_impl(&ws.store, &SystemClock, id, attr, value)?;
    println!("Updated {} of {}", attr.to_lowercase(), issue.id);
    Ok(())
}

pub(crate) fn run_impl(
    repo: &impl IssueRepository,
    clock: &impl Clock,
    id: &str,
    attr: &str,
    value: &str,
) -> Result<Issue> {
    let mut issue = repo.get(id)?;

    match attr.to_lowercase().as_str() {
        "title" => {
            let title = value.trim();
            if title.is_empty() {
                return Err(Error::FieldEmpty { field: "title" });
            }
            issue.title = title.to_string();
        }
        "description" => issue.description = non_blank(Some(value.to_string())),
        "type" => issue.issue_type = value.parse::<IssueType>()?,
        "priority" => issue.priority = value.parse::<Priority>()?,
        "assignee" => {
            issue.assignee = non_blank(Some(value.to_string()))
                .filter(|v| !CLEAR_VALUES.contains(&v.as_str()));
        }
        _ => {
            return Err(Error::UnknownAttribute {
                attr: attr.to_string(),
            })
        }
    }

    issue.updated_at = clock.now();
    repo.update(&issue)?;
    debug!(id = issue.id.as_str(), attr, "edited issue");
    Ok(issue)
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
