// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tix_core::{Clock, Issue, Status, SystemClock};
use tracing::debug;

use crate::colors::Palette;
use crate::error::Result;
use crate::store::IssueRepository;

use super::open_workspace;

pub fn start(id: &str, palette: &Palette) -> Result<()> {
    run(id, Status::InProgress, "Started", palette)
}

pub fn close(id: &str, palette: &Palette) -> Result<()> {
    run(id, Status::Closed, "Closed", palette)
}

pub fn reopen(id: &str, palette: &Palette) -> Result<()> {
    run(id, Status::Open, "Reopened", palette)
}

fn run(id: &str, target: Status, verb: &str, palette: &Palette) -> Result<()> {
    let ws = open_workspace()?;
    let issue = transition_impl(&ws.store, &SystemClock, id, target)?;
    println!("{} {}: {}", verb, palette.literal(&issue.id), issue.title);
    Ok(())
}

/// Move an issue to `target`, enforcing the status workflow.
pub(crate) fn transition_impl(
    repo: &impl IssueRepository,
    clock: &impl Clock,
    id: &str,
    target: Status,
) -> Result<Issue> {
    let mut issue = repo.get(id)?;
    let from = issue.status;
    issue.transition(target, clock.now())?;
    repo.update(&issue)?;
    debug!(id = issue.id.as_str(), %from, to = %target, "status changed");
    Ok(issue)
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
