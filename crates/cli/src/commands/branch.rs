// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue branches: `tix branch`, `tix merge` and `tix status`.

use tix_core::{Clock, Issue, Status, SystemClock};
use tracing::debug;

use crate::colors::Palette;
use crate::config::GitConfig;
use crate::display::{format_file_change, format_issue_line};
use crate::error::{Error, Result};
use crate::git::Git;
use crate::store::IssueRepository;

use super::{open_workspace, Workspace};

/// Git repository holding the workspace.
fn git_for(ws: &Workspace) -> Git {
    Git::new(ws.work_dir.parent().unwrap_or(ws.work_dir.as_path()))
}

pub fn branch(id: &str, palette: &Palette) -> Result<()> {
    let ws = open_workspace()?;
    let git = git_for(&ws);
    let issue = branch_impl(&ws.store, &ws.config.git, &git, &SystemClock, id)?;
    println!(
        "Switched to {} for {}",
        palette.literal(issue.branch.as_deref().unwrap_or_default()),
        palette.literal(&issue.id)
    );
    Ok(())
}

pub fn merge(id: &str, into: Option<&str>, palette: &Palette) -> Result<()> {
    let ws = open_workspace()?;
    let git = git_for(&ws);
    let target = into.unwrap_or(&ws.config.git.base_branch).to_string();
    let issue = merge_impl(&ws.store, &git, &SystemClock, id, &target)?;
    println!(
        "Merged {} into {} and closed {}",
        issue.branch.as_deref().unwrap_or_default(),
        target,
        palette.literal(&issue.id)
    );
    Ok(())
}

pub fn status(palette: &Palette) -> Result<()> {
    let ws = open_workspace()?;
    let git = git_for(&ws);
    println!("{}", status_impl(&ws.store, &ws.config.git, &git, palette)?);
    Ok(())
}

/// Create (if needed) and check out the issue's branch, then record it on
/// the issue. Open issues move to `in_progress`.
pub(crate) fn branch_impl(
    repo: &impl IssueRepository,
    config: &GitConfig,
    git: &Git,
    clock: &impl Clock,
    id: &str,
) -> Result<Issue> {
    git.ensure_repo()?;
    let mut issue = repo.get(id)?;
    let name = config.branch_for(&issue.id);

    if !git.branch_exists(&name)? {
        git.create_branch(&name, &config.base_branch)?;
    }
    git.checkout(&name)?;

    let now = clock.now();
    issue.branch = Some(name);
    if issue.status == Status::Open {
        issue.transition(Status::InProgress, now)?;
    } else {
        issue.updated_at = now;
    }
    repo.update(&issue)?;
    debug!(id = issue.id.as_str(), "branch recorded");
    Ok(issue)
}

/// Merge the issue's branch into `target` and close the issue.
pub(crate) fn merge_impl(
    repo: &impl IssueRepository,
    git: &Git,
    clock: &impl Clock,
    id: &str,
    target: &str,
) -> Result<Issue> {
    git.ensure_repo()?;
    let mut issue = repo.get(id)?;
    let branch = issue.branch.clone().ok_or_else(|| Error::NoBranch {
        id: issue.id.clone(),
    })?;

    git.checkout(target)?;
    git.merge(&branch, &format!("Merge {}: {}", branch, issue.title))?;

    if issue.status != Status::Closed {
        issue.transition(Status::Closed, clock.now())?;
        repo.update(&issue)?;
    }
    Ok(issue)
}

/// Current branch, the issue it belongs to and working tree changes.
pub(crate) fn status_impl(
    repo: &impl IssueRepository,
    config: &GitConfig,
    git: &Git,
    palette: &Palette,
) -> Result<String> {
    git.ensure_repo()?;
    let branch = git.current_branch()?;
    let mut lines = vec![format!("On branch {}", palette.literal(&branch))];

    if let Some(id) = config.issue_for_branch(&branch) {
        match repo.get_exact(id) {
            Ok(issue) => lines.push(format_issue_line(&issue, palette)),
            Err(Error::IssueNotFound(_)) => {
                lines.push(palette.context(&format!("No issue {id} for this branch")))
            }
            Err(e) => return Err(e),
        }
    }

    let changes = git.status()?;
    if changes.is_empty() {
        lines.push(palette.context("Working tree clean"));
    } else {
        lines.push(palette.header("Changes:"));
        lines.extend(changes.iter().map(|c| format_file_change(c, palette)));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
