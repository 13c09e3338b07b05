// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tix_core::{Issue, Status};

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::error::Result;
use crate::store::IssueRepository;

use super::{open_workspace, print_block, render_issues};

pub fn run(status: Option<String>, output: OutputFormat, palette: &Palette) -> Result<()> {
    let ws = open_workspace()?;
    let issues = run_impl(&ws.store, status.as_deref())?;
    print_block(&render_issues(&issues, output, palette)?);
    Ok(())
}

/// All issues in ID order, optionally restricted to one status.
pub(crate) fn run_impl(repo: &impl IssueRepository, status: Option<&str>) -> Result<Vec<Issue>> {
    let status = status.map(str::parse::<Status>).transpose()?;
    let mut issues = crate::time_phase!("store::list", { repo.list_all()? });
    if let Some(status) = status {
        issues.retain(|issue| issue.status == status);
    }
    Ok(issues)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
