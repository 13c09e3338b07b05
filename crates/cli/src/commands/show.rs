// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::display::format_issue_details;
use crate::error::Result;
use crate::store::IssueRepository;

use super::open_workspace;

pub fn run(id: &str, output: OutputFormat, palette: &Palette) -> Result<()> {
    let ws = open_workspace()?;
    println!("{}", run_impl(&ws.store, id, output, palette)?);
    Ok(())
}

pub(crate) fn run_impl(
    repo: &impl IssueRepository,
    id: &str,
    output: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    let issue = repo.get(id)?;
    let out = match output {
        OutputFormat::Text => format_issue_details(&issue, palette),
        OutputFormat::Json => issue.to_json()?,
        OutputFormat::Ids => issue.id,
    };
    Ok(out)
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
