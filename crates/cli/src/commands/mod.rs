// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod branch;
pub mod edit;
pub mod init;
pub mod label;
pub mod lifecycle;
pub mod list;
pub mod new;
pub mod query;
pub mod search;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use tix_core::Issue;

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::config::{find_work_dir, issues_dir, Config};
use crate::display::format_issue_line;
use crate::error::Result;
use crate::store::FileStore;

/// An opened `.tix` directory.
pub struct Workspace {
    pub work_dir: PathBuf,
    pub config: Config,
    pub store: FileStore,
}

/// Open the workspace found from the current directory.
pub fn open_workspace() -> Result<Workspace> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let store = crate::time_phase!("store::open", { FileStore::open(issues_dir(&work_dir))? });
    Ok(Workspace {
        work_dir,
        config,
        store,
    })
}

/// Render a list of issues in the requested format.
pub(crate) fn render_issues(
    issues: &[Issue],
    format: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    let out = match format {
        OutputFormat::Text => issues
            .iter()
            .map(|issue| format_issue_line(issue, palette))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(issues)?,
        OutputFormat::Ids => issues
            .iter()
            .map(|issue| issue.id.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}

/// Print `output` followed by a newline, unless it is empty.
pub(crate) fn print_block(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
