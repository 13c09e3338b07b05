// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tix_core::{Clock, Issue, IssueType, Priority, SystemClock};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::store::IssueRepository;

use super::open_workspace;

/// Arguments of `tix new`.
#[derive(Debug, Clone, Default)]
pub struct NewIssue {
    pub type_or_title: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
}

pub fn run(args: NewIssue, output: OutputFormat, palette: &Palette) -> Result<()> {
    let ws = open_workspace()?;
    let issue = run_impl(&ws.store, &ws.config, &SystemClock, args)?;

    match output {
        OutputFormat::Text => println!(
            "Created [{}] {}: {}",
            issue.issue_type,
            palette.literal(&issue.id),
            issue.title
        ),
        OutputFormat::Json => println!("{}", issue.to_json()?),
        OutputFormat::Ids => println!("{}", issue.id),
    }
    Ok(())
}

/// Expand comma-separated labels into individual labels.
/// For example, ["a,b", "c"] becomes ["a", "b", "c"].
pub(crate) fn expand_labels(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .flat_map(|label| {
            label
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .collect()
}

/// Trim a value, treating blank input as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build and store a new issue.
pub(crate) fn run_impl(
    repo: &impl IssueRepository,
    config: &Config,
    clock: &impl Clock,
    args: NewIssue,
) -> Result<Issue> {
    let (issue_type, raw_title) = match args.title {
        Some(title) => (args.type_or_title.parse::<IssueType>()?, title),
        None => (IssueType::Task, args.type_or_title),
    };
    let title = raw_title.trim().to_string();
    if title.is_empty() {
        return Err(Error::FieldEmpty { field: "title" });
    }

    let priority = match args.priority {
        Some(p) => p.parse::<Priority>()?,
        None => Priority::default(),
    };

    let now = clock.now();
    let id = generate_unique_id(&config.prefix, &title, &now, |id| repo.exists(id))?;

    let mut issue = Issue::new(id, issue_type, title, now);
    issue.priority = priority;
    issue.description = non_blank(args.description);
    issue.assignee = non_blank(args.assignee);
    for label in expand_labels(&args.labels) {
        issue.add_label(&label, now);
    }

    repo.create(&issue)?;
    debug!(id = issue.id.as_str(), "created issue");
    Ok(issue)
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
