// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for issues and search results.

use std::time::Duration;

use tix_core::Issue;

use crate::colors::Palette;
use crate::git::FileChange;

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Format a single issue line for list and search output.
///
/// ```text
/// - [bug] (open, high, @ada) tx-1a2b3c4d: Login fails
/// ```
pub fn format_issue_line(issue: &Issue, palette: &Palette) -> String {
    let mut state = vec![
        palette.status(issue.status),
        palette.priority(issue.priority),
    ];
    if let Some(assignee) = &issue.assignee {
        state.push(format!("@{assignee}"));
    }
    let mut line = format!(
        "- [{}] ({}) {}: {}",
        issue.issue_type,
        state.join(", "),
        palette.literal(&issue.id),
        issue.title
    );
    if !issue.labels.is_empty() {
        line.push(' ');
        line.push_str(&palette.context(&format!("#{}", issue.labels.join(" #"))));
    }
    line
}

/// Format issue details for the show command.
pub fn format_issue_details(issue: &Issue, palette: &Palette) -> String {
    let mut output = Vec::new();

    output.push(format!(
        "[{}] {}",
        issue.issue_type,
        palette.literal(&issue.id)
    ));
    output.push(format!("Title: {}", issue.title));
    output.push(format!("Status: {}", palette.status(issue.status)));
    output.push(format!("Priority: {}", palette.priority(issue.priority)));
    if let Some(assignee) = &issue.assignee {
        output.push(format!("Assignee: {}", assignee));
    }
    if let Some(branch) = &issue.branch {
        output.push(format!("Branch: {}", branch));
    }
    if !issue.labels.is_empty() {
        output.push(format!("Labels: {}", issue.labels.join(", ")));
    }
    output.push(format!(
        "Created: {}",
        palette.context(&issue.created_at.format(TIMESTAMP_FORMAT).to_string())
    ));
    output.push(format!(
        "Updated: {}",
        palette.context(&issue.updated_at.format(TIMESTAMP_FORMAT).to_string())
    ));
    if let Some(closed_at) = issue.closed_at {
        output.push(format!(
            "Closed: {}",
            palette.context(&closed_at.format(TIMESTAMP_FORMAT).to_string())
        ));
    }

    if let Some(description) = &issue.description {
        output.push(String::new());
        output.push(palette.header("Description:"));
        for line in wrap_text(description, WRAP_WIDTH).lines() {
            output.push(format!("    {}", line));
        }
    }

    output.join("\n")
}

/// Summary line printed after search results.
///
/// ```text
/// 3 of 12 issues (0.41ms)
/// ```
pub fn format_search_summary(count: usize, total: usize, duration: Duration) -> String {
    let noun = if total == 1 { "issue" } else { "issues" };
    let elapsed = format!("{:.2}ms", duration.as_secs_f64() * 1000.0);
    if count == total {
        format!("{total} {noun} ({elapsed})")
    } else {
        format!("{count} of {total} {noun} ({elapsed})")
    }
}

/// One line of working tree status.
pub fn format_file_change(change: &FileChange, palette: &Palette) -> String {
    format!("  {} {}", palette.context(&change.code), change.path)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
