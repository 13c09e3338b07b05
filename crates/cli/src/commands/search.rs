// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use tix_core::{Clock, Issue, SystemClock};

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::display::{format_issue_line, format_search_summary};
use crate::error::Result;
use crate::query::{parse_search_query, Query, SearchResult, SearchService};
use crate::store::IssueRepository;

use super::{open_workspace, print_block};

/// JSON output of `tix search` and `tix query run`.
#[derive(Debug, Serialize)]
pub struct SearchOutputJson<'a> {
    pub query: &'a str,
    pub total: usize,
    pub count: usize,
    pub duration_ms: f64,
    pub issues: &'a [Issue],
}

pub fn run(
    terms: &[String],
    limit: Option<usize>,
    output: OutputFormat,
    palette: &Palette,
) -> Result<()> {
    // Parse errors are reported before the workspace is touched
    let query = crate::time_phase!("search::parse", { parse_search_query(&terms.join(" "))? });
    let ws = open_workspace()?;
    print_block(&run_impl(&ws.store, &SystemClock, &query, limit, output, palette)?);
    Ok(())
}

/// Execute and render a parsed query. `limit` overrides the query's own.
pub(crate) fn run_impl(
    repo: &impl IssueRepository,
    clock: &impl Clock,
    query: &Query,
    limit: Option<usize>,
    output: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    let service = SearchService::new(repo, clock);
    let limit = limit.unwrap_or(query.limit);
    let result = crate::time_phase!("search::execute", {
        service.execute_search_with_limit(query, limit)?
    });

    render(&query.raw, &result, output, palette)
}

pub(crate) fn render(
    raw: &str,
    result: &SearchResult,
    output: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    let out = match output {
        OutputFormat::Text => {
            let mut lines: Vec<String> = result
                .issues
                .iter()
                .map(|issue| format_issue_line(issue, palette))
                .collect();
            lines.push(palette.context(&format_search_summary(
                result.count,
                result.total,
                result.duration,
            )));
            lines.join("\n")
        }
        OutputFormat::Json => serde_json::to_string_pretty(&SearchOutputJson {
            query: raw,
            total: result.total,
            count: result.count,
            duration_ms: result.duration.as_secs_f64() * 1000.0,
            issues: &result.issues,
        })?,
        OutputFormat::Ids => result
            .issues
            .iter()
            .map(|issue| issue.id.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
