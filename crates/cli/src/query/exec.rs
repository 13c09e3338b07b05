// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of parsed queries against an issue set.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tix_core::{Clock, Issue};
use tracing::debug;

use crate::error::Result;
use crate::store::IssueRepository;

use super::expr::{BoolOp, DateField, Field, Query, SortKey, SortOrder, ValueField};

/// Outcome of running a query.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Matching issues, sorted and limited.
    pub issues: Vec<Issue>,
    /// Number of matches before the limit was applied.
    pub total: usize,
    /// Number of issues returned.
    pub count: usize,
    /// Wall time spent evaluating the query.
    pub duration: Duration,
}

/// Run a query against a snapshot of issues.
///
/// Relative dates resolve against `now`. Never fails: a query with no
/// matches, or no issues at all, yields an empty result.
pub fn execute(query: &Query, issues: &[Issue], now: DateTime<Utc>) -> SearchResult {
    execute_with_limit(query, issues, now, query.limit)
}

/// Like [`execute`], but truncates to `limit` (`0` = all) instead of the
/// query's own limit. The query itself is left as parsed.
pub fn execute_with_limit(
    query: &Query,
    issues: &[Issue],
    now: DateTime<Utc>,
    limit: usize,
) -> SearchResult {
    let started = Instant::now();

    let mut matches: Vec<Issue> = issues
        .iter()
        .filter(|issue| query_matches(query, issue, now))
        .cloned()
        .collect();
    let total = matches.len();

    if let Some(sort) = query.sort {
        matches.sort_by(|a, b| compare_by(sort.key, a, b).then_with(|| a.id.cmp(&b.id)));
        if sort.order == SortOrder::Desc {
            matches.reverse();
        }
    }

    if limit > 0 {
        matches.truncate(limit);
    }
    let count = matches.len();
    let duration = started.elapsed();

    debug!(
        query = %query,
        scanned = issues.len(),
        total,
        count,
        duration_us = duration.as_micros() as u64,
        "search executed"
    );

    SearchResult {
        issues: matches,
        total,
        count,
        duration,
    }
}

/// Evaluate every predicate of the query for one issue and combine them.
fn query_matches(query: &Query, issue: &Issue, now: DateTime<Utc>) -> bool {
    if query.is_match_all() {
        return true;
    }

    let mut results: Vec<bool> = Vec::with_capacity(
        query.filters.len() + query.date_filters.len() + usize::from(query.text.is_some()),
    );

    for (field, expected) in &query.filters {
        let hit = expected.matches(field_values(*field, issue));
        results.push(hit != query.is_negated(Field::Value(*field)));
    }

    for (field, filter) in &query.date_filters {
        let hit = timestamp(*field, issue).is_some_and(|ts| filter.matches(ts, now));
        results.push(hit != query.is_negated(Field::Date(*field)));
    }

    if let Some(text) = &query.text {
        results.push(text_matches(text, issue));
    }

    match query.bool_op {
        BoolOp::And => results.iter().all(|&r| r),
        BoolOp::Or => results.iter().any(|&r| r),
    }
}

/// The issue's values for a field, as compared by filters.
fn field_values<'a>(field: ValueField, issue: &'a Issue) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match field {
        ValueField::Type => Box::new(std::iter::once(issue.issue_type.as_str())),
        ValueField::Status => Box::new(std::iter::once(issue.status.as_str())),
        ValueField::Priority => Box::new(std::iter::once(issue.priority.as_str())),
        ValueField::Assignee => Box::new(issue.assignee.as_deref().into_iter()),
        ValueField::Branch => Box::new(issue.branch.as_deref().into_iter()),
        ValueField::Labels => Box::new(issue.labels.iter().map(String::as_str)),
    }
}

fn timestamp(field: DateField, issue: &Issue) -> Option<DateTime<Utc>> {
    match field {
        DateField::Created => Some(issue.created_at),
        DateField::Updated => Some(issue.updated_at),
        DateField::Closed => issue.closed_at,
    }
}

/// Case-insensitive substring match on title and description.
fn text_matches(text: &str, issue: &Issue) -> bool {
    let needle = text.to_lowercase();
    let haystack = match &issue.description {
        Some(desc) => format!("{} {}", issue.title, desc),
        None => issue.title.clone(),
    };
    haystack.to_lowercase().contains(&needle)
}

/// Ascending order for a sort key. Unset optional values sort first.
fn compare_by(key: SortKey, a: &Issue, b: &Issue) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Type => a.issue_type.as_str().cmp(b.issue_type.as_str()),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Priority => a.priority.cmp(&b.priority),
        SortKey::Assignee => a.assignee.cmp(&b.assignee),
        SortKey::Branch => a.branch.cmp(&b.branch),
        SortKey::Created => a.created_at.cmp(&b.created_at),
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
        SortKey::Closed => a.closed_at.cmp(&b.closed_at),
    }
}

/// Runs queries against a repository with an injected clock.
pub struct SearchService<R, C> {
    repo: R,
    clock: C,
}

impl<R: IssueRepository, C: Clock> SearchService<R, C> {
    pub fn new(repo: R, clock: C) -> Self {
        SearchService { repo, clock }
    }

    /// Load all issues and run the query against them.
    pub fn execute_search(&self, query: &Query) -> Result<SearchResult> {
        let issues = self.repo.list_all()?;
        Ok(execute(query, &issues, self.clock.now()))
    }

    /// Load all issues and run the query, truncating to `limit` instead.
    pub fn execute_search_with_limit(&self, query: &Query, limit: usize) -> Result<SearchResult> {
        let issues = self.repo.list_all()?;
        Ok(execute_with_limit(query, &issues, self.clock.now(), limit))
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
