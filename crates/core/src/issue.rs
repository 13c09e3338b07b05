// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the tix issue tracker.
//!
//! This module contains the fundamental data types: Issue, IssueType, Status
//! and Priority.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of issues by their nature and scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Defect or problem to fix.
    Bug,
    /// New user-facing capability.
    Feature,
    /// Standard unit of work.
    #[default]
    Task,
    /// Maintenance work (refactoring, cleanup, dependency updates).
    Chore,
    /// Cross-cutting initiative spanning several issues.
    Epic,
}

impl IssueType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Bug => "bug",
            IssueType::Feature => "feature",
            IssueType::Task => "task",
            IssueType::Chore => "chore",
            IssueType::Epic => "epic",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bug" => Ok(IssueType::Bug),
            "feature" => Ok(IssueType::Feature),
            "task" => Ok(IssueType::Task),
            "chore" => Ok(IssueType::Chore),
            "epic" => Ok(IssueType::Epic),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// Workflow status of an issue.
///
/// Variants are declared in workflow order, which is also the sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet started. Initial state for new issues.
    #[default]
    Open,
    /// Currently being worked on, usually on its own branch.
    InProgress,
    /// Finished or abandoned.
    Closed,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Closed => "closed",
        }
    }

    /// Check if a transition from this status to target is valid.
    pub fn can_transition_to(&self, target: Status) -> bool {
        matches!(
            (self, target),
            (Status::Open, Status::InProgress)
                | (Status::Open, Status::Closed)
                | (Status::InProgress, Status::Open)
                | (Status::InProgress, Status::Closed)
                | (Status::Closed, Status::Open)
        )
    }

    /// Get valid transition targets as a formatted string.
    pub fn valid_targets(&self) -> String {
        match self {
            Status::Open => "in_progress, closed".to_string(),
            Status::InProgress => "open, closed".to_string(),
            Status::Closed => "open".to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in_progress" => Ok(Status::InProgress),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// How urgent an issue is. Ordered from least to most urgent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// The primary entity representing a tracked work item.
///
/// Each issue is persisted as its own JSON document, so field names here are
/// the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier (format: `{prefix}-{hash}`).
    pub id: String,
    /// Classification of the issue.
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// Short description of the work.
    pub title: String,
    /// Longer description providing context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current workflow state.
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    /// Person this issue is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Git branch where the work happens, once one has been created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
    /// When the issue was closed. None while the issue is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Creates a new open issue with default priority and no labels.
    pub fn new(id: String, issue_type: IssueType, title: String, created_at: DateTime<Utc>) -> Self {
        Issue {
            id,
            issue_type,
            title,
            description: None,
            status: Status::Open,
            priority: Priority::default(),
            assignee: None,
            branch: None,
            labels: Vec::new(),
            created_at,
            updated_at: created_at,
            closed_at: None,
        }
    }

    /// Moves the issue to `target`, maintaining `closed_at` and `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the workflow forbids the move.
    pub fn transition(&mut self, target: Status, at: DateTime<Utc>) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(Error::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
                valid_targets: self.status.valid_targets(),
            });
        }
        self.status = target;
        self.closed_at = match target {
            Status::Closed => Some(at),
            Status::Open | Status::InProgress => None,
        };
        self.updated_at = at;
        Ok(())
    }

    /// Adds a label if not already present. Returns false if it was a no-op.
    pub fn add_label(&mut self, label: &str, at: DateTime<Utc>) -> bool {
        if self.labels.iter().any(|l| l == label) {
            return false;
        }
        self.labels.push(label.to_string());
        self.updated_at = at;
        true
    }

    /// Removes a label. Returns false if the issue did not carry it.
    pub fn remove_label(&mut self, label: &str, at: DateTime<Utc>) -> bool {
        let before = self.labels.len();
        self.labels.retain(|l| l != label);
        if self.labels.len() == before {
            return false;
        }
        self.updated_at = at;
        true
    }

    /// Parses an issue from its stored JSON form.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serializes the issue into its stored JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
