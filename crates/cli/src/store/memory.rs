// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::cell::RefCell;
use std::collections::BTreeMap;

use tix_core::Issue;

use super::IssueRepository;
use crate::error::{Error, Result};

/// Issues held in memory, keyed by ID.
#[derive(Debug, Default)]
pub struct MemoryStore {
    issues: RefCell<BTreeMap<String, Issue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `issues`. Later duplicates replace earlier ones.
    pub fn with_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let map = issues.into_iter().map(|i| (i.id.clone(), i)).collect();
        MemoryStore {
            issues: RefCell::new(map),
        }
    }
}

impl IssueRepository for MemoryStore {
    fn list_all(&self) -> Result<Vec<Issue>> {
        Ok(self.issues.borrow().values().cloned().collect())
    }

    fn get_exact(&self, id: &str) -> Result<Issue> {
        self.issues
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.issues.borrow().contains_key(id))
    }

    fn create(&self, issue: &Issue) -> Result<()> {
        let mut issues = self.issues.borrow_mut();
        if issues.contains_key(&issue.id) {
            return Err(Error::IssueExists(issue.id.clone()));
        }
        issues.insert(issue.id.clone(), issue.clone());
        Ok(())
    }

    fn update(&self, issue: &Issue) -> Result<()> {
        let mut issues = self.issues.borrow_mut();
        match issues.get_mut(&issue.id) {
            Some(slot) => {
                *slot = issue.clone();
                Ok(())
            }
            None => Err(Error::IssueNotFound(issue.id.clone())),
        }
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
