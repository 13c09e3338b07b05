// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue persistence.
//!
//! [`FileStore`] keeps one JSON document per issue under `.tix/issues/`.
//! [`MemoryStore`] holds issues in memory for tests and benches.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use tix_core::Issue;

use crate::error::{Error, Result};

/// Storage for issues.
pub trait IssueRepository {
    /// All issues, sorted by ID.
    fn list_all(&self) -> Result<Vec<Issue>>;

    /// The issue with exactly this ID.
    fn get_exact(&self, id: &str) -> Result<Issue>;

    fn exists(&self, id: &str) -> Result<bool>;

    /// Store a new issue. Fails if the ID is taken.
    fn create(&self, issue: &Issue) -> Result<()>;

    /// Replace an existing issue.
    fn update(&self, issue: &Issue) -> Result<()>;

    /// Resolve a full ID or a unique prefix of one.
    ///
    /// # Errors
    ///
    /// [`Error::IssueNotFound`] if nothing matches, [`Error::AmbiguousId`]
    /// if several issues share the prefix.
    fn resolve_id(&self, partial_id: &str) -> Result<String> {
        if partial_id.is_empty() {
            return Err(Error::IssueNotFound(String::new()));
        }
        if self.exists(partial_id)? {
            return Ok(partial_id.to_string());
        }

        let matches: Vec<String> = self
            .list_all()?
            .into_iter()
            .map(|issue| issue.id)
            .filter(|id| id.starts_with(partial_id))
            .collect();

        match matches.as_slice() {
            [] => Err(Error::IssueNotFound(partial_id.to_string())),
            [only] => Ok(only.clone()),
            _ => Err(Error::AmbiguousId {
                prefix: partial_id.to_string(),
                matches,
            }),
        }
    }

    /// Look up an issue by full ID or unique prefix.
    fn get(&self, partial_id: &str) -> Result<Issue> {
        let id = self.resolve_id(partial_id)?;
        self.get_exact(&id)
    }
}

impl<R: IssueRepository + ?Sized> IssueRepository for &R {
    fn list_all(&self) -> Result<Vec<Issue>> {
        (**self).list_all()
    }

    fn get_exact(&self, id: &str) -> Result<Issue> {
        (**self).get_exact(id)
    }

    fn exists(&self, id: &str) -> Result<bool> {
        (**self).exists(id)
    }

    fn create(&self, issue: &Issue) -> Result<()> {
        (**self).create(issue)
    }

    fn update(&self, issue: &Issue) -> Result<()> {
        (**self).update(issue)
    }

    fn resolve_id(&self, partial_id: &str) -> Result<String> {
        (**self).resolve_id(partial_id)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
