// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tix_core::Issue;
use tracing::debug;

use super::IssueRepository;
use crate::error::{Error, Result};

const ISSUE_EXT: &str = "json";

/// Issues stored as `<dir>/<id>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir` (usually `.tix/issues`).
    ///
    /// The directory is created if missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{ISSUE_EXT}"))
    }

    fn write(&self, issue: &Issue) -> Result<()> {
        let json = issue.to_json()?;
        let mut file = File::create(self.path_for(&issue.id))?;
        writeln!(file, "{json}")?;
        file.sync_all()?;
        Ok(())
    }
}

fn read_issue(path: &Path) -> Result<Issue> {
    let content = fs::read_to_string(path)?;
    Issue::from_json(&content)
        .map_err(|e| Error::CorruptedData(format!("{}: {}", path.display(), e)))
}

/// Reject IDs that would escape the store directory.
fn check_id(id: &str) -> Result<()> {
    if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
        return Err(Error::IssueNotFound(id.to_string()));
    }
    Ok(())
}

impl IssueRepository for FileStore {
    fn list_all(&self) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ISSUE_EXT) {
                continue;
            }
            issues.push(read_issue(&path)?);
        }
        issues.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(count = issues.len(), dir = %self.dir.display(), "loaded issues");
        Ok(issues)
    }

    fn get_exact(&self, id: &str) -> Result<Issue> {
        check_id(id)?;
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(Error::IssueNotFound(id.to_string()));
        }
        read_issue(&path)
    }

    fn exists(&self, id: &str) -> Result<bool> {
        if check_id(id).is_err() {
            return Ok(false);
        }
        Ok(self.path_for(id).is_file())
    }

    fn create(&self, issue: &Issue) -> Result<()> {
        check_id(&issue.id)?;
        if self.exists(&issue.id)? {
            return Err(Error::IssueExists(issue.id.clone()));
        }
        self.write(issue)?;
        debug!(id = %issue.id, "created issue");
        Ok(())
    }

    fn update(&self, issue: &Issue) -> Result<()> {
        if !self.exists(&issue.id)? {
            return Err(Error::IssueNotFound(issue.id.clone()));
        }
        self.write(issue)?;
        debug!(id = %issue.id, "updated issue");
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
