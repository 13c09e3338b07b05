// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thin wrapper over the `git` command line.
//!
//! Every operation shells out to `git` in the repository directory. A failing
//! command becomes [`Error::Git`] carrying git's stderr.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Identity for merge commits when git has none configured.
const FALLBACK_IDENTITY: [(&str, &str); 2] =
    [("user.name", "tix"), ("user.email", "tix@localhost")];

/// A git working tree.
#[derive(Debug, Clone)]
pub struct Git {
    dir: PathBuf,
}

/// One entry of `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Two-character status code, e.g. ` M`, `A `, `??`.
    pub code: String,
    /// Path relative to the repository root. For renames, the new path.
    pub path: String,
}

impl FileChange {
    pub fn is_untracked(&self) -> bool {
        self.code == "??"
    }
}

impl Git {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Git { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns true if the directory is inside a git work tree.
    pub fn is_repo(&self) -> bool {
        matches!(
            git_output(&self.dir, &[], &["rev-parse", "--is-inside-work-tree"]),
            Ok(output) if output.status.success()
        )
    }

    /// Fails with [`Error::NotAGitRepo`] outside a work tree.
    pub fn ensure_repo(&self) -> Result<()> {
        if self.is_repo() {
            Ok(())
        } else {
            Err(Error::NotAGitRepo(self.dir.display().to_string()))
        }
    }

    /// Name of the checked-out branch. Works before the first commit.
    pub fn current_branch(&self) -> Result<String> {
        let output = run_git(&self.dir, &["symbolic-ref", "--short", "HEAD"])?;
        Ok(output.trim().to_string())
    }

    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        let reference = format!("refs/heads/{name}");
        let output = git_output(
            &self.dir,
            &[],
            &["show-ref", "--verify", "--quiet", reference.as_str()],
        )?;
        Ok(output.status.success())
    }

    /// Create `name` pointing at `start_point` without checking it out.
    pub fn create_branch(&self, name: &str, start_point: &str) -> Result<()> {
        run_git(&self.dir, &["branch", name, start_point])?;
        info!(branch = name, from = start_point, "created branch");
        Ok(())
    }

    pub fn checkout(&self, name: &str) -> Result<()> {
        run_git(&self.dir, &["checkout", "--quiet", name])?;
        info!(branch = name, "checked out branch");
        Ok(())
    }

    /// Merge `branch` into the current branch, always creating a merge commit.
    ///
    /// The user's configured identity authors the commit. `tix` fills in
    /// only the keys git has no value for.
    pub fn merge(&self, branch: &str, message: &str) -> Result<()> {
        let fallback = self.missing_identity()?;
        run_git_with(
            &self.dir,
            &fallback,
            &["merge", "--no-ff", "-m", message, branch],
        )?;
        info!(branch, "merged branch");
        Ok(())
    }

    /// Identity keys unset in every git config scope, paired with the
    /// values `tix` commits under instead.
    fn missing_identity(&self) -> Result<Vec<(&'static str, &'static str)>> {
        let mut missing = Vec::new();
        for (key, value) in FALLBACK_IDENTITY {
            let output = git_output(&self.dir, &[], &["config", "--get", key])?;
            if !output.status.success() || output.stdout.trim_ascii().is_empty() {
                missing.push((key, value));
            }
        }
        Ok(missing)
    }

    /// Working tree changes.
    pub fn status(&self) -> Result<Vec<FileChange>> {
        let output = run_git(&self.dir, &["status", "--porcelain"])?;
        Ok(parse_status(&output))
    }
}

/// Parse `git status --porcelain` (v1) output.
pub fn parse_status(output: &str) -> Vec<FileChange> {
    output
        .lines()
        .filter(|line| line.len() > 3)
        .filter_map(|line| {
            let code = line.get(..2)?;
            let rest = line.get(3..)?;
            let path = match rest.split_once(" -> ") {
                Some((_, to)) => to,
                None => rest,
            };
            Some(FileChange {
                code: code.to_string(),
                path: unquote(path).to_string(),
            })
        })
        .collect()
}

/// Strip the quotes git adds around paths with special characters.
fn unquote(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path)
}

fn git_output(dir: &Path, config: &[(&str, &str)], args: &[&str]) -> Result<Output> {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for (key, value) in config {
        cmd.arg("-c").arg(format!("{key}={value}"));
    }
    cmd.args(args);
    debug!(?args, "running git");
    Ok(cmd.output()?)
}

/// Runs a git command in the given directory, returning stdout.
fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    run_git_with(dir, &[], args)
}

/// Like [`run_git`], with `-c key=value` overrides for this invocation.
fn run_git_with(dir: &Path, config: &[(&str, &str)], args: &[&str]) -> Result<String> {
    let output = git_output(dir, config, args)?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(Error::Git {
            command: args.first().copied().unwrap_or_default().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
