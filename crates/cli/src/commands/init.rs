// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::init_work_dir;
use crate::error::Result;
use crate::id::derive_prefix;

pub fn run(prefix: Option<String>) -> Result<()> {
    let target = std::env::current_dir()?;
    let (work_dir, prefix) = run_impl(&target, prefix)?;
    println!("Initialized tix in {}", work_dir.display());
    println!("Prefix: {}", prefix);
    Ok(())
}

/// Create `.tix/` under `target`. Without an explicit prefix one is derived
/// from the directory name.
pub(crate) fn run_impl(target: &Path, prefix: Option<String>) -> Result<(PathBuf, String)> {
    let prefix = match prefix {
        Some(p) => p,
        None => derive_prefix(target)?,
    };
    let work_dir = init_work_dir(target, &prefix)?;
    info!(prefix = prefix.as_str(), path = %work_dir.display(), "initialized");
    Ok((work_dir, prefix))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
