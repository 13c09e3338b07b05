// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.tix/config.toml` and includes:
//! - `prefix`: the project-specific prefix for issue IDs (e.g., "proj" → "proj-a1b2c3d4")
//! - `[git]`: base branch and issue branch naming
//! - `[searches]`: saved queries, name → raw query string

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::id::validate_prefix;

const WORK_DIR_NAME: &str = ".tix";
const CONFIG_FILE_NAME: &str = "config.toml";
const ISSUES_DIR_NAME: &str = "issues";

/// Project configuration stored in `.tix/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Project-specific prefix for issue IDs (2+ lowercase alphanumeric with at least one letter).
    pub prefix: String,
    #[serde(default)]
    pub git: GitConfig,
    /// Saved queries. Values are raw query strings, stored as written.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub searches: BTreeMap<String, String>,
}

/// Git integration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Branch that issue branches are cut from and merged back into.
    #[serde(default = "default_base_branch")]
    pub base_branch: String,
    /// Prepended to an issue ID to name its branch.
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,
}

fn default_base_branch() -> String {
    "main".to_string()
}

fn default_branch_prefix() -> String {
    "issue/".to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            base_branch: default_base_branch(),
            branch_prefix: default_branch_prefix(),
        }
    }
}

impl GitConfig {
    /// Branch name for an issue, e.g. `issue/proj-a1b2c3d4`.
    pub fn branch_for(&self, id: &str) -> String {
        format!("{}{}", self.branch_prefix, id)
    }

    /// The issue ID a branch belongs to, if it follows the naming scheme.
    pub fn issue_for_branch<'a>(&self, branch: &'a str) -> Option<&'a str> {
        branch
            .strip_prefix(self.branch_prefix.as_str())
            .filter(|id| !id.is_empty())
    }
}

impl Config {
    /// Creates a new config with the given prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if prefix is not 2+ lowercase alphanumeric with at least one letter.
    pub fn new(prefix: String) -> Result<Self> {
        if !validate_prefix(&prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(Config {
            prefix,
            git: GitConfig::default(),
            searches: BTreeMap::new(),
        })
    }

    /// Loads configuration from the given `.tix/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.tix/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Load/save access to the project configuration.
///
/// Saved queries go through this seam so they can be tested without a
/// filesystem.
pub trait ConfigStore {
    fn load(&self) -> Result<Config>;
    fn save(&self, config: &Config) -> Result<()>;
}

/// Config stored in `.tix/config.toml`.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    work_dir: PathBuf,
}

impl FileConfigStore {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        FileConfigStore {
            work_dir: work_dir.into(),
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config> {
        Config::load(&self.work_dir)
    }

    fn save(&self, config: &Config) -> Result<()> {
        config.save(&self.work_dir)
    }
}

/// Config held in memory.
#[derive(Debug)]
pub struct MemoryConfigStore {
    config: RefCell<Config>,
}

impl MemoryConfigStore {
    pub fn new(config: Config) -> Self {
        MemoryConfigStore {
            config: RefCell::new(config),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Config> {
        Ok(self.config.borrow().clone())
    }

    fn save(&self, config: &Config) -> Result<()> {
        *self.config.borrow_mut() = config.clone();
        Ok(())
    }
}

impl<S: ConfigStore> ConfigStore for &S {
    fn load(&self) -> Result<Config> {
        (*self).load()
    }

    fn save(&self, config: &Config) -> Result<()> {
        (*self).save(config)
    }
}

/// Find the `.tix` directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the `.tix` directory by walking up from `start`.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Directory holding one JSON file per issue.
pub fn issues_dir(work_dir: &Path) -> PathBuf {
    work_dir.join(ISSUES_DIR_NAME)
}

/// Initialize a new `.tix` directory at the given path.
///
/// An existing `.tix` directory without a config file is reused.
pub fn init_work_dir(path: &Path, prefix: &str) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    let config = Config::new(prefix.to_string())?;
    fs::create_dir_all(issues_dir(&work_dir))?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
