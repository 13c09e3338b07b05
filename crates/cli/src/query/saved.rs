// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named queries kept in the project config.
//!
//! Only the raw string is stored. Running a saved query parses it again, so
//! relative dates re-resolve on every run.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ConfigStore;
use crate::error::{Error, Result};

/// Saved-query access on top of a [`ConfigStore`].
pub struct SavedQueries<S> {
    store: S,
}

impl<S: ConfigStore> SavedQueries<S> {
    pub fn new(store: S) -> Self {
        SavedQueries { store }
    }

    /// Store `raw` under `name`, replacing any previous query of that name.
    pub fn save(&self, name: &str, raw: &str) -> Result<()> {
        validate_name(name)?;
        let mut config = self.store.load()?;
        config.searches.insert(name.to_string(), raw.to_string());
        self.store.save(&config)?;
        debug!(name, "saved query stored");
        Ok(())
    }

    /// The raw query string saved under `name`.
    pub fn load(&self, name: &str) -> Result<String> {
        let mut config = self.store.load()?;
        config
            .searches
            .remove(name)
            .ok_or_else(|| Error::SavedQueryNotFound {
                name: name.to_string(),
            })
    }

    /// All saved queries, ordered by name.
    pub fn list(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.store.load()?.searches)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let mut config = self.store.load()?;
        if config.searches.remove(name).is_none() {
            return Err(Error::SavedQueryNotFound {
                name: name.to_string(),
            });
        }
        self.store.save(&config)?;
        debug!(name, "saved query deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidQueryName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "saved_tests.rs"]
mod tests;
