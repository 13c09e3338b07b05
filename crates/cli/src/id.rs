// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue identifiers.
//!
//! IDs look like `proj-1a2b3c4d`: the project prefix followed by the first
//! eight hex digits of a SHA-256 over the title and creation time.

use std::path::Path;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Generate an issue ID from prefix, title, and timestamp.
pub fn generate_id(prefix: &str, title: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", title, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    format!("{}-{}", prefix, hex::encode(&hash[..4]))
}

/// Generate an ID that `exists` reports as free.
///
/// Collisions get a numeric suffix (`-2`, `-3`, ...).
pub fn generate_unique_id<F>(
    prefix: &str,
    title: &str,
    created_at: &DateTime<Utc>,
    exists: F,
) -> Result<String>
where
    F: Fn(&str) -> Result<bool>,
{
    let base_id = generate_id(prefix, title, created_at);
    if !exists(&base_id)? {
        return Ok(base_id);
    }

    let mut suffix = 2u32;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id)? {
            return Ok(id);
        }
        suffix = suffix.saturating_add(1);
    }
}

/// Validate that a prefix is 2+ lowercase alphanumeric with at least one letter.
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_lowercase())
}

/// Derive a prefix from a directory name, e.g. `My-App2` → `myapp2`.
///
/// # Errors
///
/// Returns [`Error::InvalidPrefix`] if the name has fewer than two usable
/// characters or no letters.
pub fn derive_prefix(dir: &Path) -> Result<String> {
    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(Error::InvalidPrefix)?;

    let prefix: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if validate_prefix(&prefix) {
        Ok(prefix)
    } else {
        Err(Error::InvalidPrefix)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
