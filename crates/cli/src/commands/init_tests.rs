// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::config::Config;
use crate::error::Error;
use tempfile::TempDir;

#[test]
fn explicit_prefix_is_used() {
    let temp = TempDir::new().unwrap();
    let (work_dir, prefix) = run_impl(temp.path(), Some("proj".to_string())).unwrap();

    assert_eq!(prefix, "proj");
    assert_eq!(work_dir, temp.path().join(".tix"));
    assert!(work_dir.join("issues").is_dir());
    assert_eq!(Config::load(&work_dir).unwrap().prefix, "proj");
}

#[test]
fn prefix_derived_from_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("My-App2");
    std::fs::create_dir(&dir).unwrap();

    let (_, prefix) = run_impl(&dir, None).unwrap();
    assert_eq!(prefix, "myapp2");
}

#[test]
fn invalid_prefix_rejected() {
    let temp = TempDir::new().unwrap();
    let result = run_impl(temp.path(), Some("My-Proj".to_string()));
    assert!(matches!(result, Err(Error::InvalidPrefix)));
    assert!(!temp.path().join(".tix").join("config.toml").exists());
}

#[test]
fn second_init_fails() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), Some("proj".to_string())).unwrap();
    let result = run_impl(temp.path(), Some("other".to_string()));
    assert!(matches!(result, Err(Error::AlreadyInitialized(_))));
}
