// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `tix` binary with color and logging environment cleared.
pub fn tix() -> Command {
    let mut cmd = cargo_bin_cmd!("tix");
    cmd.env_remove("COLOR")
        .env_remove("TIX_LOG")
        .env_remove("TIX_TIMINGS");
    cmd
}

/// An initialized temp directory with prefix `tx`.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    tix()
        .args(["init", "--prefix", "tx"])
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Run `tix` in `temp` and return stdout, asserting success.
pub fn run_ok(temp: &TempDir, args: &[&str]) -> String {
    let output = tix().args(args).current_dir(temp.path()).output().unwrap();
    assert!(
        output.status.success(),
        "tix {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Create an issue and return its ID.
pub fn create_issue(temp: &TempDir, args: &[&str]) -> String {
    let mut full = vec!["new"];
    full.extend_from_slice(args);
    full.extend_from_slice(&["-o", "ids"]);
    run_ok(temp, &full).trim().to_string()
}

/// Output lines that are issue IDs, in order.
pub fn ids(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
