// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    issue_type = { Error::InvalidIssueType("story".into()), "story" },
    status = { Error::InvalidStatus("done".into()), "open, in_progress, closed" },
    priority = { Error::InvalidPriority("urgent".into()), "urgent" },
    corrupted = { Error::CorruptedData("bad file".into()), "bad file" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_invalid_transition_display() {
    let err = Error::InvalidTransition {
        from: "closed".into(),
        to: "in_progress".into(),
        valid_targets: "open".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("closed"));
    assert!(msg.contains("in_progress"));
    assert!(msg.contains("hint"));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(err.to_string().starts_with("json error"));
}
