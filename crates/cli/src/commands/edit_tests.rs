// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use yare::parameterized;

fn setup() -> TestContext {
    let ctx = TestContext::new();
    ctx.create_issue("tx-1", IssueType::Task, "Original");
    ctx
}

#[test]
fn edit_title_updates_timestamp() {
    let ctx = setup();
    let before = ctx.get("tx-1").updated_at;

    run_impl(&ctx.store, &ctx.clock, "tx-1", "title", "  New title ").unwrap();

    let issue = ctx.get("tx-1");
    assert_eq!(issue.title, "New title");
    assert!(issue.updated_at > before);
    assert_eq!(issue.updated_at, TestContext::now());
}

#[test]
fn edit_type_and_priority() {
    let ctx = setup();
    run_impl(&ctx.store, &ctx.clock, "tx-1", "type", "bug").unwrap();
    run_impl(&ctx.store, &ctx.clock, "tx-1", "Priority", "critical").unwrap();

    let issue = ctx.get("tx-1");
    assert_eq!(issue.issue_type, IssueType::Bug);
    assert_eq!(issue.priority, Priority::Critical);
}

#[test]
fn edit_description_blank_clears() {
    let ctx = setup();
    run_impl(&ctx.store, &ctx.clock, "tx-1", "description", "Details").unwrap();
    assert_eq!(ctx.get("tx-1").description.as_deref(), Some("Details"));

    run_impl(&ctx.store, &ctx.clock, "tx-1", "description", "").unwrap();
    assert_eq!(ctx.get("tx-1").description, None);
}

#[parameterized(
    set = { "ada", Some("ada") },
    none = { "none", None },
    dash = { "-", None },
    blank = { " ", None },
)]
fn edit_assignee(value: &str, expected: Option<&str>) {
    let ctx = setup();
    run_impl(&ctx.store, &ctx.clock, "tx-1", "assignee", "grace").unwrap();
    run_impl(&ctx.store, &ctx.clock, "tx-1", "assignee", value).unwrap();
    assert_eq!(ctx.get("tx-1").assignee.as_deref(), expected);
}

#[test]
fn empty_title_rejected() {
    let ctx = setup();
    let result = run_impl(&ctx.store, &ctx.clock, "tx-1", "title", " ");
    assert!(matches!(result, Err(Error::FieldEmpty { field: "title" })));
    assert_eq!(ctx.get("tx-1").title, "Original");
}

#[test]
fn unknown_attribute_rejected() {
    let ctx = setup();
    let result = run_impl(&ctx.store, &ctx.clock, "tx-1", "status", "closed");
    assert!(matches!(result, Err(Error::UnknownAttribute { attr }) if attr == "status"));
}

#[test]
fn invalid_value_leaves_issue_unchanged() {
    let ctx = setup();
    let before = ctx.get("tx-1");
    assert!(run_impl(&ctx.store, &ctx.clock, "tx-1", "priority", "p0").is_err());
    assert_eq!(ctx.get("tx-1"), before);
}
