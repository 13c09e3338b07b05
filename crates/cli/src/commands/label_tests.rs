// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use tix_core::IssueType;

fn setup() -> TestContext {
    let ctx = TestContext::new();
    ctx.create_issue("tx-1", IssueType::Task, "Work");
    ctx
}

#[test]
fn add_label() {
    let ctx = setup();
    let (id, changed) = add_impl(&ctx.store, &ctx.clock, "tx", " urgent ").unwrap();

    assert_eq!(id, "tx-1");
    assert!(changed);
    let issue = ctx.get("tx-1");
    assert_eq!(issue.labels, vec!["urgent"]);
    assert_eq!(issue.updated_at, TestContext::now());
}

#[test]
fn add_existing_label_is_noop() {
    let ctx = setup();
    add_impl(&ctx.store, &ctx.clock, "tx-1", "urgent").unwrap();
    let (_, changed) = add_impl(&ctx.store, &ctx.clock, "tx-1", "urgent").unwrap();

    assert!(!changed);
    assert_eq!(ctx.get("tx-1").labels, vec!["urgent"]);
}

#[test]
fn remove_label() {
    let ctx = setup();
    add_impl(&ctx.store, &ctx.clock, "tx-1", "a").unwrap();
    add_impl(&ctx.store, &ctx.clock, "tx-1", "b").unwrap();

    let (_, changed) = remove_impl(&ctx.store, &ctx.clock, "tx-1", "a").unwrap();
    assert!(changed);
    assert_eq!(ctx.get("tx-1").labels, vec!["b"]);

    let (_, changed) = remove_impl(&ctx.store, &ctx.clock, "tx-1", "a").unwrap();
    assert!(!changed);
}

#[test]
fn unchanged_issue_keeps_timestamp() {
    let ctx = setup();
    let before = ctx.get("tx-1").updated_at;
    remove_impl(&ctx.store, &ctx.clock, "tx-1", "missing").unwrap();
    assert_eq!(ctx.get("tx-1").updated_at, before);
}

#[test]
fn blank_label_rejected() {
    let ctx = setup();
    assert!(matches!(
        add_impl(&ctx.store, &ctx.clock, "tx-1", "  "),
        Err(Error::FieldEmpty { field: "label" })
    ));
}
