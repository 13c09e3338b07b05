// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;
use tix_core::IssueType;

fn setup() -> TestContext {
    let ctx = TestContext::new();
    ctx.create_issue("tx-1", IssueType::Task, "Work");
    ctx
}

#[test]
fn start_then_close_sets_closed_at() {
    let ctx = setup();

    let started = transition_impl(&ctx.store, &ctx.clock, "tx-1", Status::InProgress).unwrap();
    assert_eq!(started.status, Status::InProgress);
    assert_eq!(started.closed_at, None);

    transition_impl(&ctx.store, &ctx.clock, "tx-1", Status::Closed).unwrap();
    let issue = ctx.get("tx-1");
    assert_eq!(issue.status, Status::Closed);
    assert_eq!(issue.closed_at, Some(TestContext::now()));
    assert_eq!(issue.updated_at, TestContext::now());
}

#[test]
fn reopen_clears_closed_at() {
    let ctx = setup();
    transition_impl(&ctx.store, &ctx.clock, "tx-1", Status::Closed).unwrap();
    transition_impl(&ctx.store, &ctx.clock, "tx-1", Status::Open).unwrap();

    let issue = ctx.get("tx-1");
    assert_eq!(issue.status, Status::Open);
    assert_eq!(issue.closed_at, None);
}

#[test]
fn closed_cannot_start() {
    let ctx = setup();
    transition_impl(&ctx.store, &ctx.clock, "tx-1", Status::Closed).unwrap();

    let err = transition_impl(&ctx.store, &ctx.clock, "tx-1", Status::InProgress).unwrap_err();
    match err {
        Error::InvalidTransition {
            from,
            to,
            valid_targets,
        } => {
            assert_eq!(from, "closed");
            assert_eq!(to, "in_progress");
            assert_eq!(valid_targets, "open");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
    assert_eq!(ctx.get("tx-1").status, Status::Closed);
}

#[test]
fn self_transition_rejected() {
    let ctx = setup();
    assert!(matches!(
        transition_impl(&ctx.store, &ctx.clock, "tx-1", Status::Open),
        Err(Error::InvalidTransition { .. })
    ));
}

#[test]
fn missing_issue() {
    let ctx = setup();
    assert!(matches!(
        transition_impl(&ctx.store, &ctx.clock, "tx-9", Status::Closed),
        Err(Error::IssueNotFound(_))
    ));
}
