// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{TimeZone, Utc};
use tix_core::IssueType;

fn store_with(ids: &[&str]) -> MemoryStore {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    MemoryStore::with_issues(
        ids.iter()
            .map(|id| Issue::new(id.to_string(), IssueType::Task, format!("Issue {id}"), created)),
    )
}

#[test]
fn resolve_id_exact_match() {
    let store = store_with(&["tx-abc12345", "tx-abc12345-2"]);
    // An exact ID wins even when it is also a prefix of another
    assert_eq!(store.resolve_id("tx-abc12345").unwrap(), "tx-abc12345");
}

#[test]
fn resolve_id_prefix_match() {
    let store = store_with(&["tx-abc12345", "tx-def67890"]);
    assert_eq!(store.resolve_id("tx-abc").unwrap(), "tx-abc12345");
}

#[test]
fn resolve_id_ambiguous() {
    let store = store_with(&["tx-abc12345", "tx-abc67890"]);
    let result = store.resolve_id("tx-abc");

    if let Err(Error::AmbiguousId { prefix, matches }) = result {
        assert_eq!(prefix, "tx-abc");
        assert_eq!(matches, vec!["tx-abc12345", "tx-abc67890"]);
    } else {
        panic!("expected AmbiguousId, got {result:?}");
    }
}

#[test]
fn resolve_id_not_found() {
    let store = store_with(&["tx-abc12345"]);
    assert!(matches!(
        store.resolve_id("tx-zzz"),
        Err(Error::IssueNotFound(id)) if id == "tx-zzz"
    ));
}

#[test]
fn resolve_id_empty_is_not_found() {
    let store = store_with(&["tx-abc12345"]);
    assert!(matches!(store.resolve_id(""), Err(Error::IssueNotFound(_))));
}

#[test]
fn get_resolves_prefix() {
    let store = store_with(&["tx-abc12345"]);
    assert_eq!(store.get("tx-a").unwrap().title, "Issue tx-abc12345");
}

#[test]
fn reference_forwards_to_store() {
    let store = store_with(&["tx-1"]);
    let by_ref = &store;
    assert_eq!(IssueRepository::list_all(&by_ref).unwrap().len(), 1);
    assert!(IssueRepository::exists(&by_ref, "tx-1").unwrap());
}
