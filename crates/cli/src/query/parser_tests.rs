// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::query::expr::{CompareOp, DateFilter, DateValue, RelativeSpan, SpanUnit};
use chrono::NaiveDate;
use yare::parameterized;

fn exact(s: &str) -> Expected {
    Expected::Exact(s.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokenizer
// ─────────────────────────────────────────────────────────────────────────────

fn texts(input: &str) -> Vec<(String, bool)> {
    tokenize(input)
        .into_iter()
        .map(|t| (t.text, t.quoted))
        .collect()
}

#[test]
fn tokenize_splits_on_whitespace() {
    assert_eq!(
        texts("type:bug   AND\tlogin"),
        vec![
            ("type:bug".to_string(), false),
            ("AND".to_string(), false),
            ("login".to_string(), false),
        ]
    );
}

#[test]
fn tokenize_quoted_phrase_is_one_token() {
    assert_eq!(
        texts("\"login page\" status:open"),
        vec![
            ("login page".to_string(), true),
            ("status:open".to_string(), false),
        ]
    );
}

#[test]
fn tokenize_quote_inside_token_keeps_field_together() {
    assert_eq!(
        texts("assignee:\"Ada Lovelace\" x"),
        vec![
            ("assignee:Ada Lovelace".to_string(), false),
            ("x".to_string(), false),
        ]
    );
}

#[test]
fn tokenize_unterminated_quote_runs_to_end() {
    assert_eq!(
        texts("bug \"crash on start"),
        vec![
            ("bug".to_string(), false),
            ("crash on start".to_string(), true),
        ]
    );
}

#[parameterized(
    empty = { "" },
    spaces = { "   \t " },
    empty_quotes = { "\"\"" },
    blank_quotes = { "\"   \"" },
)]
fn tokenize_yields_nothing(input: &str) {
    assert!(tokenize(input).is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Empty and text-only queries
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_empty_query_matches_all() {
    let q = parse_query("").unwrap();
    assert!(q.is_match_all());
    assert_eq!(q.bool_op, BoolOp::And);
    assert_eq!(q.limit, 0);
    assert!(q.sort.is_none());
}

#[test]
fn parse_keeps_raw_input() {
    let raw = "  type:bug   \"x y\" ";
    assert_eq!(parse_query(raw).unwrap().raw, raw);
}

#[test]
fn parse_bare_words_join_into_text() {
    let q = parse_query("login crash").unwrap();
    assert_eq!(q.text.as_deref(), Some("login crash"));
    assert!(q.filters.is_empty());
}

#[test]
fn parse_phrase_and_words_keep_input_order() {
    let q = parse_query("alpha \"beta gamma\" delta").unwrap();
    assert_eq!(q.text.as_deref(), Some("alpha beta gamma delta"));
}

#[parameterized(
    url = { "http://example.com" },
    time = { "10:30" },
    dotted = { "a.b:c" },
    leading_colon = { ":foo" },
)]
fn parse_colon_words_that_are_not_fields_are_text(word: &str) {
    let q = parse_query(word).unwrap();
    assert_eq!(q.text.as_deref(), Some(word));
    assert!(q.filters.is_empty());
}

#[test]
fn parse_lowercase_not_is_text() {
    let q = parse_query("not status:closed").unwrap();
    assert_eq!(q.text.as_deref(), Some("not"));
    assert!(!q.is_negated(Field::Value(ValueField::Status)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Field filters
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    type_ = { "type:bug", ValueField::Type, "bug" },
    status = { "status:in_progress", ValueField::Status, "in_progress" },
    priority = { "priority:high", ValueField::Priority, "high" },
    assignee = { "assignee:alice", ValueField::Assignee, "alice" },
    branch = { "branch:issue/tx-1", ValueField::Branch, "issue/tx-1" },
)]
fn parse_value_field(input: &str, field: ValueField, value: &str) {
    let q = parse_query(input).unwrap();
    assert_eq!(q.filters.get(&field), Some(&exact(value)));
    assert!(q.text.is_none());
}

#[parameterized(
    upper_name = { "TYPE:bug" },
    mixed_name = { "Type:bug" },
    upper_value = { "type:BUG" },
)]
fn parse_enum_fields_are_case_normalized(input: &str) {
    let q = parse_query(input).unwrap();
    assert_eq!(q.filters.get(&ValueField::Type), Some(&exact("bug")));
}

#[test]
fn parse_assignee_keeps_case() {
    let q = parse_query("assignee:Alice").unwrap();
    assert_eq!(q.filters.get(&ValueField::Assignee), Some(&exact("Alice")));
}

#[test]
fn parse_quoted_assignee_with_space() {
    let q = parse_query("assignee:\"Ada Lovelace\"").unwrap();
    assert_eq!(
        q.filters.get(&ValueField::Assignee),
        Some(&exact("Ada Lovelace"))
    );
}

#[test]
fn parse_labels_split_on_commas() {
    let q = parse_query("labels:urgent,bug").unwrap();
    assert_eq!(
        q.filters.get(&ValueField::Labels),
        Some(&Expected::AnyOf(vec!["urgent".into(), "bug".into()]))
    );
}

#[test]
fn parse_labels_skip_empty_entries() {
    let q = parse_query("labels:urgent,,bug,").unwrap();
    assert_eq!(
        q.filters.get(&ValueField::Labels),
        Some(&Expected::AnyOf(vec!["urgent".into(), "bug".into()]))
    );
}

#[test]
fn parse_repeated_labels_accumulate() {
    let q = parse_query("labels:a labels:b,a").unwrap();
    assert_eq!(
        q.filters.get(&ValueField::Labels),
        Some(&Expected::AnyOf(vec!["a".into(), "b".into()]))
    );
}

#[test]
fn parse_repeated_field_later_wins() {
    let q = parse_query("status:open status:closed").unwrap();
    assert_eq!(q.filters.get(&ValueField::Status), Some(&exact("closed")));
    assert_eq!(q.filters.len(), 1);
}

#[parameterized(
    status = { "status:", "status" },
    assignee = { "assignee:", "assignee" },
    labels = { "labels:", "labels" },
    labels_commas = { "labels:,,", "labels" },
    created = { "created:", "created" },
    sort = { "sort:", "sort" },
)]
fn parse_missing_value_error(input: &str, field: &str) {
    let err = parse_query(input).unwrap_err();
    match err {
        Error::QueryMissingValue { field: f } => assert_eq!(f, field),
        other => panic!("expected QueryMissingValue, got {other:?}"),
    }
}

#[test]
fn parse_unknown_field_error_names_field() {
    let err = parse_query("type:bug colour:red").unwrap_err();
    match &err {
        Error::QueryUnknownField { field } => assert_eq!(field, "colour"),
        other => panic!("expected QueryUnknownField, got {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("colour"));
    assert!(msg.contains("hint: valid fields are"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Boolean operators
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    and_upper = { "type:bug AND status:open", BoolOp::And },
    and_lower = { "type:bug and status:open", BoolOp::And },
    or_upper = { "type:bug OR status:open", BoolOp::Or },
    or_mixed_case = { "type:bug Or status:open", BoolOp::Or },
    repeated_or = { "type:bug OR status:open OR priority:high", BoolOp::Or },
    implicit = { "type:bug status:open", BoolOp::And },
)]
fn parse_bool_operator(input: &str, expected: BoolOp) {
    let q = parse_query(input).unwrap();
    assert_eq!(q.bool_op, expected);
}

#[parameterized(
    and_then_or = { "type:bug AND status:open OR priority:high" },
    or_then_and = { "type:bug or status:open and priority:high" },
)]
fn parse_mixed_operators_error(input: &str) {
    let err = parse_query(input).unwrap_err();
    assert!(matches!(err, Error::QueryMixedOperators));
}

#[test]
fn parse_operators_are_not_text() {
    let q = parse_query("login AND crash").unwrap();
    assert_eq!(q.text.as_deref(), Some("login crash"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Negation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_not_negates_field() {
    let q = parse_query("NOT status:closed").unwrap();
    assert!(q.is_negated(Field::Value(ValueField::Status)));
    assert_eq!(q.filters.get(&ValueField::Status), Some(&exact("closed")));
}

#[test]
fn parse_not_applies_to_next_field_only() {
    let q = parse_query("NOT status:closed type:bug").unwrap();
    assert!(q.is_negated(Field::Value(ValueField::Status)));
    assert!(!q.is_negated(Field::Value(ValueField::Type)));
}

#[test]
fn parse_not_negates_date_field() {
    let q = parse_query("NOT created:<7d").unwrap();
    assert!(q.is_negated(Field::Date(DateField::Created)));
}

#[test]
fn parse_double_not_cancels() {
    let q = parse_query("NOT NOT status:closed").unwrap();
    assert!(q.negated.is_empty());
    assert_eq!(q, parse_query_ignoring_raw("status:closed", "NOT NOT status:closed"));
}

#[test]
fn parse_triple_not_negates() {
    let q = parse_query("NOT NOT NOT status:closed").unwrap();
    assert!(q.is_negated(Field::Value(ValueField::Status)));
}

#[test]
fn parse_repeated_field_takes_later_negation() {
    let q = parse_query("NOT status:closed status:open").unwrap();
    assert!(!q.is_negated(Field::Value(ValueField::Status)));
}

fn parse_query_ignoring_raw(input: &str, raw: &str) -> Query {
    Query {
        raw: raw.to_string(),
        ..parse_query(input).unwrap()
    }
}

#[parameterized(
    word = { "NOT login", "login" },
    phrase = { "NOT \"login page\"", "\"login page\"" },
    sort = { "NOT sort:id", "sort:id" },
    limit = { "NOT limit:5", "limit:5" },
    operator = { "status:open AND NOT OR type:bug", "OR" },
    trailing = { "status:open NOT", "NOT" },
)]
fn parse_invalid_negation(input: &str, token: &str) {
    let err = parse_query(input).unwrap_err();
    match err {
        Error::QueryInvalidNegation { token: t } => assert_eq!(t, token),
        other => panic!("expected QueryInvalidNegation, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Date filters
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_absolute_date_filter() {
    let q = parse_query("created:>=2024-01-15").unwrap();
    assert_eq!(
        q.date_filters.get(&DateField::Created),
        Some(&DateFilter {
            op: CompareOp::Ge,
            value: DateValue::Absolute(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        })
    );
}

#[test]
fn parse_relative_date_filter() {
    let q = parse_query("updated:<7d").unwrap();
    assert_eq!(
        q.date_filters.get(&DateField::Updated),
        Some(&DateFilter {
            op: CompareOp::Lt,
            value: DateValue::Relative(RelativeSpan {
                amount: 7,
                unit: SpanUnit::Days,
            }),
        })
    );
}

#[test]
fn parse_date_without_operator_defaults_to_eq() {
    let q = parse_query("closed:2024-03-01").unwrap();
    assert_eq!(q.date_filters[&DateField::Closed].op, CompareOp::Eq);
}

#[parameterized(
    garbage = { "created:yesterday" },
    bad_unit = { "updated:<7h" },
    no_number = { "updated:<d" },
    impossible_day = { "created:2024-02-30" },
    short_year = { "created:24-01-01" },
    operator_only = { "closed:>=" },
    double_operator = { "created:>>2024-01-01" },
)]
fn parse_invalid_date_error(input: &str) {
    let err = parse_query(input).unwrap_err();
    match err {
        Error::QueryInvalidDate { token } => assert_eq!(token, input),
        other => panic!("expected QueryInvalidDate, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sort and limit
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    default_asc = { "sort:priority", SortKey::Priority, SortOrder::Asc },
    explicit_asc = { "sort:created:asc", SortKey::Created, SortOrder::Asc },
    desc = { "sort:updated:desc", SortKey::Updated, SortOrder::Desc },
    upper_desc = { "sort:title:DESC", SortKey::Title, SortOrder::Desc },
    upper_key = { "sort:ID", SortKey::Id, SortOrder::Asc },
)]
fn parse_sort_directive(input: &str, key: SortKey, order: SortOrder) {
    let q = parse_query(input).unwrap();
    assert_eq!(q.sort, Some(Sort { key, order }));
    assert!(q.is_match_all());
}

#[test]
fn parse_sort_unknown_key_error() {
    let err = parse_query("sort:colour").unwrap_err();
    assert!(matches!(err, Error::QueryUnknownField { field } if field == "colour"));
}

#[test]
fn parse_sort_bad_direction_error() {
    let err = parse_query("sort:id:sideways").unwrap_err();
    match err {
        Error::QueryInvalidSort { token } => assert_eq!(token, "sort:id:sideways"),
        other => panic!("expected QueryInvalidSort, got {other:?}"),
    }
}

#[parameterized(
    zero = { "limit:0", 0 },
    five = { "limit:5", 5 },
    large = { "limit:100000", 100_000 },
)]
fn parse_limit_directive(input: &str, expected: usize) {
    assert_eq!(parse_query(input).unwrap().limit, expected);
}

#[parameterized(
    negative = { "limit:-1" },
    word = { "limit:ten" },
    empty = { "limit:" },
    fraction = { "limit:2.5" },
    plus_sign = { "limit:+3" },
)]
fn parse_invalid_limit_error(input: &str) {
    let err = parse_query(input).unwrap_err();
    match err {
        Error::QueryInvalidLimit { token } => assert_eq!(token, input),
        other => panic!("expected QueryInvalidLimit, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Combined
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_full_query() {
    let q = parse_query(
        "type:bug AND NOT status:closed \"login page\" labels:ui,auth updated:<2w sort:priority:desc limit:10",
    )
    .unwrap();

    assert_eq!(q.filters.get(&ValueField::Type), Some(&exact("bug")));
    assert_eq!(q.filters.get(&ValueField::Status), Some(&exact("closed")));
    assert!(q.is_negated(Field::Value(ValueField::Status)));
    assert_eq!(q.text.as_deref(), Some("login page"));
    assert!(q.date_filters.contains_key(&DateField::Updated));
    assert_eq!(
        q.sort,
        Some(Sort {
            key: SortKey::Priority,
            order: SortOrder::Desc
        })
    );
    assert_eq!(q.limit, 10);
    assert_eq!(q.bool_op, BoolOp::And);
}

#[test]
fn parse_error_is_terminal_even_after_valid_terms() {
    assert!(parse_query("type:bug status:open limit:x").is_err());
}
