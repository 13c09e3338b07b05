// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query types produced by the parser and consumed by the executor.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;

/// A parsed search query.
///
/// Built once from a raw string by [`parse_query`](super::parse_query) and
/// never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// The input the query was parsed from.
    pub raw: String,
    /// Free-text phrase matched against title and description.
    pub text: Option<String>,
    /// Expected values for non-date fields.
    pub filters: BTreeMap<ValueField, Expected>,
    /// Date constraints for timestamp fields.
    pub date_filters: BTreeMap<DateField, DateFilter>,
    /// How predicates combine.
    pub bool_op: BoolOp,
    /// Fields whose predicate result is inverted after evaluation.
    pub negated: BTreeSet<Field>,
    pub sort: Option<Sort>,
    /// Maximum number of results; `0` means unbounded.
    pub limit: usize,
}

impl Query {
    /// Returns true if the query has no predicates (it matches every issue).
    pub fn is_match_all(&self) -> bool {
        self.text.is_none() && self.filters.is_empty() && self.date_filters.is_empty()
    }

    /// Returns true if the given field's predicate is inverted.
    pub fn is_negated(&self, field: Field) -> bool {
        self.negated.contains(&field)
    }
}

/// Canonical form: predicates joined by the query's operator, then `sort:`
/// and `limit:`. Parsing the output yields the same predicates.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = |field: Field| if self.is_negated(field) { "NOT " } else { "" };

        let mut terms: Vec<String> = Vec::new();
        for (field, expected) in &self.filters {
            let value = match expected {
                Expected::Exact(v) if v.contains(char::is_whitespace) => format!("\"{v}\""),
                Expected::Exact(v) => v.clone(),
                Expected::AnyOf(values) => values.join(","),
            };
            terms.push(format!("{}{}:{}", not(Field::Value(*field)), field.as_str(), value));
        }
        for (field, filter) in &self.date_filters {
            terms.push(format!("{}{}:{}", not(Field::Date(*field)), field.as_str(), filter));
        }
        if let Some(text) = &self.text {
            terms.push(format!("\"{text}\""));
        }

        let mut out = terms.join(&format!(" {} ", self.bool_op.as_str()));
        let mut directives: Vec<String> = Vec::new();
        if let Some(sort) = self.sort {
            directives.push(format!("sort:{}:{}", sort.key.as_str(), sort.order.as_str()));
        }
        if self.limit > 0 {
            directives.push(format!("limit:{}", self.limit));
        }
        for directive in directives {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&directive);
        }
        f.write_str(&out)
    }
}

/// Fields compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueField {
    Type,
    Status,
    Priority,
    Assignee,
    Branch,
    Labels,
}

impl ValueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueField::Type => "type",
            ValueField::Status => "status",
            ValueField::Priority => "priority",
            ValueField::Assignee => "assignee",
            ValueField::Branch => "branch",
            ValueField::Labels => "labels",
        }
    }

    /// Enum-like fields are compared after lowercasing.
    pub fn is_case_insensitive(&self) -> bool {
        matches!(
            self,
            ValueField::Type | ValueField::Status | ValueField::Priority
        )
    }
}

/// Timestamp fields that accept date expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateField {
    Created,
    Updated,
    Closed,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Created => "created",
            DateField::Updated => "updated",
            DateField::Closed => "closed",
        }
    }
}

/// Any filterable field. Used to record negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Value(ValueField),
    Date(DateField),
}

impl Field {
    /// Field vocabulary accepted by the parser, for error messages.
    pub fn valid_names() -> &'static str {
        "type, status, priority, assignee, branch, labels, created, updated, closed, sort, limit"
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Value(f) => f.as_str(),
            Field::Date(f) => f.as_str(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value a field filter expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// The field must equal this value.
    Exact(String),
    /// The field must hold at least one of these values.
    AnyOf(Vec<String>),
}

impl Expected {
    /// Returns true if any of the issue's values satisfies the expectation.
    pub fn matches<'a>(&self, mut actual: impl Iterator<Item = &'a str>) -> bool {
        match self {
            Expected::Exact(want) => actual.any(|v| v == want),
            Expected::AnyOf(wants) => actual.any(|v| wants.iter().any(|w| w == v)),
        }
    }
}

/// How multiple predicates combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolOp {
    #[default]
    And,
    Or,
}

impl BoolOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoolOp::And => "AND",
            BoolOp::Or => "OR",
        }
    }
}

/// Comparison operators for date filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Equal (`=`).
    Eq,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Eq => "=",
        }
    }

    /// The operator with its sides swapped (`a < b` iff `b > a`).
    pub fn flipped(&self) -> CompareOp {
        match self {
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Ge => CompareOp::Le,
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Le => CompareOp::Ge,
            CompareOp::Eq => CompareOp::Eq,
        }
    }

    /// Apply the operator as `actual op expected`.
    pub fn compare<T: Ord>(&self, actual: &T, expected: &T) -> bool {
        match self {
            CompareOp::Gt => actual > expected,
            CompareOp::Ge => actual >= expected,
            CompareOp::Lt => actual < expected,
            CompareOp::Le => actual <= expected,
            CompareOp::Eq => actual == expected,
        }
    }
}

/// A date constraint on one timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    pub op: CompareOp,
    pub value: DateValue,
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            DateValue::Absolute(date) => {
                write!(f, "{}{}", self.op.symbol(), date.format("%Y-%m-%d"))
            }
            DateValue::Relative(span) => write!(f, "{}{}", self.op.symbol(), span),
        }
    }
}

/// Either a calendar date or a span back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    /// A fixed day, e.g. `2024-01-01`.
    Absolute(NaiveDate),
    /// A span resolved against the evaluation time, e.g. `7d`.
    Relative(RelativeSpan),
}

/// A relative duration like `7d` or `2w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeSpan {
    pub amount: u64,
    pub unit: SpanUnit,
}

/// Units for relative spans. Months and years are fixed day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl SpanUnit {
    /// Number of days one unit stands for.
    pub fn days(&self) -> i64 {
        match self {
            SpanUnit::Days => 1,
            SpanUnit::Weeks => 7,
            SpanUnit::Months => 30,
            SpanUnit::Years => 365,
        }
    }

    pub fn suffix(&self) -> char {
        match self {
            SpanUnit::Days => 'd',
            SpanUnit::Weeks => 'w',
            SpanUnit::Months => 'm',
            SpanUnit::Years => 'y',
        }
    }
}

/// A sort directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

/// Fields results can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Title,
    Type,
    Status,
    Priority,
    Assignee,
    Branch,
    Created,
    Updated,
    Closed,
}

impl SortKey {
    pub fn valid_names() -> &'static str {
        "id, title, type, status, priority, assignee, branch, created, updated, closed"
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Type => "type",
            SortKey::Status => "status",
            SortKey::Priority => "priority",
            SortKey::Assignee => "assignee",
            SortKey::Branch => "branch",
            SortKey::Created => "created",
            SortKey::Updated => "updated",
            SortKey::Closed => "closed",
        }
    }

    pub fn from_name(name: &str) -> Option<SortKey> {
        match name.to_lowercase().as_str() {
            "id" => Some(SortKey::Id),
            "title" => Some(SortKey::Title),
            "type" => Some(SortKey::Type),
            "status" => Some(SortKey::Status),
            "priority" => Some(SortKey::Priority),
            "assignee" => Some(SortKey::Assignee),
            "branch" => Some(SortKey::Branch),
            "created" => Some(SortKey::Created),
            "updated" => Some(SortKey::Updated),
            "closed" => Some(SortKey::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
