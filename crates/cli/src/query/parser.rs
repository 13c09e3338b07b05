// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for search queries.
//!
//! Turns a raw string like `type:bug NOT status:closed "login page"` into a
//! structured [`Query`]. Any error aborts the parse; callers never see a
//! partially built query.

use crate::error::{Error, Result};

use super::date::parse_date_filter;
use super::expr::{
    BoolOp, DateField, Expected, Field, Query, Sort, SortKey, SortOrder, ValueField,
};

/// A lexical unit of the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Token {
    pub text: String,
    /// True for a `"..."` phrase that started the token.
    pub quoted: bool,
}

/// What a `name:` prefix refers to.
enum Directive {
    Value(ValueField),
    Date(DateField),
    Sort,
    Limit,
}

/// Parse a search query.
///
/// # Examples
///
/// ```ignore
/// let query = parse_query("type:bug AND priority:high")?;
/// let query = parse_query("NOT status:closed updated:<7d sort:updated:desc")?;
/// let query = parse_query("\"login page\" labels:ui,auth limit:5")?;
/// ```
///
/// # Errors
///
/// Returns a `Query*` error variant naming the offending token.
pub fn parse_query(input: &str) -> Result<Query> {
    let mut query = Query {
        raw: input.to_string(),
        ..Query::default()
    };
    let mut text_parts: Vec<String> = Vec::new();
    let mut bool_op: Option<BoolOp> = None;
    // Number of consecutive NOTs waiting for a field token
    let mut pending_not = 0usize;

    for token in tokenize(input) {
        if token.quoted {
            if pending_not > 0 {
                return Err(Error::QueryInvalidNegation {
                    token: format!("\"{}\"", token.text),
                });
            }
            text_parts.push(token.text);
            continue;
        }

        let word = token.text;

        if word == "NOT" {
            pending_not += 1;
            continue;
        }

        if let Some(op) = parse_bool_op(&word) {
            if pending_not > 0 {
                return Err(Error::QueryInvalidNegation { token: word });
            }
            match bool_op {
                Some(existing) if existing != op => return Err(Error::QueryMixedOperators),
                _ => bool_op = Some(op),
            }
            continue;
        }

        let Some((name, value)) = split_field_token(&word) else {
            if pending_not > 0 {
                return Err(Error::QueryInvalidNegation { token: word });
            }
            text_parts.push(word);
            continue;
        };

        let negate = pending_not % 2 == 1;
        let had_not = pending_not > 0;
        pending_not = 0;

        match lookup_directive(name)? {
            Directive::Sort => {
                if had_not {
                    return Err(Error::QueryInvalidNegation { token: word });
                }
                query.sort = Some(parse_sort(value, &word)?);
            }
            Directive::Limit => {
                if had_not {
                    return Err(Error::QueryInvalidNegation { token: word });
                }
                query.limit = parse_limit(value, &word)?;
            }
            Directive::Date(field) => {
                if value.is_empty() {
                    return Err(Error::QueryMissingValue {
                        field: field.as_str().to_string(),
                    });
                }
                let filter = parse_date_filter(value)
                    .ok_or_else(|| Error::QueryInvalidDate { token: word.clone() })?;
                query.date_filters.insert(field, filter);
                set_negation(&mut query, Field::Date(field), negate);
            }
            Directive::Value(field) => {
                let expected = parse_expected(field, value)?;
                merge_filter(&mut query, field, expected);
                set_negation(&mut query, Field::Value(field), negate);
            }
        }
    }

    if pending_not > 0 {
        return Err(Error::QueryInvalidNegation {
            token: "NOT".to_string(),
        });
    }

    query.bool_op = bool_op.unwrap_or_default();
    if !text_parts.is_empty() {
        query.text = Some(text_parts.join(" "));
    }

    Ok(query)
}

/// Split the input into tokens.
///
/// Whitespace separates tokens. A `"` at the start of a token opens a phrase
/// that runs to the closing quote. A `"` inside a token quotes a run of the
/// token itself, so `assignee:"Ada L"` stays a single field token. An
/// unterminated quote runs to the end of the input.
pub(super) fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_token => {
                let phrase: String = chars.by_ref().take_while(|&ch| ch != '"').collect();
                let phrase = phrase.trim();
                if !phrase.is_empty() {
                    tokens.push(Token {
                        text: phrase.to_string(),
                        quoted: true,
                    });
                }
            }
            '"' => {
                current.extend(chars.by_ref().take_while(|&ch| ch != '"'));
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted: false,
                    });
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(Token {
            text: current,
            quoted: false,
        });
    }

    tokens
}

fn parse_bool_op(word: &str) -> Option<BoolOp> {
    if word.eq_ignore_ascii_case("and") {
        Some(BoolOp::And)
    } else if word.eq_ignore_ascii_case("or") {
        Some(BoolOp::Or)
    } else {
        None
    }
}

/// Split `name:value` when `name` looks like a field name.
///
/// Words such as `http://x` or `10:30` are left for text search.
fn split_field_token(word: &str) -> Option<(&str, &str)> {
    let (name, value) = word.split_once(':')?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
        return None;
    }
    if value.starts_with("//") {
        return None;
    }
    Some((name, value))
}

fn lookup_directive(name: &str) -> Result<Directive> {
    match name.to_lowercase().as_str() {
        "type" => Ok(Directive::Value(ValueField::Type)),
        "status" => Ok(Directive::Value(ValueField::Status)),
        "priority" => Ok(Directive::Value(ValueField::Priority)),
        "assignee" => Ok(Directive::Value(ValueField::Assignee)),
        "branch" => Ok(Directive::Value(ValueField::Branch)),
        "labels" => Ok(Directive::Value(ValueField::Labels)),
        "created" => Ok(Directive::Date(DateField::Created)),
        "updated" => Ok(Directive::Date(DateField::Updated)),
        "closed" => Ok(Directive::Date(DateField::Closed)),
        "sort" => Ok(Directive::Sort),
        "limit" => Ok(Directive::Limit),
        _ => Err(Error::QueryUnknownField {
            field: name.to_string(),
        }),
    }
}

fn parse_expected(field: ValueField, value: &str) -> Result<Expected> {
    let missing = || Error::QueryMissingValue {
        field: field.as_str().to_string(),
    };

    if field == ValueField::Labels {
        let labels: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        if labels.is_empty() {
            return Err(missing());
        }
        return Ok(Expected::AnyOf(labels));
    }

    let value = value.trim();
    if value.is_empty() {
        return Err(missing());
    }
    if field.is_case_insensitive() {
        Ok(Expected::Exact(value.to_lowercase()))
    } else {
        Ok(Expected::Exact(value.to_string()))
    }
}

/// Record a filter, replacing an earlier one for the same field.
/// Labels accumulate instead.
fn merge_filter(query: &mut Query, field: ValueField, expected: Expected) {
    match (query.filters.get_mut(&field), expected) {
        (Some(Expected::AnyOf(existing)), Expected::AnyOf(more)) => {
            for label in more {
                if !existing.contains(&label) {
                    existing.push(label);
                }
            }
        }
        (_, expected) => {
            query.filters.insert(field, expected);
        }
    }
}

fn set_negation(query: &mut Query, field: Field, negate: bool) {
    if negate {
        query.negated.insert(field);
    } else {
        query.negated.remove(&field);
    }
}

/// Parse `field[:asc|desc]` from a `sort:` token.
fn parse_sort(value: &str, token: &str) -> Result<Sort> {
    let (name, direction) = match value.split_once(':') {
        Some((name, direction)) => (name, Some(direction)),
        None => (value, None),
    };

    if name.is_empty() {
        return Err(Error::QueryMissingValue {
            field: "sort".to_string(),
        });
    }

    let key = SortKey::from_name(name).ok_or_else(|| Error::QueryUnknownField {
        field: name.to_string(),
    })?;

    let order = match direction.map(str::to_lowercase).as_deref() {
        None | Some("asc") => SortOrder::Asc,
        Some("desc") => SortOrder::Desc,
        Some(_) => {
            return Err(Error::QueryInvalidSort {
                token: token.to_string(),
            })
        }
    };

    Ok(Sort { key, order })
}

/// Parse the `n` of a `limit:n` token. Only plain digits are accepted.
fn parse_limit(value: &str, token: &str) -> Result<usize> {
    let invalid = || Error::QueryInvalidLimit {
        token: token.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<usize>().map_err(|_| invalid())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
