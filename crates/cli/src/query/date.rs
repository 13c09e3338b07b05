// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date expressions: parsing `[op]value` and resolving against a clock.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use super::expr::{CompareOp, DateFilter, DateValue, RelativeSpan, SpanUnit};

// Hard-coded patterns, exercised by the tests below.
static RELATIVE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^(\d+)([dwmy])$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^\d{4}-\d{2}-\d{2}$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Parse the value part of a date filter, e.g. `>=2024-01-01` or `<7d`.
///
/// The operator defaults to `=` when omitted. Returns `None` if the value is
/// neither an ISO date nor a relative span.
pub fn parse_date_filter(input: &str) -> Option<DateFilter> {
    let (op, rest) = split_operator(input);
    let value = if let Some(span) = parse_relative_span(rest) {
        DateValue::Relative(span)
    } else {
        DateValue::Absolute(parse_iso_date(rest)?)
    };
    Some(DateFilter { op, value })
}

/// Split a leading comparison operator from the value.
fn split_operator(s: &str) -> (CompareOp, &str) {
    // Two-character operators first
    if let Some(rest) = s.strip_prefix(">=") {
        return (CompareOp::Ge, rest);
    }
    if let Some(rest) = s.strip_prefix("<=") {
        return (CompareOp::Le, rest);
    }
    if let Some(rest) = s.strip_prefix('>') {
        return (CompareOp::Gt, rest);
    }
    if let Some(rest) = s.strip_prefix('<') {
        return (CompareOp::Lt, rest);
    }
    if let Some(rest) = s.strip_prefix('=') {
        return (CompareOp::Eq, rest);
    }
    (CompareOp::Eq, s)
}

/// Parse a relative span such as `7d`, `2w`, `3m` or `1y`.
pub fn parse_relative_span(s: &str) -> Option<RelativeSpan> {
    let caps = RELATIVE_RE.captures(s)?;
    // Digits only, so the parse can fail only on overflow
    let amount = caps.get(1)?.as_str().parse::<u64>().unwrap_or(u64::MAX);
    let unit = match caps.get(2)?.as_str() {
        "d" => SpanUnit::Days,
        "w" => SpanUnit::Weeks,
        "m" => SpanUnit::Months,
        "y" => SpanUnit::Years,
        _ => return None,
    };
    Some(RelativeSpan { amount, unit })
}

/// Parse a `YYYY-MM-DD` date, rejecting impossible days like `2024-02-30`.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if !ISO_DATE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

impl RelativeSpan {
    /// Length of the span in whole days (months are 30, years 365).
    ///
    /// Spans beyond chrono's range saturate at [`Duration::MAX`].
    pub fn to_duration(&self) -> Duration {
        let days = i64::try_from(self.amount)
            .unwrap_or(i64::MAX)
            .saturating_mul(self.unit.days());
        Duration::try_days(days).unwrap_or(Duration::MAX)
    }
}

impl std::fmt::Display for RelativeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl DateFilter {
    /// Resolve the filter's boundary to a point in time.
    ///
    /// Absolute dates resolve to midnight UTC. Relative spans resolve to
    /// `now - span`, so the same filter moves with the clock.
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.value {
            DateValue::Absolute(date) => date
                .and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default())
                .and_utc(),
            DateValue::Relative(span) => now
                .checked_sub_signed(span.to_duration())
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }

    /// Check a timestamp against this filter.
    ///
    /// - Absolute: the timestamp's calendar day is compared with the date, so
    ///   `created:>2024-01-01` starts on January 2nd.
    /// - Relative: the operator applies to age, so `updated:<7d` holds for
    ///   anything newer than the resolved boundary.
    /// - `=` compares calendar days in both forms.
    pub fn matches(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let boundary = self.resolve(now);
        match (self.value, self.op) {
            (_, CompareOp::Eq) => timestamp.date_naive() == boundary.date_naive(),
            (DateValue::Absolute(date), op) => op.compare(&timestamp.date_naive(), &date),
            (DateValue::Relative(_), op) => op.flipped().compare(&timestamp, &boundary),
        }
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
