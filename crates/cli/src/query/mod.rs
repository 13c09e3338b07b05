// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search query language for issues.
//!
//! A query is a single line of space-separated terms:
//!
//! ```text
//! type:bug AND priority:high "login page" sort:updated:desc limit:10
//! ```
//!
//! # Terms
//!
//! - `field:value` - exact match on `type`, `status`, `priority`, `assignee`, `branch`
//! - `labels:a,b` - issue carries *any* of the listed labels
//! - `created|updated|closed:[op]date` - date filter, `op` is one of `> >= < <= =`
//!   (default `=`), `date` is `YYYY-MM-DD` or a relative span like `7d`, `2w`, `1m`, `1y`
//! - `NOT field:value` - invert one field's result
//! - `AND` / `OR` - how all terms combine (one operator per query)
//! - `sort:field[:asc|desc]` and `limit:n`
//! - `"quoted phrase"` and bare words - case-insensitive text search on
//!   title and description
//!
//! # Relative dates
//!
//! Relative spans describe age, so `updated:<7d` means "updated less than
//! seven days ago". Spans are resolved each time a query executes, which keeps
//! saved queries moving with the clock. Months are 30 days and years 365 days.
//!
//! # Examples
//!
//! ```text
//! NOT status:closed labels:urgent,security
//! type:bug OR labels:urgent
//! created:>=2024-01-01 sort:priority:desc
//! assignee:"Ada Lovelace" updated:>30d
//! ```

mod date;
mod exec;
mod expr;
mod parser;
mod saved;

pub use date::{parse_date_filter, parse_relative_span};
pub use exec::{execute, execute_with_limit, SearchResult, SearchService};
pub use expr::{
    BoolOp, CompareOp, DateField, DateFilter, DateValue, Expected, Field, Query, RelativeSpan,
    Sort, SortKey, SortOrder, SpanUnit, ValueField,
};
pub use parser::parse_query;
pub use saved::SavedQueries;

/// Parse a raw search string. Entry point used by the CLI.
pub fn parse_search_query(raw: &str) -> crate::error::Result<Query> {
    parse_query(raw)
}
