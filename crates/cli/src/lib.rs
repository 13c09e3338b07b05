// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tixrs - a file-backed issue tracker with a search query language.
//!
//! This crate provides the functionality behind the `tix` CLI. Issues live as
//! one JSON file each under `.tix/issues/`; project settings and saved queries
//! live in `.tix/config.toml`.
//!
//! # Main Components
//!
//! - [`query`] - query parser, date resolver, executor and saved queries
//! - [`store`] - the [`IssueRepository`](store::IssueRepository) seam and its
//!   file and in-memory implementations
//! - [`Config`] - project configuration
//! - [`git`] - issue branches
//! - [`Error`] - error types for all operations
//!
//! # Searching
//!
//! ```rust,ignore
//! use tixrs::query::{parse_search_query, SearchService};
//! use tixrs::store::FileStore;
//! use tix_core::SystemClock;
//!
//! let store = FileStore::open(".tix/issues")?;
//! let query = parse_search_query("type:bug NOT status:closed sort:updated:desc")?;
//! let result = SearchService::new(&store, SystemClock).execute_search(&query)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod completions;
mod display;
pub mod env;
pub mod help;
pub mod timings;

pub mod config;
pub mod error;
pub mod git;
pub mod id;
pub mod query;
pub mod store;

pub use cli::{Cli, Command, OutputFormat, QueryCommand};
pub use config::{find_work_dir, init_work_dir, Config};
pub use error::{Error, Result};

use colors::Palette;
use commands::new::NewIssue;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let palette = Palette::detect(cli.no_color);
    run_command(cli.command, &palette)
}

fn run_command(command: Command, palette: &Palette) -> Result<()> {
    match command {
        Command::Init { prefix } => commands::init::run(prefix),
        Command::New {
            type_or_title,
            title,
            description,
            priority,
            assignee,
            label,
            output,
        } => commands::new::run(
            NewIssue {
                type_or_title,
                title,
                description,
                priority,
                assignee,
                labels: label,
            },
            output,
            palette,
        ),
        Command::List { status, output } => commands::list::run(status, output, palette),
        Command::Show { id, output } => commands::show::run(&id, output, palette),
        Command::Edit { id, attr, value } => commands::edit::run(&id, &attr, &value),
        Command::Start { id } => commands::lifecycle::start(&id, palette),
        Command::Close { id } => commands::lifecycle::close(&id, palette),
        Command::Reopen { id } => commands::lifecycle::reopen(&id, palette),
        Command::Label { id, label } => commands::label::add(&id, &label),
        Command::Unlabel { id, label } => commands::label::remove(&id, &label),
        Command::Search {
            query,
            limit,
            output,
        } => commands::search::run(&query, limit, output, palette),
        Command::Query(sub) => commands::query::run(sub, palette),
        Command::Branch { id } => commands::branch::branch(&id, palette),
        Command::Merge { id, into } => commands::branch::merge(&id, into.as_deref(), palette),
        Command::Status => commands::branch::status(palette),
        Command::Completion { shell } => {
            completions::write_completions(shell, &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
