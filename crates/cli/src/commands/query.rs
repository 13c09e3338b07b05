// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tix_core::{Clock, SystemClock};

use crate::cli::{OutputFormat, QueryCommand};
use crate::colors::Palette;
use crate::config::{ConfigStore, FileConfigStore};
use crate::error::Result;
use crate::query::{parse_search_query, SavedQueries};
use crate::store::IssueRepository;

use super::{open_workspace, print_block, search};

pub fn run(command: QueryCommand, palette: &Palette) -> Result<()> {
    let ws = open_workspace()?;
    let config_store = FileConfigStore::new(&ws.work_dir);

    match command {
        QueryCommand::Save { name, query } => {
            save_impl(&config_store, &name, &query.join(" "))?;
            println!("Saved query {}", palette.literal(&name));
        }
        QueryCommand::Run {
            name,
            limit,
            output,
        } => {
            let out = run_impl(
                &config_store,
                &ws.store,
                &SystemClock,
                &name,
                limit,
                output,
                palette,
            )?;
            print_block(&out);
        }
        QueryCommand::List => print_block(&list_impl(&config_store, palette)?),
        QueryCommand::Delete { name } => {
            SavedQueries::new(&config_store).delete(&name)?;
            println!("Deleted query {}", palette.literal(&name));
        }
    }
    Ok(())
}

/// Save `raw` under `name` once it parses.
pub(crate) fn save_impl(store: &impl ConfigStore, name: &str, raw: &str) -> Result<()> {
    parse_search_query(raw)?;
    SavedQueries::new(store).save(name, raw)
}

/// Run the query saved under `name`.
pub(crate) fn run_impl(
    store: &impl ConfigStore,
    repo: &impl IssueRepository,
    clock: &impl Clock,
    name: &str,
    limit: Option<usize>,
    output: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    let raw = SavedQueries::new(store).load(name)?;
    let query = parse_search_query(&raw)?;
    search::run_impl(repo, clock, &query, limit, output, palette)
}

/// Saved queries as `name  query` lines, names padded to one column.
pub(crate) fn list_impl(store: &impl ConfigStore, palette: &Palette) -> Result<String> {
    let queries = SavedQueries::new(store).list()?;
    let width = queries.keys().map(String::len).max().unwrap_or(0);
    let lines: Vec<String> = queries
        .iter()
        .map(|(name, raw)| {
            format!(
                "{}{}  {}",
                palette.literal(name),
                " ".repeat(width - name.len()),
                raw
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
