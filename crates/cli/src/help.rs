// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text and clap styling.
//!
//! Help is rendered before arguments are parsed, so it colors according to
//! the environment and terminal only.

use clap::builder::styling::Styles;

use crate::colors::{codes, Palette};

fn help_palette() -> Palette {
    Palette::detect(false)
}

/// Clap styles matching the [`Palette`] colors.
pub fn styles() -> Styles {
    if !help_palette().enabled() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(codes::HEADER))
        .usage(fg(codes::HEADER))
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
        .valid(fg(codes::CONTEXT))
}

/// Main help template: commands grouped before options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        help_palette().header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let p = help_palette();
    let row = |name: &str, width: usize, about: &str| {
        format!("  {}{}{}", p.literal(name), " ".repeat(width - name.len()), about)
    };
    let rows = |entries: &[(&str, &str)]| {
        entries
            .iter()
            .map(|(name, about)| row(name, 12, about))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}\n\n{}\n{}",
        p.header("Issues:"),
        rows(&[
            ("new", "Create a new issue"),
            ("list", "List issues"),
            ("show", "Show issue details"),
            ("edit", "Edit an issue's properties"),
            ("start", "Move an issue to in_progress"),
            ("close", "Close an issue"),
            ("reopen", "Reopen a closed issue"),
            ("label", "Add a label to an issue"),
            ("unlabel", "Remove a label from an issue"),
        ]),
        p.header("Search:"),
        rows(&[
            ("search", "Search issues with a query"),
            ("query", "Manage saved queries"),
        ]),
        p.header("Git:"),
        rows(&[
            ("branch", "Create and check out an issue branch"),
            ("merge", "Merge an issue branch and close the issue"),
            ("status", "Show the current branch and its issue"),
        ]),
        p.header("Setup:"),
        rows(&[
            ("init", "Initialize issue tracker"),
            ("completion", "Generate shell completions"),
        ]),
    )
}

/// Quickstart shown after options in main help.
pub fn quickstart() -> String {
    examples(
        "\
Get started:
  tix init                          Initialize tracker
  tix new bug \"Login fails\"         Create a bug
  tix search NOT status:closed      Find open work
  tix branch <id>                   Work on an issue in its own branch",
    )
}

/// Colorize a subcommand's examples block.
pub fn examples(text: &str) -> String {
    help_palette().examples(text)
}

/// Query language summary shown in `tix search --help`.
pub fn query_syntax() -> String {
    examples(
        "\
Query syntax:
  field:value                       type, status, priority, assignee, branch
  labels:a,b                        Has any of the labels
  created:>=2024-01-01              Date filter on created, updated, closed
  updated:<7d                       Relative: d, w, m (30d), y (365d)
  NOT field:value                   Invert one filter
  AND | OR                          Combine all terms (one operator per query)
  \"some phrase\"                     Text in title or description
  sort:field[:asc|desc]             Order results
  limit:N                           Show at most N results (0 = all)",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
