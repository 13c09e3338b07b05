// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::help;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "id")]
    Ids,
}

#[derive(Parser)]
#[command(name = "tix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A file-backed issue tracker with a query language for search")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize issue tracking in the current directory
    #[command(after_help = help::examples("\
Examples:
  tix init                    Prefix derived from directory name
  tix init --prefix proj      Use an explicit prefix"))]
    Init {
        /// ID prefix for new issues (2+ lowercase letters/digits)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Create a new issue
    #[command(after_help = help::examples("\
Examples:
  tix new \"Fix login\"                     Create a task
  tix new bug \"Login fails\" -p high       Create a high priority bug
  tix new feature \"SSO\" -l auth,ui        Create a feature with labels
  tix new chore \"Bump deps\" -a ada        Create and assign"))]
    New {
        /// Issue type (bug, feature, task, chore, epic) or title if type is omitted
        #[arg(value_parser = non_empty_string)]
        type_or_title: String,

        /// Title (if type was provided as first arg)
        #[arg(value_parser = non_empty_string)]
        title: Option<String>,

        /// Longer description
        #[arg(long, short)]
        description: Option<String>,

        /// Priority (low, medium, high, critical)
        #[arg(long, short)]
        priority: Option<String>,

        /// Assign the issue to someone
        #[arg(long, short)]
        assignee: Option<String>,

        /// Add label(s) (comma-separated or repeated)
        #[arg(long, short)]
        label: Vec<String>,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List issues
    #[command(after_help = help::examples("\
Examples:
  tix list                    All issues
  tix list -s open            Only open issues
  tix list -o ids             Only IDs, one per line"))]
    List {
        /// Only issues with this status (open, in_progress, closed)
        #[arg(long, short)]
        status: Option<String>,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show issue details
    Show {
        /// Issue ID or unique prefix
        id: String,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Edit an issue's properties
    #[command(after_help = help::examples("\
Examples:
  tix edit tx-1a2b title \"New title\"        Change the title
  tix edit tx-1a2b priority critical        Raise the priority
  tix edit tx-1a2b assignee none            Clear the assignee"))]
    Edit {
        /// Issue ID or unique prefix
        id: String,
        /// Attribute to change (title, description, type, priority, assignee)
        attr: String,
        /// New value
        value: String,
    },

    /// Move an issue to in_progress
    Start {
        /// Issue ID or unique prefix
        id: String,
    },

    /// Close an issue
    Close {
        /// Issue ID or unique prefix
        id: String,
    },

    /// Reopen an issue
    Reopen {
        /// Issue ID or unique prefix
        id: String,
    },

    /// Add a label to an issue
    Label {
        /// Issue ID or unique prefix
        id: String,
        #[arg(value_parser = non_empty_string)]
        label: String,
    },

    /// Remove a label from an issue
    Unlabel {
        /// Issue ID or unique prefix
        id: String,
        #[arg(value_parser = non_empty_string)]
        label: String,
    },

    /// Search issues with a query
    #[command(after_help = help::query_syntax())]
    Search {
        /// Query terms, joined with spaces
        #[arg(required = true)]
        query: Vec<String>,

        /// Override the query's limit (0 = all)
        #[arg(long)]
        limit: Option<usize>,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Manage saved queries
    #[command(subcommand)]
    Query(QueryCommand),

    /// Create and check out the branch for an issue
    Branch {
        /// Issue ID or unique prefix
        id: String,
    },

    /// Merge an issue branch and close the issue
    Merge {
        /// Issue ID or unique prefix
        id: String,

        /// Branch to merge into (defaults to the configured base branch)
        #[arg(long)]
        into: Option<String>,
    },

    /// Show the current branch, its issue and working tree changes
    Status,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum QueryCommand {
    /// Save a query under a name
    #[command(after_help = help::examples("\
Examples:
  tix query save open-bugs type:bug NOT status:closed
  tix query save stale updated:>30d NOT status:closed"))]
    Save {
        /// Name without whitespace
        name: String,
        /// Query terms, joined with spaces
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Run a saved query
    Run {
        name: String,

        /// Override the query's limit (0 = all)
        #[arg(long)]
        limit: Option<usize>,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List saved queries
    List,

    /// Delete a saved query
    Delete { name: String },
}
