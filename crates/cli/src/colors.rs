// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors.
//!
//! Whether to color is decided once, at startup, and carried around as a
//! [`Palette`] value. Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use tix_core::{Priority, Status};

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Open issues: soft green
    pub const GOOD: u8 = 114;
    /// Work in progress: amber
    pub const ACTIVE: u8 = 179;
    /// Critical priority: muted red
    pub const ALERT: u8 = 167;

    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Color choices for one run of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// A palette that never emits escape codes.
    pub fn plain() -> Self {
        Palette { enabled: false }
    }

    /// Decide from the `--no-color` flag, the environment and the terminal.
    pub fn detect(no_color_flag: bool) -> Self {
        if no_color_flag || !should_colorize() {
            Palette::plain()
        } else {
            Palette::new(true)
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, code: u8, text: &str) -> String {
        if self.enabled {
            format!("\x1b[38;5;{code}m{text}{}", codes::RESET)
        } else {
            text.to_string()
        }
    }

    /// Section titles.
    pub fn header(&self, text: &str) -> String {
        self.paint(codes::HEADER, text)
    }

    /// Commands, IDs and other literals.
    pub fn literal(&self, text: &str) -> String {
        self.paint(codes::LITERAL, text)
    }

    /// Secondary information such as timestamps and hints.
    pub fn context(&self, text: &str) -> String {
        self.paint(codes::CONTEXT, text)
    }

    pub fn status(&self, status: Status) -> String {
        let code = match status {
            Status::Open => codes::GOOD,
            Status::InProgress => codes::ACTIVE,
            Status::Closed => codes::CONTEXT,
        };
        self.paint(code, status.as_str())
    }

    pub fn priority(&self, priority: Priority) -> String {
        let code = match priority {
            Priority::Critical => codes::ALERT,
            Priority::High => codes::ACTIVE,
            Priority::Medium => codes::LITERAL,
            Priority::Low => codes::CONTEXT,
        };
        self.paint(code, priority.as_str())
    }

    /// Colorize an examples help block.
    ///
    /// Lines ending with `:` become headers. In `command    description`
    /// lines the command part is shown as a literal.
    pub fn examples(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }

        let lines: Vec<String> = text
            .lines()
            .map(|line| {
                let trimmed = line.trim_start();
                let indent = &line[..line.len() - trimmed.len()];

                if trimmed.ends_with(':') && !trimmed.contains("  ") {
                    return format!("{indent}{}", self.header(trimmed));
                }
                match find_description_start(trimmed) {
                    Some(end) => format!(
                        "{indent}{}{}",
                        self.literal(&trimmed[..end]),
                        &trimmed[end..]
                    ),
                    None => line.to_string(),
                }
            })
            .collect();
        lines.join("\n")
    }
}

/// Find where the description starts (the first run of 2+ spaces).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let rest = &line[start..];
    // Trailing whitespace only is not a description
    if rest.trim().is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
