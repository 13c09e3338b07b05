// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Default log filter when `TIX_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns `true` if `TIX_TIMINGS` is set (any value).
pub fn tix_timings() -> bool {
    std::env::var(vars::TIX_TIMINGS).is_ok()
}

/// Log filter directives from `TIX_LOG`, e.g. `debug` or `tixrs::query=trace`.
pub fn log_filter() -> String {
    std::env::var(vars::TIX_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
