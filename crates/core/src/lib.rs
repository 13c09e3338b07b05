// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tix-core: Shared library for the tix issue tracker
//!
//! This crate provides the issue model and the clock abstraction used by
//! the tix CLI and its search engine.

pub mod clock;
pub mod error;
pub mod issue;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use issue::{Issue, IssueType, Priority, Status};
