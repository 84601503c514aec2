// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for stamp-core operations.

use thiserror::Error;

/// All possible errors that can occur in stamp-core operations.
///
/// The store itself never fails; these cover the text encoding only.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid timestamp '{input}': expected {expected}")]
    InvalidTimestamp { input: String, expected: &'static str },

    #[error("unknown time format: '{0}'\n  hint: valid formats are: time-only, rfc3339")]
    UnknownFormat(String),

    #[error("unknown initial value: '{0}'\n  hint: valid values are: now, epoch")]
    UnknownInitialValue(String),
}

/// A specialized Result type for stamp-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
