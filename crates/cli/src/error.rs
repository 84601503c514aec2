// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the stamp client.

use reqwest::StatusCode;
use thiserror::Error;

/// All possible errors from the stamp client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}\n  hint: is stampd running at the given --server address?")]
    Http(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {}", body.trim_end())]
    Status { status: StatusCode, body: String },

    #[error(transparent)]
    Timestamp(#[from] stamp_core::Error),

    #[error(transparent)]
    Server(#[from] stamp_server::Error),

    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A specialized Result type for stamp client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
