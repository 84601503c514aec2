// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the HTTP transport.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-level failures. Each one ends the request with 400 and a fixed
/// message; none of them reach the store.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid Content-Type, expected text/plain")]
    InvalidContentType,

    #[error("Failed to read request body")]
    BodyRead,

    #[error("Wrong time format")]
    TimestampParse,

    #[error("Not supported method")]
    UnsupportedMethod,
}

impl TransportError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for TransportError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Process-level failures from starting or running the server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
