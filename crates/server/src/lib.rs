// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! stamp-server: HTTP transport for the shared timestamp.
//!
//! Validates and decodes requests, then forwards them to a
//! [`stamp_core::TimestampStore`].

pub mod config;
pub mod error;
pub mod server;
#[cfg(test)]
mod server_tests;

pub use config::{ServerConfig, DEFAULT_BIND};
pub use error::{Error, Result, TransportError};
pub use server::{router, run, serve, shutdown_signal, AppState, TEXT_PLAIN};
