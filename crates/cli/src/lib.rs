// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! stamp - client driver for the stampd shared timestamp server.
//!
//! # Main Components
//!
//! - [`StampClient`] - publishes and reads the timestamp over HTTP
//! - [`Cli`] - command-line definition for the `stamp` binary
//! - [`Error`] - error types for all operations

mod cli;
pub mod client;
mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use client::StampClient;
pub use error::{Error, Result};

/// Runs a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Publish { at } => commands::publish(&StampClient::new(cli.server, cli.format)?, at).await,
        Command::Read => commands::read(&StampClient::new(cli.server, cli.format)?).await,
        Command::Demo { once } => commands::demo(cli.server, cli.format, once).await,
    }
}
