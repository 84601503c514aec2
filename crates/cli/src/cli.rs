// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use stamp_core::TimeFormat;
use stamp_server::DEFAULT_BIND;

#[derive(Parser, Debug)]
#[command(name = "stamp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Publish and read the shared timestamp held by a stampd server")]
pub struct Cli {
    /// Address of the stampd server
    #[arg(short, long, global = true, default_value = DEFAULT_BIND, value_name = "addr")]
    pub server: SocketAddr,

    /// Text encoding used on the wire (time-only, rfc3339)
    #[arg(short, long, global = true, default_value_t = TimeFormat::Rfc3339, value_name = "format")]
    pub format: TimeFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish a timestamp to the server (the current time by default)
    Publish {
        /// Encoded timestamp to publish instead of now
        #[arg(long, value_name = "timestamp")]
        at: Option<String>,
    },

    /// Print the server's current timestamp
    Read,

    /// Start a server on --server, publish now, print it back, keep serving
    Demo {
        /// Exit after printing instead of serving until Ctrl-C
        #[arg(long)]
        once: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
