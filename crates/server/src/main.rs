// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! stampd: HTTP server exposing one shared timestamp.
//!
//! `GET /` returns the current value, `POST /` replaces it. Both require
//! `Content-Type: text/plain`.

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stamp_core::{InitialValue, TimeFormat};
use stamp_server::{ServerConfig, DEFAULT_BIND};

/// stampd: shared timestamp server
#[derive(Parser, Debug)]
#[command(name = "stampd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "HTTP server exposing one shared, actor-owned timestamp")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Text encoding for request and response bodies (time-only, rfc3339)
    #[arg(short, long, default_value_t = TimeFormat::Rfc3339)]
    format: TimeFormat,

    /// Value served before the first write (now, epoch)
    #[arg(short, long, default_value_t = InitialValue::Now)]
    initial: InitialValue,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(args.verbose);

    info!("Starting stampd");
    info!("  Bind address: {}", args.bind);
    info!("  Format: {}", args.format);
    info!("  Initial value: {}", args.initial);

    let config = ServerConfig { bind: args.bind, format: args.format, initial: args.initial };
    stamp_server::run(config).await?;

    Ok(())
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
