// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use stamp_core::{InitialValue, SystemClock, TimeFormat, Timestamp, TimestampStore};
use stamp_server::AppState;

use crate::client::StampClient;
use crate::error::Result;

/// Publishes `at` (decoded with the client's format) or the current time.
pub async fn publish(client: &StampClient, at: Option<String>) -> Result<()> {
    let value = match at {
        Some(text) => client.format().parse(&text)?,
        None => Timestamp::now(),
    };
    client.publish(&value).await
}

/// Prints the server's current timestamp.
pub async fn read(client: &StampClient) -> Result<()> {
    println!("{}", client.read_text().await?);
    Ok(())
}

/// Serves on `addr`, publishes now, prints the value read back.
///
/// Keeps serving until Ctrl-C unless `once` is set.
pub async fn demo(addr: SocketAddr, format: TimeFormat, once: bool) -> Result<()> {
    let listener =
        TcpListener::bind(addr).await.map_err(|source| stamp_server::Error::Bind { addr, source })?;
    let local_addr = listener.local_addr().map_err(stamp_server::Error::Serve)?;

    let store = TimestampStore::with_initial(InitialValue::Now, &SystemClock);
    let state = AppState::new(store, format);
    let server = tokio::spawn(stamp_server::serve(listener, state, stamp_server::shutdown_signal()));

    let client = StampClient::new(local_addr, format)?;
    client.publish(&Timestamp::now()).await?;
    println!("{}", client.read_text().await?);

    if once {
        server.abort();
        return Ok(());
    }

    info!("Serving on {}, press Ctrl-C to stop", local_addr);
    server.await??;
    Ok(())
}
