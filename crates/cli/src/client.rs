// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client for a stampd server.

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use tracing::debug;

use stamp_core::{TimeFormat, Timestamp};
use stamp_server::TEXT_PLAIN;

use crate::error::{Error, Result};

/// Request timeout for server communication.
const TIMEOUT_SECS: u64 = 5;

/// A client bound to one server and one text encoding.
#[derive(Debug, Clone)]
pub struct StampClient {
    http: Client,
    url: String,
    format: TimeFormat,
}

impl StampClient {
    pub fn new(server: SocketAddr, format: TimeFormat) -> Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(TIMEOUT_SECS)).build()?;
        Ok(StampClient { http, url: format!("http://{server}/"), format })
    }

    pub fn format(&self) -> TimeFormat {
        self.format
    }

    /// Replaces the server's timestamp.
    pub async fn publish(&self, value: &Timestamp) -> Result<()> {
        let body = self.format.format(value);
        debug!("POST {} <- {}", self.url, body);

        let response = self.http.post(&self.url).header(CONTENT_TYPE, TEXT_PLAIN).body(body).send().await?;
        expect_ok(response).await?;
        Ok(())
    }

    /// Returns the server's timestamp as sent on the wire.
    pub async fn read_text(&self) -> Result<String> {
        let response = self.http.get(&self.url).header(CONTENT_TYPE, TEXT_PLAIN).send().await?;
        let body = expect_ok(response).await?;
        debug!("GET {} -> {}", self.url, body);
        Ok(body)
    }

    /// Returns the server's timestamp, decoded with this client's format.
    pub async fn read(&self) -> Result<Timestamp> {
        let body = self.read_text().await?;
        Ok(self.format.parse(&body)?)
    }
}

/// Returns the body of a 200 response, or the server's message as an error.
async fn expect_ok(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(Error::Status { status, body })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
