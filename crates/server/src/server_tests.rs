// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test server utilities and HTTP-level tests.
//!
//! Provides a TestServer that runs on a random port so tests exercise the
//! real router over TCP.

#![cfg(test)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;

use stamp_core::{TimeFormat, Timestamp, TimestampStore};

use crate::server::{self, AppState};

/// A test server that runs on a random port and can be controlled.
pub struct TestServer {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    state: AppState,
}

impl TestServer {
    /// Start a new test server with the given format and initial value.
    pub async fn start(format: TimeFormat, initial: Timestamp) -> Self {
        let state = AppState::new(TimestampStore::spawn(initial), format);

        // Bind to port 0 to get a random available port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let state_clone = state.clone();
        tokio::spawn(async move {
            let shutdown = async move {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = server::serve(listener, state_clone, shutdown).await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestServer { addr, shutdown_tx, state }
    }

    /// Start with RFC 3339 bodies and an epoch initial value.
    pub async fn start_default() -> Self {
        Self::start(TimeFormat::Rfc3339, Timestamp::epoch()).await
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Direct access to the store for verification.
    pub fn store(&self) -> &TimestampStore {
        &self.state.store
    }

    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::{Client, Method, StatusCode};
    use yare::parameterized;

    fn at(rfc3339: &str) -> Timestamp {
        TimeFormat::Rfc3339.parse(rfc3339).unwrap()
    }

    async fn send(
        server: &TestServer,
        method: Method,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, String) {
        let mut request = Client::new().request(method, server.url()).body(body.to_string());
        if let Some(ct) = content_type {
            request = request.header(CONTENT_TYPE, ct);
        }
        let response = request.send().await.unwrap();
        let status = response.status();
        (status, response.text().await.unwrap())
    }

    #[tokio::test]
    async fn test_get_returns_initial_value() {
        let server = TestServer::start(TimeFormat::Rfc3339, at("2020-02-02T02:02:02Z")).await;

        let (status, body) = send(&server, Method::GET, Some("text/plain"), "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "2020-02-02T02:02:02Z");
        server.shutdown();
    }

    #[tokio::test]
    async fn test_get_sets_text_plain_response() {
        let server = TestServer::start_default().await;

        let response = Client::new()
            .get(server.url())
            .header(CONTENT_TYPE, "text/plain")
            .send()
            .await
            .unwrap();
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
        server.shutdown();
    }

    #[tokio::test]
    async fn test_post_then_get() {
        let server = TestServer::start_default().await;

        let (status, body) = send(&server, Method::POST, Some("text/plain"), "2024-01-01T00:00:00Z").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, body) = send(&server, Method::GET, Some("text/plain"), "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "2024-01-01T00:00:00Z");
        server.shutdown();
    }

    #[tokio::test]
    async fn test_post_updates_store() {
        let server = TestServer::start_default().await;

        send(&server, Method::POST, Some("text/plain"), "2024-05-05T10:00:00+02:00").await;
        assert_eq!(server.store().get().await, at("2024-05-05T08:00:00Z"));
        server.shutdown();
    }

    #[tokio::test]
    async fn test_post_invalid_timestamp_leaves_value() {
        let server = TestServer::start_default().await;
        send(&server, Method::POST, Some("text/plain"), "2024-01-01T00:00:00Z").await;

        let (status, body) = send(&server, Method::POST, Some("text/plain"), "not-a-time").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Wrong time format"));

        assert_eq!(server.store().get().await, at("2024-01-01T00:00:00Z"));
        server.shutdown();
    }

    #[tokio::test]
    async fn test_post_non_utf8_is_parse_failure() {
        let server = TestServer::start_default().await;

        let response = Client::new()
            .post(server.url())
            .header(CONTENT_TYPE, "text/plain")
            .body(vec![0xff, 0xfe, 0xfd])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.text().await.unwrap().contains("Wrong time format"));
        server.shutdown();
    }

    #[tokio::test]
    async fn test_post_oversized_body_is_read_failure() {
        let server = TestServer::start_default().await;

        let (status, body) = send(&server, Method::POST, Some("text/plain"), &"9".repeat(2048)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Failed to read request body"));
        assert_eq!(server.store().get().await, Timestamp::epoch());
        server.shutdown();
    }

    #[parameterized(
        leading_space = { " 15:04:05" },
        leading_tab = { "\t15:04:05" },
        unpadded = { "1:2:3" },
        space_padded = { "15: 4: 5" },
    )]
    #[test_macro(tokio::test)]
    async fn test_time_only_rejects_loose_input(input: &str) {
        let server = TestServer::start(TimeFormat::TimeOnly, Timestamp::epoch()).await;

        let (status, body) = send(&server, Method::POST, Some("text/plain"), input).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Wrong time format"));
        assert_eq!(server.store().get().await, Timestamp::epoch());
        server.shutdown();
    }

    #[parameterized(
        get_json = {Method::GET, Some("application/json") },
        get_missing = { Method::GET, None },
        get_with_charset = { Method::GET, Some("text/plain; charset=utf-8") },
        post_json = { Method::POST, Some("application/json") },
        post_missing = { Method::POST, None },
    )]
    #[test_macro(tokio::test)]
    async fn test_wrong_content_type_rejected(method: Method, content_type: Option<&str>) {
        let server = TestServer::start_default().await;

        let (status, body) = send(&server, method, content_type, "2024-01-01T00:00:00Z").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid Content-Type, expected text/plain"));

        // No mutation attempted
        assert_eq!(server.store().get().await, Timestamp::epoch());
        server.shutdown();
    }

    #[parameterized(
        delete = { Method::DELETE },
        put = { Method::PUT },
        patch = { Method::PATCH },
        options = { Method::OPTIONS },
    )]
    #[test_macro(tokio::test)]
    async fn test_unsupported_method(method: Method) {
        let server = TestServer::start_default().await;

        let (status, body) = send(&server, method, Some("text/plain"), "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Not supported method"));
        server.shutdown();
    }

    #[tokio::test]
    async fn test_time_only_format() {
        let server = TestServer::start(TimeFormat::TimeOnly, Timestamp::epoch()).await;

        let (status, _) = send(&server, Method::POST, Some("text/plain"), "15:04:05").await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&server, Method::GET, Some("text/plain"), "").await;
        assert_eq!(body, "15:04:05");

        let (status, _) = send(&server, Method::POST, Some("text/plain"), "2024-01-01T00:00:00Z").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        server.shutdown();
    }

    #[tokio::test]
    async fn test_concurrent_clients() {
        let server = TestServer::start_default().await;
        let url = server.url();
        let posted: Vec<String> = (0..10).map(|n| format!("2024-01-01T00:00:{n:02}Z")).collect();

        let mut tasks = Vec::new();
        for body in posted.clone() {
            let url = url.clone();
            tasks.push(tokio::spawn(async move {
                let client = Client::new();
                let status = client
                    .post(&url)
                    .header(CONTENT_TYPE, "text/plain")
                    .body(body)
                    .send()
                    .await
                    .unwrap()
                    .status();
                assert_eq!(status, StatusCode::OK);

                let response = client.get(&url).header(CONTENT_TYPE, "text/plain").send().await.unwrap();
                response.text().await.unwrap()
            }));
        }

        for task in tasks {
            let seen = task.await.unwrap();
            assert!(posted.contains(&seen), "observed value never posted: {seen}");
        }
        server.shutdown();
    }

    #[tokio::test]
    async fn test_unknown_path_not_found() {
        let server = TestServer::start_default().await;

        let response = Client::new()
            .get(format!("http://{}/other", server.addr))
            .header(CONTENT_TYPE, "text/plain")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        server.shutdown();
    }
}
