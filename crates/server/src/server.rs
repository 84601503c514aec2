// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP server implementation.
//!
//! A single route, `/`, dispatches on method:
//! - `GET` reads the shared timestamp
//! - `POST` replaces it with the parsed body
//! - anything else is rejected
//!
//! Every request must carry `Content-Type: text/plain`. Validation and
//! decoding happen here so the store only ever sees well-typed values.

use std::future::Future;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use stamp_core::{SystemClock, TimeFormat, TimestampStore};

use crate::config::ServerConfig;
use crate::error::{Error, Result, TransportError};

/// The only accepted request content type.
pub const TEXT_PLAIN: &str = "text/plain";

/// Upper bound on POST bodies. A timestamp is a few dozen bytes.
const MAX_BODY_BYTES: usize = 1024;

/// State shared by all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TimestampStore,
    pub format: TimeFormat,
}

impl AppState {
    pub fn new(store: TimestampStore, format: TimeFormat) -> Self {
        AppState { store, format }
    }
}

/// Builds the router for the timestamp service.
pub fn router(state: AppState) -> Router {
    Router::new().route("/", any(handle_root)).with_state(state)
}

/// Serves on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<()> {
    let listener =
        TcpListener::bind(config.bind).await.map_err(|source| Error::Bind { addr: config.bind, source })?;
    info!("Listening on: {}", config.bind);

    let store = TimestampStore::with_initial(config.initial, &SystemClock);
    serve(listener, AppState::new(store, config.format), shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

async fn handle_root(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let result = match method {
        Method::GET => handle_get(&state, &headers).await,
        Method::POST => handle_post(&state, &headers, body).await,
        _ => Err(TransportError::UnsupportedMethod),
    };

    result.unwrap_or_else(|e| {
        warn!("Rejected {} /: {}", method, e);
        e.into_response()
    })
}

async fn handle_get(state: &AppState, headers: &HeaderMap) -> std::result::Result<Response, TransportError> {
    require_text_plain(headers)?;

    let current = state.store.get().await;
    let body = state.format.format(&current);
    debug!("GET / -> {}", body);

    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response())
}

async fn handle_post(
    state: &AppState,
    headers: &HeaderMap,
    body: Body,
) -> std::result::Result<Response, TransportError> {
    require_text_plain(headers)?;

    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        debug!("Body read failed: {}", e);
        TransportError::BodyRead
    })?;

    let text = std::str::from_utf8(&bytes).map_err(|_| TransportError::TimestampParse)?;
    let value = state.format.parse(text).map_err(|e| {
        debug!("{}", e);
        TransportError::TimestampParse
    })?;

    state.store.set(value).await;
    debug!("POST / <- {}", text);

    Ok(StatusCode::OK.into_response())
}

/// Checks the exact `Content-Type` header value.
fn require_text_plain(headers: &HeaderMap) -> std::result::Result<(), TransportError> {
    match headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
        Some(TEXT_PLAIN) => Ok(()),
        _ => Err(TransportError::InvalidContentType),
    }
}
