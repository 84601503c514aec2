// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server configuration.

use std::net::SocketAddr;

use stamp_core::{InitialValue, TimeFormat};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Settings for a running server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,
    /// Encoding used for request and response bodies.
    pub format: TimeFormat,
    /// Value served before the first POST.
    pub initial: InitialValue,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            format: TimeFormat::default(),
            initial: InitialValue::default(),
        }
    }
}
