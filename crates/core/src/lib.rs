// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! stamp-core: Shared timestamp primitives
//!
//! This crate provides the actor-owned [`TimestampStore`] and the text
//! encodings used by both the stampd server and the stamp client.

pub mod error;
pub mod store;
pub mod timestamp;

pub use error::{Error, Result};
pub use store::TimestampStore;
pub use timestamp::{ClockSource, InitialValue, SystemClock, TimeFormat, Timestamp};
