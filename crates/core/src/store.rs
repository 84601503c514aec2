// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Actor-owned shared timestamp.
//!
//! A single owner task holds the value and drains one mailbox of tagged
//! requests. Handles only send messages, so every read and write passes
//! through the owner's serialization point and no lock guards the value.
//!
//! Ordering: the mailbox is FIFO across both request kinds, so a `get`
//! issued after a `set` has returned observes that write or a later one.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, trace};

use crate::timestamp::{ClockSource, InitialValue, Timestamp};

/// Mailbox depth. Senders suspend only while it is full.
const MAILBOX_CAPACITY: usize = 64;

/// Message handled by the owner loop.
#[derive(Debug)]
enum Request {
    /// Replace the held value. No reply.
    Set(Timestamp),
    /// Send the held value back on the enclosed single-use conduit.
    Get(oneshot::Sender<Timestamp>),
}

/// Handle to a shared timestamp.
///
/// Cloning is cheap; every clone talks to the same owner. The owner stops
/// once the last handle is dropped.
#[derive(Debug, Clone)]
pub struct TimestampStore {
    mailbox: mpsc::Sender<Request>,
}

impl TimestampStore {
    /// Starts the owner task on the current tokio runtime.
    ///
    /// Must be called from within a runtime. Handles must not outlive that
    /// runtime: once it is dropped the owner is gone and `get` never returns.
    pub fn spawn(initial: Timestamp) -> Self {
        let (mailbox, inbox) = mpsc::channel(MAILBOX_CAPACITY);
        tokio::spawn(run_owner(initial, inbox));
        TimestampStore { mailbox }
    }

    /// Resolves `initial` against `clock`, then starts the owner.
    pub fn with_initial(initial: InitialValue, clock: &impl ClockSource) -> Self {
        Self::spawn(initial.resolve(clock))
    }

    /// Hands a write to the owner.
    ///
    /// Returns once the message is in the mailbox; later reads observe it.
    pub async fn set(&self, value: Timestamp) {
        if self.mailbox.send(Request::Set(value)).await.is_err() {
            error!("timestamp owner has stopped, dropping write of {}", value);
        }
    }

    /// Returns the value held when the owner services this request.
    pub async fn get(&self) -> Timestamp {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.mailbox.send(Request::Get(reply_tx)).await.is_ok() {
            if let Ok(value) = reply_rx.await {
                return value;
            }
        }
        // The owner outlives every handle unless its runtime is shutting
        // down, in which case this task is never polled again either.
        error!("timestamp owner has stopped, read will not complete");
        std::future::pending().await
    }
}

/// Owner loop: sole reader and sole mutator of `current`.
async fn run_owner(initial: Timestamp, mut inbox: mpsc::Receiver<Request>) {
    let mut current = initial;
    debug!("timestamp owner started with {}", current);

    while let Some(request) = inbox.recv().await {
        match request {
            Request::Set(value) => {
                trace!("set {}", value);
                current = value;
            }
            Request::Get(reply) => {
                trace!("get -> {}", current);
                // Caller may have given up waiting; nothing to do then.
                let _ = reply.send(current);
            }
        }
    }

    debug!("timestamp owner stopped, all handles dropped");
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
