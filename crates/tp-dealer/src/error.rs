// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tp_queue::QueueError;
use tp_signal::SignalError;

/// Errors from the Dealer. Only the setup-fatal class reaches `main`;
/// everything else is handled at the activity loop that produced it and
/// turned into a `tracing` event.
#[derive(Debug, thiserror::Error)]
pub enum DealerError {
    #[error("queue plane setup failed: {0}")]
    Queue(#[from] QueueError),

    #[error("signal bridge setup failed: {0}")]
    Signal(#[from] SignalError),

    #[error("failed to fork worker: {0}")]
    Fork(#[source] std::io::Error),

    #[error("setup failed: {0}")]
    Setup(String),
}
