// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tp_queue::QueueError;

/// Errors from the Worker. Opening any of the three channels it was
/// launched with is setup-fatal; everything after that point is the
/// Worker's own business (it may legitimately crash mid-job).
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("failed to open channel: {0}")]
    Queue(#[from] QueueError),
}
