// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io;

/// Errors from the Queue Plane: creation failure is setup-fatal;
/// everything else is transient and recovered by the caller's loop.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("failed to create queue {name}: {source}")]
    Create { name: String, source: io::Error },

    #[error("failed to open queue {name}: {source}")]
    Open { name: String, source: io::Error },

    #[error("send on queue {name} failed: {source}")]
    Send { name: String, source: io::Error },

    #[error("receive on queue {name} failed: {source}")]
    Receive { name: String, source: io::Error },

    #[error("unlink of queue {name} failed: {source}")]
    Unlink { name: String, source: io::Error },

    #[error("message on queue {name} did not decode as a valid record")]
    Malformed { name: String },
}
