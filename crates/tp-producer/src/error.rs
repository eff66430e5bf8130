// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tp_queue::QueueError;

/// Errors from the Producer. Creating its own channel is setup-fatal;
/// everything else is this external collaborator's own business.
#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    #[error("failed to create producer channel: {0}")]
    Queue(#[from] QueueError),
}
