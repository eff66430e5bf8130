// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Ack Ingestor activity.
//!
//! Drains the ack channel into the staging buffer under the shared lock
//! and does nothing else — reconciling staged acks into the assignment
//! table is the Supervisor's job alone, so there is exactly one place that
//! decides ownership.

use tp_core::{Counters, WorkerAck};

use crate::ports::RecvPort;
use crate::state::SharedStateHandle;

/// Run the Ack Ingestor loop until `shutting_down` is observed.
///
/// The blocking `recv` means the loop only notices `shutting_down` between
/// acks; the Lifecycle controller accounts for this by enqueueing shutdown
/// records that unblock the request-reading side, and by not depending on
/// a prompt Ingestor exit for correctness — only for not leaking a thread.
pub fn run<A>(mut ack: A, state: &SharedStateHandle, counters: &Counters)
where
    A: RecvPort<WorkerAck>,
{
    loop {
        if counters.shutting_down() {
            tracing::info!("ack_ingestor: shutting down, exiting");
            break;
        }

        let ack = match ack.recv() {
            Ok(ack) => ack,
            Err(err) => {
                tracing::warn!(error = %err, "ack_ingestor: ack receive failed, retrying");
                continue;
            }
        };

        ingest(ack, state);
    }
}

/// Stage one ack. Pulled out of the loop so it is unit-testable without a
/// channel at all.
fn ingest(ack: WorkerAck, state: &SharedStateHandle) {
    state.lock().staging.push(ack);
}

#[cfg(test)]
#[path = "ack_ingestor_tests.rs"]
mod tests;
