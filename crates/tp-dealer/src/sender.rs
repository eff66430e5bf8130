// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Sender activity.
//!
//! Drains the producer channel, admits each job into the job cache
//! exactly once, and forwards it to the request channel. End-of-stream
//! sets `producer_drained` and ends the loop.

use tp_core::{Counters, JobRequest};

use crate::ports::{RecvPort, SendPort};
use crate::state::SharedStateHandle;

/// Run the Sender loop to completion (exits once end-of-stream is seen on
/// `producer`). Blocking on `producer.recv()`; never touches `request`
/// under the shared lock — only the job-cache lookup is.
pub fn run<P, R>(mut producer: P, request: R, state: &SharedStateHandle, counters: &Counters)
where
    P: RecvPort<JobRequest>,
    R: SendPort<JobRequest>,
{
    loop {
        let req = match producer.recv() {
            Ok(req) => req,
            Err(err) => {
                tracing::warn!(error = %err, "sender: producer receive failed, retrying");
                continue;
            }
        };

        if req.is_end_of_stream() {
            counters.set_producer_drained();
            tracing::info!("sender: end-of-stream observed, producer drained");
            break;
        }

        dispatch(req, &request, state, counters);
    }
}

/// The per-record admission policy, pulled out of the loop so it is
/// testable without a real channel.
fn dispatch<R>(req: JobRequest, request: &R, state: &SharedStateHandle, counters: &Counters)
where
    R: SendPort<JobRequest>,
{
    let admission = {
        let mut guard = state.lock();
        guard.job_cache.offer(req)
    };

    if admission.is_admitted() {
        counters.record_admission();
    } else {
        tracing::debug!(job_id = req.job_id, "sender: duplicate job_id, resending cached payload");
    }

    if let Err(err) = request.send(admission.payload()) {
        tracing::warn!(error = %err, job_id = req.job_id, "sender: request enqueue failed");
    }
}

#[cfg(test)]
#[path = "sender_tests.rs"]
mod tests;
