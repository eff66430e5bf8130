// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Receiver activity.
//!
//! Drains the response channel, counts completions, and exits once
//! termination is reached: the producer is drained and every admitted job
//! has completed. Response content beyond `job_id` is never inspected for
//! correctness, except to record that `job_id` has been observed —
//! response-side dedup so a Supervisor resend racing a worker's own
//! response can't double-count a completion.

use tp_core::{Counters, JobResponse};

use crate::ports::RecvPort;
use crate::state::SharedStateHandle;

/// Run the Receiver loop to completion.
pub fn run<R>(mut response: R, state: &SharedStateHandle, counters: &Counters)
where
    R: RecvPort<JobResponse>,
{
    loop {
        let resp = match response.recv() {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(error = %err, "receiver: response receive failed, retrying");
                continue;
            }
        };

        let first_observation = state.lock().completed.insert(resp.job_id);
        if !first_observation {
            tracing::warn!(job_id = resp.job_id, "receiver: duplicate response, discarding");
            continue;
        }

        counters.record_completion();
        tracing::debug!(
            job_id = resp.job_id,
            worker_pid = resp.worker_pid,
            "receiver: job completed"
        );

        // Termination is only re-tested here, on the next response: if
        // this completion is the last one but `producer_drained` flips
        // true a moment later, this loop blocks forever waiting on a
        // response that will never arrive. Safe today because every
        // caller either drains the producer near-instantly (zero send
        // delay) or uses jobs slow enough that the flag is long since set
        // by the time the last response lands — a pacing change that
        // narrows that margin would need to revisit this.
        if counters.is_terminated() {
            tracing::info!("receiver: termination condition reached, exiting");
            break;
        }
    }
}

#[cfg(test)]
#[path = "receiver_tests.rs"]
mod tests;
