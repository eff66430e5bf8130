// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Worker's main loop.

use std::path::PathBuf;

use tp_core::{JobRequest, JobResponse, WorkerAck};
use tp_queue::{Channel, Mode};

use crate::error::WorkerError;
use crate::kernel::fib;

/// What a Worker process was launched with: three positional channel-name
/// arguments, plus the ambient crash-injection knobs below.
#[derive(Debug, Clone)]
pub struct Config {
    pub request: String,
    pub response: String,
    pub ack: String,
    /// Probability, in `[0.0, 1.0]`, of aborting after computing a job's
    /// result but before responding — exercises the recovery path without
    /// relying on an unconditional crash.
    pub crash_probability: f64,
    /// Deterministically abort upon receiving this `job_id`, before
    /// sending its ack.
    pub crash_before_ack_on: Option<i32>,
    /// Deterministically abort upon receiving this `job_id`, after
    /// sending its ack but before computing.
    pub crash_after_ack_on: Option<i32>,
    /// Path to a marker file used to make the deterministic crash hooks
    /// above fire exactly once across every worker process that ever
    /// handles the target job (the original and every replacement are
    /// separate processes with no shared memory, so a replacement worker
    /// must be able to tell "this job already caused one crash" before
    /// deciding whether to crash again).
    pub crash_marker: Option<PathBuf>,
}

/// Run the Worker loop to completion (normal exit on a shutdown record,
/// or process abort if crash injection fires).
pub fn run(config: Config) -> Result<(), WorkerError> {
    let pid = std::process::id() as i32;
    let mut request_rx: Channel<JobRequest> = Channel::open_existing(&config.request, Mode::ReadOnly)?;
    let response_tx: Channel<JobResponse> = Channel::open_existing(&config.response, Mode::WriteOnly)?;
    let ack_tx: Channel<WorkerAck> = Channel::open_existing(&config.ack, Mode::WriteOnly)?;

    tracing::info!(pid, "worker: starting up");

    loop {
        let req = match request_rx.receive() {
            Ok(req) => req,
            Err(err) => {
                tracing::warn!(error = %err, pid, "worker: request receive failed, retrying");
                continue;
            }
        };

        if req.is_shutdown() {
            tracing::info!(pid, "worker: received shutdown signal");
            break;
        }

        if config.crash_before_ack_on == Some(req.job_id) && claim_crash_marker(&config.crash_marker) {
            tracing::warn!(pid, job_id = req.job_id, "worker: simulated crash before ack");
            std::process::abort();
        }

        // Ack before computing: the Dealer must learn ownership before
        // any crash this job's computation could cause.
        if let Err(err) = ack_tx.send(WorkerAck::new(pid, req.job_id)) {
            tracing::warn!(error = %err, job_id = req.job_id, pid, "worker: ack send failed");
        }

        if config.crash_after_ack_on == Some(req.job_id) && claim_crash_marker(&config.crash_marker) {
            tracing::warn!(pid, job_id = req.job_id, "worker: simulated crash after ack");
            std::process::abort();
        }

        let result = fib(req.data);

        if should_crash(config.crash_probability, rand::random()) {
            tracing::warn!(pid, job_id = req.job_id, "worker: simulated crash");
            std::process::abort();
        }

        if let Err(err) = response_tx.send(JobResponse::new(req.job_id, result, pid)) {
            tracing::warn!(error = %err, job_id = req.job_id, pid, "worker: response send failed");
        }
    }

    Ok(())
}

/// Atomically claim the one-shot crash marker: returns `true` (and
/// creates the file) the first time this is called for a given path
/// across every process racing to open it, `false` on every subsequent
/// call. With no marker configured, always claims (every deterministic
/// crash hook fires unconditionally).
fn claim_crash_marker(marker: &Option<PathBuf>) -> bool {
    match marker {
        None => true,
        Some(path) => std::fs::OpenOptions::new().write(true).create_new(true).open(path).is_ok(),
    }
}

/// Pure crash-injection decision, pulled out of the loop so it is
/// unit-testable without randomness or real channels. `sample` is a
/// uniform draw from `[0.0, 1.0)`.
fn should_crash(probability: f64, sample: f64) -> bool {
    if probability <= 0.0 {
        false
    } else if probability >= 1.0 {
        true
    } else {
        sample < probability
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
