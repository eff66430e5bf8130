// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Supervisor activity — the crux of the dealer.
//!
//! Blocks on the signal bridge; each wakeup may represent several deaths
//! (signal coalescing), so it reaps in a tight non-blocking loop and runs
//! a full reconcile/lookup/resend/fork cycle per reaped PID. The
//! reconcile-then-lookup-then-resend sequence happens under the shared
//! lock as one atomic step, including the resend itself — the one
//! deliberate lock-held-send in this codebase, kept atomic with the cache
//! lookup it depends on.

use std::io;

use tp_core::{Counters, JobRequest, WorkerAck};
use tp_signal::{reap_exited, SignalBridge};

use crate::ports::{SendPort, TryRecvPort};
use crate::state::{SharedState, SharedStateHandle};

/// Run the Supervisor loop until the signal bridge read fails (the pipe is
/// closed as part of shutdown) or `shutting_down` is observed after a
/// death cycle.
///
/// `spawn_worker` forks+execs a replacement and returns its PID; it is
/// injected rather than hardcoded so the Lifecycle controller owns the
/// worker binary path and channel-name arguments.
pub fn run<Req, Ack>(
    mut bridge: SignalBridge,
    request: Req,
    mut ack_nonblocking: Ack,
    state: &SharedStateHandle,
    counters: &Counters,
    mut spawn_worker: impl FnMut() -> io::Result<u32>,
) where
    Req: SendPort<JobRequest>,
    Ack: TryRecvPort<WorkerAck>,
{
    loop {
        if let Err(err) = bridge.wait_for_notification() {
            tracing::info!(error = %err, "supervisor: signal bridge closed, exiting");
            break;
        }

        for exited in reap_exited() {
            handle_death(
                exited.pid,
                &request,
                &mut ack_nonblocking,
                state,
                counters,
                &mut spawn_worker,
            );
        }

        if counters.shutting_down() {
            tracing::info!("supervisor: shutting down, exiting");
            break;
        }
    }
}

/// One full death-handling cycle for a single reaped PID. Separated from
/// the signal-bridge loop so it is unit-testable with fakes.
pub(crate) fn handle_death<Req, Ack>(
    pid: i32,
    request: &Req,
    ack_nonblocking: &mut Ack,
    state: &SharedStateHandle,
    counters: &Counters,
    spawn_worker: &mut impl FnMut() -> io::Result<u32>,
) where
    Req: SendPort<JobRequest>,
    Ack: TryRecvPort<WorkerAck>,
{
    {
        let mut guard = state.lock();
        guard.workers.remove(pid);
        reconcile_locked(&mut guard, ack_nonblocking);

        match guard.assignment.owner_of(pid) {
            Some(job_id) => {
                guard.assignment.clear(pid);
                if guard.completed.contains(&job_id) {
                    // The worker's response raced its own death and
                    // already landed with the receiver. Resending now
                    // would produce a second response for a job that is
                    // already done.
                    tracing::info!(job_id, pid, "supervisor: job already completed, skipping resend");
                } else {
                    match guard.job_cache.get(job_id) {
                        Some(payload) => {
                            if let Err(err) = request.send(payload) {
                                tracing::warn!(error = %err, job_id, pid, "supervisor: resend failed");
                            } else {
                                tracing::info!(job_id, pid, "supervisor: resent in-flight job after worker death");
                            }
                        }
                        None => {
                            // Every job ever sent on the request channel is
                            // cached first, so this is a tripwire for a bug,
                            // never a normal-operation path.
                            tracing::error!(job_id, pid, "supervisor: job cache missing an owned job");
                        }
                    }
                }
            }
            None => {
                tracing::debug!(pid, "supervisor: dead worker owned no job, nothing to resend");
            }
        }
    }

    if counters.shutting_down() {
        tracing::info!(pid, "supervisor: shutting down, skipping replacement spawn");
        return;
    }

    match spawn_worker() {
        Ok(new_pid) => {
            state.lock().workers.insert(new_pid as i32);
            tracing::info!(old_pid = pid, new_pid, "supervisor: replacement worker spawned");
        }
        Err(err) => {
            tracing::warn!(error = %err, old_pid = pid, "supervisor: fork failed, pool shrinks by one");
        }
    }
}

/// Fold the staging buffer into the assignment table, then drain the
/// non-blocking ack descriptor to exhaustion and fold again, so an ack
/// the dying worker sent moments before death is never missed.
fn reconcile_locked<Ack>(guard: &mut SharedState, ack_nonblocking: &mut Ack)
where
    Ack: TryRecvPort<WorkerAck>,
{
    guard.assignment.reconcile(&mut guard.staging);
    loop {
        match ack_nonblocking.try_recv() {
            Ok(Some(ack)) => guard.staging.push(ack),
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(error = %err, "supervisor: non-blocking ack drain failed");
                break;
            }
        }
    }
    guard.assignment.reconcile(&mut guard.staging);
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
