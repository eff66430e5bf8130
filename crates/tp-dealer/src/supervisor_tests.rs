// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ports::fake::{FakeSink, FakeSource};
use crate::state::SharedState;
use parking_lot::Mutex;
use std::sync::Arc;
use tp_core::{JobRequest, WorkerAck};

fn new_state() -> SharedStateHandle {
    Arc::new(Mutex::new(SharedState::new()))
}

fn spawn_ok(pid: u32) -> impl FnMut() -> io::Result<u32> {
    move || Ok(pid)
}

fn spawn_fails() -> impl FnMut() -> io::Result<u32> {
    move || Err(io::Error::other("fork failed"))
}

/// Tie-break matrix: whether an ack for the dying worker was already
/// reconciled into the assignment table, or is still sitting in the
/// non-blocking ack descriptor, or never arrived at all — in every case
/// where an ack *did* arrive, the resend must happen.
#[yare::parameterized(
    ack_already_in_assignment_table = { true, false },
    ack_still_in_nonblocking_queue  = { false, true },
)]
fn death_with_an_ack_always_resends_the_owned_job(pre_reconciled: bool, queued_in_ack_port: bool) {
    let state = new_state();
    {
        let mut guard = state.lock();
        guard.job_cache.offer(JobRequest::new(7, 40));
        if pre_reconciled {
            guard.staging.push(WorkerAck::new(100, 7));
            guard.assignment.reconcile(&mut guard.staging);
        }
    }
    let mut ack_port: FakeSource<WorkerAck> = if queued_in_ack_port {
        FakeSource::new([WorkerAck::new(100, 7)])
    } else {
        FakeSource::new([])
    };
    let request = FakeSink::new();
    let counters = Counters::new();
    let mut spawn = spawn_ok(555);

    handle_death(100, &request, &mut ack_port, &state, &counters, &mut spawn);

    assert_eq!(request.drain(), vec![JobRequest::new(7, 40)]);
    assert_eq!(state.lock().assignment.owner_of(100), None);
    assert!(state.lock().workers.contains(555));
    assert!(!state.lock().workers.contains(100));
}

#[test]
fn death_with_no_ack_ever_sent_does_not_resend() {
    let state = new_state();
    let mut ack_port: FakeSource<WorkerAck> = FakeSource::new([]);
    let request = FakeSink::new();
    let counters = Counters::new();
    let mut spawn = spawn_ok(555);

    handle_death(200, &request, &mut ack_port, &state, &counters, &mut spawn);

    assert!(request.drain().is_empty());
    assert!(state.lock().workers.contains(555));
}

#[test]
fn fork_failure_is_logged_and_pool_shrinks_by_one() {
    let state = new_state();
    state.lock().workers.insert(100);
    let mut ack_port: FakeSource<WorkerAck> = FakeSource::new([]);
    let request: FakeSink<JobRequest> = FakeSink::new();
    let counters = Counters::new();
    let mut spawn = spawn_fails();

    handle_death(100, &request, &mut ack_port, &state, &counters, &mut spawn);

    assert!(!state.lock().workers.contains(100));
    assert_eq!(state.lock().workers.len(), 0);
}

#[test]
fn shutting_down_skips_replacement_spawn_but_still_resends() {
    let state = new_state();
    {
        let mut guard = state.lock();
        guard.job_cache.offer(JobRequest::new(9, 20));
        guard.staging.push(WorkerAck::new(100, 9));
        guard.assignment.reconcile(&mut guard.staging);
    }
    let mut ack_port: FakeSource<WorkerAck> = FakeSource::new([]);
    let request = FakeSink::new();
    let counters = Counters::new();
    counters.set_shutting_down();
    let mut spawn = spawn_ok(555);

    handle_death(100, &request, &mut ack_port, &state, &counters, &mut spawn);

    assert_eq!(request.drain(), vec![JobRequest::new(9, 20)]);
    assert!(!state.lock().workers.contains(555));
}

#[test]
fn death_after_response_already_observed_skips_resend() {
    // The worker acked, then its response landed with the Receiver before
    // its death was reaped. Resending now would produce a duplicate
    // completion for the same job.
    let state = new_state();
    {
        let mut guard = state.lock();
        guard.job_cache.offer(JobRequest::new(7, 40));
        guard.staging.push(WorkerAck::new(100, 7));
        guard.assignment.reconcile(&mut guard.staging);
        guard.completed.insert(7);
    }
    let mut ack_port: FakeSource<WorkerAck> = FakeSource::new([]);
    let request = FakeSink::new();
    let counters = Counters::new();
    let mut spawn = spawn_ok(555);

    handle_death(100, &request, &mut ack_port, &state, &counters, &mut spawn);

    assert!(request.drain().is_empty());
    assert_eq!(state.lock().assignment.owner_of(100), None);
    assert!(state.lock().workers.contains(555));
}

#[test]
fn dead_workers_job_cache_entry_missing_is_logged_not_panicked() {
    // Simulates a job cache inconsistency (should never happen in
    // practice, since every sent job is cached first) to confirm the
    // tripwire path does not panic the Supervisor.
    let state = new_state();
    {
        let mut guard = state.lock();
        guard.staging.push(WorkerAck::new(100, 999));
        guard.assignment.reconcile(&mut guard.staging);
    }
    let mut ack_port: FakeSource<WorkerAck> = FakeSource::new([]);
    let request: FakeSink<JobRequest> = FakeSink::new();
    let counters = Counters::new();
    let mut spawn = spawn_ok(555);

    handle_death(100, &request, &mut ack_port, &state, &counters, &mut spawn);

    assert!(request.drain().is_empty());
    assert!(state.lock().workers.contains(555));
}
