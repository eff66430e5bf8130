// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ports::fake::FakeSource;
use crate::state::SharedState;
use parking_lot::Mutex;
use std::sync::Arc;
use tp_core::WorkerAck;

fn new_state() -> SharedStateHandle {
    Arc::new(Mutex::new(SharedState::new()))
}

#[test]
fn ingest_stages_an_ack_without_touching_the_assignment_table() {
    let state = new_state();
    ingest(WorkerAck::new(100, 7), &state);
    ingest(WorkerAck::new(101, 9), &state);

    let guard = state.lock();
    assert_eq!(guard.staging.len(), 2);
    assert!(guard.assignment.is_empty());
}

#[test]
fn exits_immediately_once_shutting_down_is_already_set() {
    let state = new_state();
    let counters = Counters::new();
    counters.set_shutting_down();
    // A populated source is deliberately not drained: shutdown races are
    // intentional here, late acks are observed only if the ingestor gets
    // to them before the shutdown check fires.
    let source: FakeSource<WorkerAck> = FakeSource::new([WorkerAck::new(100, 7)]);

    run(source, &state, &counters);

    assert!(state.lock().staging.is_empty());
}
