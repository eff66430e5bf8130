// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Dealer's single coarse-grained lock: the job cache, assignment
//! table, staging buffer and worker set are heterogeneous but small, and
//! the Supervisor's correctness depends on observing all four atomically
//! at reconcile time. Counters and flags live outside the lock as atomics
//! ([`tp_core::Counters`]) since only one activity ever writes each of
//! them.

use std::collections::HashSet;

use parking_lot::Mutex;
use tp_core::{AssignmentTable, JobCache, StagingBuffer, WorkerSet};

/// Everything guarded by the Dealer's one mutex.
#[derive(Debug, Default)]
pub struct SharedState {
    pub job_cache: JobCache,
    pub assignment: AssignmentTable,
    pub staging: StagingBuffer,
    pub workers: WorkerSet,
    /// Job ids the Receiver has already observed a response for: a worker
    /// that acked and then died *after* its response had already landed
    /// must not trigger a resend, or the same job would complete twice.
    pub completed: HashSet<i32>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Convenience alias: every activity gets a clone of this.
pub type SharedStateHandle = std::sync::Arc<Mutex<SharedState>>;
