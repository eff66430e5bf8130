// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Termination-detection state: two monotonic counters and two flags.
//! Readable without the shared mutex — only the Sender increments
//! `jobs_admitted`, only the Receiver increments `jobs_completed`, so
//! plain atomics are enough to keep the ordering guarantees each side
//! relies on.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Shared counters and shutdown flags. Cheap to clone via `Arc` from every
/// activity thread.
#[derive(Debug, Default)]
pub struct Counters {
    jobs_admitted: AtomicU64,
    jobs_completed: AtomicU64,
    producer_drained: AtomicBool,
    shutting_down: AtomicBool,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called only by the Sender, once per admitted (non-duplicate) job.
    pub fn record_admission(&self) {
        self.jobs_admitted.fetch_add(1, Ordering::SeqCst);
    }

    /// Called only by the Receiver, once per response observed.
    pub fn record_completion(&self) {
        self.jobs_completed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn jobs_admitted(&self) -> u64 {
        self.jobs_admitted.load(Ordering::SeqCst)
    }

    pub fn jobs_completed(&self) -> u64 {
        self.jobs_completed.load(Ordering::SeqCst)
    }

    /// Set by the Sender before it exits its loop.
    pub fn set_producer_drained(&self) {
        self.producer_drained.store(true, Ordering::SeqCst);
    }

    pub fn producer_drained(&self) -> bool {
        self.producer_drained.load(Ordering::SeqCst)
    }

    /// Set by the Lifecycle controller once Sender and Receiver have
    /// joined, before shutdown records are enqueued.
    pub fn set_shutting_down(&self) {
        self.shutting_down.store(true, Ordering::SeqCst);
    }

    pub fn shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::SeqCst)
    }

    /// The Dealer should exit once the producer is drained and every
    /// admitted job has completed.
    pub fn is_terminated(&self) -> bool {
        self.producer_drained() && self.jobs_completed() == self.jobs_admitted()
    }
}

#[cfg(test)]
#[path = "counters_tests.rs"]
mod tests;
