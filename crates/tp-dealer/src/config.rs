// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Dealer's tunables: pool size and queue capacity, taken as plain
//! flags with defaults rather than a config file — a single-shot batch
//! dispatcher has no persisted configuration surface worth a `toml`
//! dependency.

/// Default pool size.
pub const DEFAULT_POOL_SIZE: usize = 4;

/// Configuration the Lifecycle controller needs to start a Dealer run.
#[derive(Debug, Clone)]
pub struct DealerConfig {
    /// Name of the externally-owned producer channel.
    pub producer_channel: String,
    /// Number of workers in the pool.
    pub pool_size: usize,
    /// Frame capacity of each Dealer-owned queue.
    pub queue_capacity: usize,
    /// Path to the worker binary the Supervisor and Lifecycle controller
    /// spawn.
    pub worker_binary: std::path::PathBuf,
    /// Per-job crash probability passed through to every spawned worker's
    /// `--crash-probability` flag, a test-mode knob for exercising the
    /// recovery path.
    pub crash_probability: f64,
    /// Deterministic crash hooks and their shared one-shot marker,
    /// forwarded verbatim to every spawned worker (test-mode knobs for
    /// exercising crash-before-ack and crash-after-ack timing).
    pub crash_before_ack_on: Option<i32>,
    pub crash_after_ack_on: Option<i32>,
    pub crash_marker: Option<std::path::PathBuf>,
}

impl DealerConfig {
    pub fn new(producer_channel: impl Into<String>, worker_binary: impl Into<std::path::PathBuf>) -> Self {
        Self {
            producer_channel: producer_channel.into(),
            pool_size: DEFAULT_POOL_SIZE,
            queue_capacity: tp_queue::QUEUE_CAPACITY,
            worker_binary: worker_binary.into(),
            crash_probability: 0.0,
            crash_before_ack_on: None,
            crash_after_ack_on: None,
            crash_marker: None,
        }
    }
}
