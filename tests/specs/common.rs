// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the end-to-end scenario tests (spec.md §8).

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use assert_cmd::Command;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// A channel name unique to this process and this call, so concurrently
/// running tests in one test binary never collide on the kernel's
/// mqueue namespace even though they share a PID.
pub fn unique_channel_name(tag: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("tp_specs_{}_{tag}_{n}", std::process::id())
}

pub fn worker_binary() -> PathBuf {
    assert_cmd::cargo::cargo_bin("tp-worker")
}

pub fn dealer_cmd() -> Command {
    Command::cargo_bin("tp-dealer").expect("tp-dealer binary is built by the workspace")
}

pub fn producer_cmd() -> Command {
    Command::cargo_bin("tp-producer").expect("tp-producer binary is built by the workspace")
}

/// Generous enough for a handful of `fib` calls (unoptimized in a test
/// build) and process spawns under test-machine load, short enough that a
/// genuinely hung Dealer fails the test instead of the test suite itself
/// hanging.
pub const SCENARIO_TIMEOUT: Duration = Duration::from_secs(30);
