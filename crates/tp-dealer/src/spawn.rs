// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Worker process launch: a worker is a fresh process image with the
//! three channel names as positional arguments. Implemented with
//! `std::process::Command` rather than a raw `fork`/`exec` pair — the
//! effect is the same (a new process image attached to the same three
//! channels) without requiring `unsafe_code` in this crate.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tp_core::ChannelNames;

use crate::config::DealerConfig;

/// The worker-launch tunables every spawn (initial pool and every
/// replacement) must receive identically, so a deterministic crash hook
/// targets the job regardless of which physical worker process picks it
/// up.
#[derive(Debug, Clone, Default)]
pub struct WorkerCrashOptions {
    pub probability: f64,
    pub before_ack_on: Option<i32>,
    pub after_ack_on: Option<i32>,
    pub marker: Option<PathBuf>,
}

impl From<&DealerConfig> for WorkerCrashOptions {
    fn from(config: &DealerConfig) -> Self {
        Self {
            probability: config.crash_probability,
            before_ack_on: config.crash_before_ack_on,
            after_ack_on: config.crash_after_ack_on,
            marker: config.crash_marker.clone(),
        }
    }
}

/// Spawn one worker process, returning its PID. The returned `Child` is
/// intentionally dropped without `wait()`-ing: reaping happens uniformly
/// through `waitpid(-1, WNOHANG)` in [`tp_signal::reap_exited`], driven by
/// `SIGCHLD`, regardless of which API forked the child.
pub fn spawn_worker(worker_binary: &Path, names: &ChannelNames, crash: &WorkerCrashOptions) -> io::Result<u32> {
    let mut cmd = Command::new(worker_binary);
    cmd.arg(&names.request)
        .arg(&names.response)
        .arg(&names.ack)
        .arg("--crash-probability")
        .arg(crash.probability.to_string())
        .stdin(Stdio::null());

    if let Some(job_id) = crash.before_ack_on {
        cmd.arg("--crash-before-ack-on").arg(job_id.to_string());
    }
    if let Some(job_id) = crash.after_ack_on {
        cmd.arg("--crash-after-ack-on").arg(job_id.to_string());
    }
    if let Some(marker) = &crash.marker {
        cmd.arg("--crash-marker").arg(marker);
    }

    let child = cmd.spawn()?;
    Ok(child.id())
}
