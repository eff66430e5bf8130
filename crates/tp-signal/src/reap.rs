// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Non-blocking reaping of exited children.
//!
//! A single `SIGCHLD` wakeup can coalesce several deaths into one pipe
//! byte, so the supervisor always drains this to exhaustion rather than
//! reaping once per wakeup.

use nix::errno::Errno;
use nix::sys::wait::{self, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

/// One child that has exited, reaped via `waitpid(-1, WNOHANG)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exited {
    pub pid: i32,
}

/// Reap every currently-exited child with a single non-blocking
/// `waitpid(-1, WNOHANG)` loop, returning one [`Exited`] per reaped PID.
///
/// Stops when `waitpid` reports no children changed state
/// (`WaitStatus::StillAlive`) or when there are no children left to wait
/// for (`ECHILD`, which is not an error here — it just means the pool is
/// currently empty).
pub fn reap_exited() -> Vec<Exited> {
    let mut reaped = Vec::new();
    loop {
        match wait::waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => break,
            Ok(WaitStatus::Exited(pid, _code)) | Ok(WaitStatus::Signaled(pid, _, _)) => {
                reaped.push(Exited { pid: pid.as_raw() });
            }
            // Stopped/Continued/PtraceEvent etc. don't represent a death;
            // keep looping to drain whatever else is pending.
            Ok(_) => continue,
            Err(Errno::ECHILD) => break,
            Err(Errno::EINTR) => continue,
            Err(_) => break,
        }
    }
    reaped
}

#[cfg(test)]
#[path = "reap_tests.rs"]
mod tests;
