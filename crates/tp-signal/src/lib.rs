// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tp-signal: the signal-to-thread bridge.
//!
//! Converts the asynchronous, preemptive `SIGCHLD` notification into a
//! cooperative event source a thread can block on: the handler's only job
//! is to write one byte to a pipe, which is the one thing POSIX guarantees
//! is async-signal-safe here. Everything else — reaping, reconciling
//! ownership, resending, forking a replacement — happens on an ordinary
//! thread with no signal-context restrictions.

mod bridge;
mod error;
mod reap;

pub use bridge::SignalBridge;
pub use error::SignalError;
pub use reap::{reap_exited, Exited};
