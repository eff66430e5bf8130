// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tp-queue: the Queue Plane.
//!
//! Four bounded, fixed-frame POSIX message queues: *producer* (read-only,
//! externally named), *request*/*response*/*ack* (created by the Dealer,
//! named from its own PID). Built on the `posixmq` crate rather than
//! hand-rolled `libc::mq_*` calls, matching this codebase's habit of
//! leaning on a focused crate for a POSIX subsystem instead of reproducing
//! its FFI surface locally.

mod channel;
mod error;

pub use channel::{Channel, Mode};
pub use error::QueueError;

/// Every Dealer-owned queue holds at most this many frames.
pub const QUEUE_CAPACITY: usize = 10;
