// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tp-core: shared data model for the task pool dealer.
//!
//! Holds the wire records exchanged between Dealer, Worker and Producer, the
//! bookkeeping structures the Dealer keeps about in-flight jobs, and the
//! channel naming convention. No I/O, threading, or process management
//! lives here — those belong to `tp-queue`, `tp-signal`, and `tp-dealer`.

pub mod assignment;
pub mod counters;
pub mod job_cache;
pub mod names;
pub mod record;
pub mod worker_set;

pub use assignment::{AssignmentTable, StagingBuffer};
pub use counters::Counters;
pub use job_cache::{Admission, JobCache};
pub use names::ChannelNames;
pub use record::{JobRequest, JobResponse, WireRecord, WorkerAck, END_OF_STREAM, SHUTDOWN};
pub use worker_set::WorkerSet;
