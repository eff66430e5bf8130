// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thin traits over [`tp_queue::Channel`]'s send/receive surface.
//!
//! The activities (`sender`, `receiver`, `ack_ingestor`, `supervisor`) are
//! written generically over these ports instead of the concrete POSIX
//! queue type, so their decision logic can be driven by in-memory fakes in
//! unit tests, matching this codebase's habit of testing orchestration
//! logic against a trait + fake rather than the real adapter (see e.g.
//! `NotifyAdapter`/fakes in the adapters crate this workspace started
//! from).

use tp_core::WireRecord;
use tp_queue::{Channel, QueueError};

/// Blocking receive of one record.
pub trait RecvPort<T> {
    fn recv(&mut self) -> Result<T, QueueError>;
}

/// Non-blocking receive: `Ok(None)` means the port was empty.
pub trait TryRecvPort<T> {
    fn try_recv(&mut self) -> Result<Option<T>, QueueError>;
}

/// Blocking send of one record.
pub trait SendPort<T> {
    fn send(&self, record: T) -> Result<(), QueueError>;
}

impl<T: WireRecord> RecvPort<T> for Channel<T> {
    fn recv(&mut self) -> Result<T, QueueError> {
        Channel::receive(self)
    }
}

impl<T: WireRecord> TryRecvPort<T> for Channel<T> {
    fn try_recv(&mut self) -> Result<Option<T>, QueueError> {
        Channel::try_receive(self)
    }
}

impl<T: WireRecord> SendPort<T> for Channel<T> {
    fn send(&self, record: T) -> Result<(), QueueError> {
        Channel::send(self, record)
    }
}

#[cfg(test)]
pub mod fake {
    //! In-memory fakes for the port traits, used by the activity unit
    //! tests so they exercise real decision logic without opening any
    //! actual POSIX message queue.

    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A fake receive-only port backed by a preloaded queue of records.
    /// Once drained, further `recv` calls return a `Receive` error so
    /// tests can assert on "the producer hung up" without blocking
    /// forever on a real empty queue.
    pub struct FakeSource<T> {
        queue: VecDeque<T>,
    }

    impl<T> FakeSource<T> {
        pub fn new(records: impl IntoIterator<Item = T>) -> Self {
            Self {
                queue: records.into_iter().collect(),
            }
        }
    }

    impl<T> RecvPort<T> for FakeSource<T> {
        fn recv(&mut self) -> Result<T, QueueError> {
            self.queue.pop_front().ok_or_else(|| QueueError::Receive {
                name: "fake".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "fake exhausted"),
            })
        }
    }

    impl<T> TryRecvPort<T> for FakeSource<T> {
        fn try_recv(&mut self) -> Result<Option<T>, QueueError> {
            Ok(self.queue.pop_front())
        }
    }

    /// A fake send-only port that records everything sent to it, so tests
    /// can assert on what the Sender/Supervisor enqueued.
    #[derive(Default)]
    pub struct FakeSink<T> {
        pub sent: Mutex<Vec<T>>,
    }

    impl<T> FakeSink<T> {
        pub fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn drain(&self) -> Vec<T>
        where
            T: Clone,
        {
            self.sent.lock().expect("fake sink mutex poisoned").clone()
        }
    }

    impl<T: Clone> SendPort<T> for FakeSink<T> {
        fn send(&self, record: T) -> Result<(), QueueError> {
            self.sent.lock().expect("fake sink mutex poisoned").push(record);
            Ok(())
        }
    }
}
