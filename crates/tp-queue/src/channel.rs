// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io;
use std::marker::PhantomData;

use posixmq::PosixMq;
use tp_core::WireRecord;

use crate::error::QueueError;
use crate::QUEUE_CAPACITY;

/// Direction a [`Channel`] is opened in, from the Dealer's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ReadOnly,
    WriteOnly,
}

/// A single fixed-frame POSIX message queue, typed to one [`WireRecord`].
///
/// Wraps `posixmq::PosixMq` so every send/receive goes through one place
/// that knows the frame layout, instead of each caller re-deriving
/// `T::WIRE_SIZE` buffers inline.
pub struct Channel<T: WireRecord> {
    name: String,
    mq: PosixMq,
    scratch: Vec<u8>,
    _record: PhantomData<T>,
}

impl<T: WireRecord> Channel<T> {
    /// Create and open a Dealer-owned queue (request/response/ack) with
    /// the default capacity. Failure here is setup-fatal.
    pub fn create(name: &str, mode: Mode) -> Result<Self, QueueError> {
        Self::create_with_capacity(name, mode, QUEUE_CAPACITY)
    }

    /// Same as [`Channel::create`] but with an explicit capacity, so the
    /// Lifecycle controller can honor a configured queue depth instead of
    /// always hard-coding it.
    pub fn create_with_capacity(name: &str, mode: Mode, capacity: usize) -> Result<Self, QueueError> {
        let opts = match mode {
            Mode::ReadOnly => posixmq::OpenOptions::readonly(),
            Mode::WriteOnly => posixmq::OpenOptions::writeonly(),
        };
        let mq = opts
            .create()
            .capacity(capacity as isize)
            .max_msg_len(T::WIRE_SIZE)
            .mode(0o600)
            .open(name)
            .map_err(|source| QueueError::Create {
                name: name.to_string(),
                source,
            })?;
        Ok(Self::wrap(name, mq))
    }

    /// Open a queue this process does not own (the producer channel,
    /// created by the Producer).
    pub fn open_existing(name: &str, mode: Mode) -> Result<Self, QueueError> {
        let opts = match mode {
            Mode::ReadOnly => posixmq::OpenOptions::readonly(),
            Mode::WriteOnly => posixmq::OpenOptions::writeonly(),
        };
        let mq = opts
            .open(name)
            .map_err(|source| QueueError::Open {
                name: name.to_string(),
                source,
            })?;
        Ok(Self::wrap(name, mq))
    }

    fn wrap(name: &str, mq: PosixMq) -> Self {
        Self {
            name: name.to_string(),
            mq,
            scratch: vec![0u8; T::WIRE_SIZE.max(64)],
            _record: PhantomData,
        }
    }

    /// Open a second, non-blocking descriptor onto the same queue name.
    /// Used by the Supervisor to drain the ack channel ahead of the
    /// Ingestor at reconcile time without risking a blocking read inside
    /// the reconcile critical section.
    pub fn open_nonblocking(name: &str, mode: Mode) -> Result<Self, QueueError> {
        let opts = match mode {
            Mode::ReadOnly => posixmq::OpenOptions::readonly(),
            Mode::WriteOnly => posixmq::OpenOptions::writeonly(),
        };
        let mq = opts
            .nonblocking()
            .open(name)
            .map_err(|source| QueueError::Open {
                name: name.to_string(),
                source,
            })?;
        Ok(Self::wrap(name, mq))
    }

    /// Blocking send; blocks while the queue is full.
    pub fn send(&self, record: T) -> Result<(), QueueError> {
        let mut buf = vec![0u8; T::WIRE_SIZE];
        record.write_into(&mut buf);
        self.mq
            .send(0, &buf)
            .map_err(|source| QueueError::Send {
                name: self.name.clone(),
                source,
            })
    }

    /// Blocking receive; blocks while the queue is empty.
    pub fn receive(&mut self) -> Result<T, QueueError> {
        let (len, _priority) =
            self.mq
                .recv(&mut self.scratch)
                .map_err(|source| QueueError::Receive {
                    name: self.name.clone(),
                    source,
                })?;
        T::read_from(&self.scratch[..len]).ok_or_else(|| QueueError::Malformed {
            name: self.name.clone(),
        })
    }

    /// Non-blocking receive: `Ok(None)` means the queue was empty, which
    /// is never an error.
    pub fn try_receive(&mut self) -> Result<Option<T>, QueueError> {
        match self.mq.recv(&mut self.scratch) {
            Ok((len, _priority)) => T::read_from(&self.scratch[..len])
                .ok_or_else(|| QueueError::Malformed {
                    name: self.name.clone(),
                })
                .map(Some),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(source) => Err(QueueError::Receive {
                name: self.name.clone(),
                source,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unlink a Dealer-owned queue name from the kernel namespace. Safe to
    /// call after every descriptor onto it has been dropped.
    pub fn unlink(name: &str) -> Result<(), QueueError> {
        posixmq::remove_queue(name).map_err(|source| QueueError::Unlink {
            name: name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
