// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-size wire records shared by the Dealer, Worker and Producer.
//!
//! Frames are native-endian `i32` triples/pairs, laid out with no implicit
//! padding, so the byte form is identical regardless of which binary wrote
//! it. `tp-queue` moves these bytes through POSIX message queues; nothing
//! outside this module should hand-encode the layout.

/// `job_id` value marking end-of-stream on the producer channel.
pub const END_OF_STREAM: i32 = -1;

/// `job_id` value marking a shutdown record on the request channel.
pub const SHUTDOWN: i32 = -2;

/// A record that can be moved through a fixed-size message queue frame.
///
/// Separate from the inherent `to_bytes`/`from_bytes` methods (which return
/// a concretely-sized array per type) so `tp-queue` can be generic over the
/// record kind without const-generic array lengths.
pub trait WireRecord: Sized + Copy {
    const WIRE_SIZE: usize;

    /// Encode into `buf`, which is guaranteed to be at least `WIRE_SIZE`
    /// bytes long.
    fn write_into(self, buf: &mut [u8]);

    /// Decode from `buf`, which may be longer than `WIRE_SIZE` (trailing
    /// bytes are ignored).
    fn read_from(buf: &[u8]) -> Option<Self>;
}

/// A unit of work: sent Producer -> Dealer -> Worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct JobRequest {
    pub job_id: i32,
    pub data: i32,
}

impl JobRequest {
    pub const WIRE_SIZE: usize = 8;

    pub fn new(job_id: i32, data: i32) -> Self {
        Self { job_id, data }
    }

    pub fn end_of_stream() -> Self {
        Self::new(END_OF_STREAM, 0)
    }

    pub fn shutdown() -> Self {
        Self::new(SHUTDOWN, 0)
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.job_id == END_OF_STREAM
    }

    pub fn is_shutdown(&self) -> bool {
        self.job_id == SHUTDOWN
    }

    pub fn to_bytes(self) -> [u8; Self::WIRE_SIZE] {
        let mut buf = [0u8; Self::WIRE_SIZE];
        buf[0..4].copy_from_slice(&self.job_id.to_ne_bytes());
        buf[4..8].copy_from_slice(&self.data.to_ne_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::WIRE_SIZE {
            return None;
        }
        let job_id = i32::from_ne_bytes(buf[0..4].try_into().ok()?);
        let data = i32::from_ne_bytes(buf[4..8].try_into().ok()?);
        Some(Self { job_id, data })
    }
}

impl WireRecord for JobRequest {
    const WIRE_SIZE: usize = Self::WIRE_SIZE;

    fn write_into(self, buf: &mut [u8]) {
        buf[..Self::WIRE_SIZE].copy_from_slice(&self.to_bytes());
    }

    fn read_from(buf: &[u8]) -> Option<Self> {
        Self::from_bytes(buf)
    }
}

/// Result of computing a job: sent Worker -> Dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct JobResponse {
    pub job_id: i32,
    pub result: i32,
    pub worker_pid: i32,
}

impl JobResponse {
    pub const WIRE_SIZE: usize = 12;

    pub fn new(job_id: i32, result: i32, worker_pid: i32) -> Self {
        Self {
            job_id,
            result,
            worker_pid,
        }
    }

    pub fn to_bytes(self) -> [u8; Self::WIRE_SIZE] {
        let mut buf = [0u8; Self::WIRE_SIZE];
        buf[0..4].copy_from_slice(&self.job_id.to_ne_bytes());
        buf[4..8].copy_from_slice(&self.result.to_ne_bytes());
        buf[8..12].copy_from_slice(&self.worker_pid.to_ne_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::WIRE_SIZE {
            return None;
        }
        let job_id = i32::from_ne_bytes(buf[0..4].try_into().ok()?);
        let result = i32::from_ne_bytes(buf[4..8].try_into().ok()?);
        let worker_pid = i32::from_ne_bytes(buf[8..12].try_into().ok()?);
        Some(Self {
            job_id,
            result,
            worker_pid,
        })
    }
}

impl WireRecord for JobResponse {
    const WIRE_SIZE: usize = Self::WIRE_SIZE;

    fn write_into(self, buf: &mut [u8]) {
        buf[..Self::WIRE_SIZE].copy_from_slice(&self.to_bytes());
    }

    fn read_from(buf: &[u8]) -> Option<Self> {
        Self::from_bytes(buf)
    }
}

/// Ownership notification: sent Worker -> Dealer, before computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct WorkerAck {
    pub worker_pid: i32,
    pub job_id: i32,
}

impl WorkerAck {
    pub const WIRE_SIZE: usize = 8;

    pub fn new(worker_pid: i32, job_id: i32) -> Self {
        Self { worker_pid, job_id }
    }

    pub fn to_bytes(self) -> [u8; Self::WIRE_SIZE] {
        let mut buf = [0u8; Self::WIRE_SIZE];
        buf[0..4].copy_from_slice(&self.worker_pid.to_ne_bytes());
        buf[4..8].copy_from_slice(&self.job_id.to_ne_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::WIRE_SIZE {
            return None;
        }
        let worker_pid = i32::from_ne_bytes(buf[0..4].try_into().ok()?);
        let job_id = i32::from_ne_bytes(buf[4..8].try_into().ok()?);
        Some(Self { worker_pid, job_id })
    }
}

impl WireRecord for WorkerAck {
    const WIRE_SIZE: usize = Self::WIRE_SIZE;

    fn write_into(self, buf: &mut [u8]) {
        buf[..Self::WIRE_SIZE].copy_from_slice(&self.to_bytes());
    }

    fn read_from(buf: &[u8]) -> Option<Self> {
        Self::from_bytes(buf)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
