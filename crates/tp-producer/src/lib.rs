// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Producer: an external collaborator that emits a finite job stream
//! onto its own channel, then a terminator.
//!
//! The Producer is not part of the Dealer's failure domain — it owns its
//! channel outright and is free to exit once the stream is fully sent.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod error;
mod jobs;

use std::time::Duration;

use tp_core::JobRequest;
use tp_queue::{Channel, Mode};

pub use error::ProducerError;
pub use jobs::{default_jobs, parse_job_list, synthetic_jobs, with_leading_duplicate};

/// What a Producer run was configured with.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the channel this Producer creates and writes to.
    pub channel_name: String,
    /// The job sequence to emit, in order, before the terminator.
    pub jobs: Vec<JobRequest>,
    /// Pause between consecutive sends, so the Dealer's admission/dispatch
    /// pipeline is exercised incrementally rather than in one burst.
    pub delay: Duration,
    /// Capacity of the channel this Producer creates.
    pub queue_capacity: usize,
}

impl Config {
    pub fn new(channel_name: impl Into<String>, jobs: Vec<JobRequest>) -> Self {
        Self {
            channel_name: channel_name.into(),
            jobs,
            delay: Duration::from_millis(100),
            queue_capacity: tp_queue::QUEUE_CAPACITY,
        }
    }
}

/// Create the producer channel, send every configured job with `delay`
/// between sends, then send the end-of-stream terminator and return.
pub fn run(config: Config) -> Result<(), ProducerError> {
    let channel: Channel<JobRequest> =
        Channel::create_with_capacity(&config.channel_name, Mode::WriteOnly, config.queue_capacity)?;

    tracing::info!(
        channel = %config.channel_name,
        jobs = config.jobs.len(),
        "producer: starting up"
    );

    for job in &config.jobs {
        if let Err(err) = channel.send(*job) {
            tracing::warn!(error = %err, job_id = job.job_id, "producer: send failed, retrying");
            continue;
        }
        tracing::debug!(job_id = job.job_id, data = job.data, "producer: sent job");
        if !config.delay.is_zero() {
            std::thread::sleep(config.delay);
        }
    }

    channel.send(JobRequest::end_of_stream())?;
    tracing::info!("producer: end-of-stream sent, exiting");

    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
