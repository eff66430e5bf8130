// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Lifecycle controller: creates the Queue Plane, spawns the initial
//! pool, starts the four activities, coordinates shutdown, reaps
//! survivors, and unlinks every queue name this Dealer touched.

use std::sync::Arc;
use std::thread;

use nix::sys::wait::waitpid;
use nix::unistd::Pid;
use parking_lot::Mutex;

use tp_core::{ChannelNames, Counters, JobRequest, JobResponse, WorkerAck};
use tp_queue::{Channel, Mode};
use tp_signal::SignalBridge;

use crate::config::DealerConfig;
use crate::error::DealerError;
use crate::spawn::{spawn_worker, WorkerCrashOptions};
use crate::state::SharedState;
use crate::{ack_ingestor, receiver, sender, supervisor};

/// Owns one end-to-end Dealer run.
pub struct Dealer {
    config: DealerConfig,
}

impl Dealer {
    pub fn new(config: DealerConfig) -> Self {
        Self { config }
    }

    /// Run the Dealer to completion: startup, steady state, shutdown.
    /// Returns once every queue this Dealer owns has been unlinked.
    pub fn run(self) -> Result<(), DealerError> {
        let dealer_pid = std::process::id() as i32;
        let names = ChannelNames::for_dealer(dealer_pid, self.config.producer_channel.clone());

        tracing::info!(
            request = %names.request,
            response = %names.response,
            ack = %names.ack,
            "lifecycle: installing signal bridge"
        );
        // Install the bridge before the handler can plausibly fire —
        // `SignalBridge::install` creates the pipe and installs the
        // handler atomically, in that order.
        let bridge = SignalBridge::install()?;

        let request_tx: Channel<JobRequest> =
            Channel::create_with_capacity(&names.request, Mode::WriteOnly, self.config.queue_capacity)?;
        let response_rx: Channel<JobResponse> =
            Channel::create_with_capacity(&names.response, Mode::ReadOnly, self.config.queue_capacity)?;
        let ack_rx: Channel<WorkerAck> =
            Channel::create_with_capacity(&names.ack, Mode::ReadOnly, self.config.queue_capacity)?;

        // The Supervisor's dedicated non-blocking descriptor, and its own
        // write handle for crash resends — separate descriptors from the
        // Sender's, since `request_tx` above is moved into the Sender
        // thread below.
        let ack_nonblocking: Channel<WorkerAck> = Channel::open_nonblocking(&names.ack, Mode::ReadOnly)?;
        let supervisor_request_tx: Channel<JobRequest> = Channel::open_existing(&names.request, Mode::WriteOnly)?;
        // A third write handle, kept by the Lifecycle controller itself
        // for the shutdown-record burst once Sender and Receiver exit.
        let shutdown_request_tx: Channel<JobRequest> = Channel::open_existing(&names.request, Mode::WriteOnly)?;

        let producer_rx: Channel<JobRequest> = Channel::open_existing(&names.producer, Mode::ReadOnly)?;

        let state = Arc::new(Mutex::new(SharedState::new()));
        let counters = Arc::new(Counters::new());

        let crash_options = WorkerCrashOptions::from(&self.config);

        {
            let mut guard = state.lock();
            for i in 0..self.config.pool_size {
                match spawn_worker(&self.config.worker_binary, &names, &crash_options) {
                    Ok(pid) => {
                        guard.workers.insert(pid as i32);
                        tracing::info!(worker_index = i, pid, "lifecycle: spawned worker");
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, worker_index = i, "lifecycle: failed to spawn initial worker");
                    }
                }
            }
        }

        let sender_handle = {
            let state = Arc::clone(&state);
            let counters = Arc::clone(&counters);
            thread::Builder::new()
                .name("tp-sender".into())
                .spawn(move || sender::run(producer_rx, request_tx, &state, &counters))
                .map_err(DealerError::Fork)?
        };

        let receiver_handle = {
            let state = Arc::clone(&state);
            let counters = Arc::clone(&counters);
            thread::Builder::new()
                .name("tp-receiver".into())
                .spawn(move || receiver::run(response_rx, &state, &counters))
                .map_err(DealerError::Fork)?
        };

        // Not joined: once the process is exiting there is nothing left
        // for it to observe, and joining it would require it to notice
        // `shutting_down` between two ack receives, which isn't
        // guaranteed to happen promptly.
        let _ack_ingestor_handle = {
            let state = Arc::clone(&state);
            let counters = Arc::clone(&counters);
            thread::Builder::new()
                .name("tp-ack-ingestor".into())
                .spawn(move || ack_ingestor::run(ack_rx, &state, &counters))
                .map_err(DealerError::Fork)?
        };

        let supervisor_handle = {
            let state = Arc::clone(&state);
            let counters = Arc::clone(&counters);
            let worker_binary = self.config.worker_binary.clone();
            let names_for_spawn = names.clone();
            let crash_options = crash_options.clone();
            thread::Builder::new()
                .name("tp-supervisor".into())
                .spawn(move || {
                    supervisor::run(
                        bridge,
                        supervisor_request_tx,
                        ack_nonblocking,
                        &state,
                        &counters,
                        move || spawn_worker(&worker_binary, &names_for_spawn, &crash_options),
                    )
                })
                .map_err(DealerError::Fork)?
        };

        sender_handle.join().map_err(|_| DealerError::Setup("sender thread panicked".into()))?;
        receiver_handle.join().map_err(|_| DealerError::Setup("receiver thread panicked".into()))?;

        tracing::info!("lifecycle: sender and receiver joined, beginning shutdown");
        counters.set_shutting_down();

        for slot in 0..self.config.pool_size {
            if let Err(err) = shutdown_request_tx.send(JobRequest::shutdown()) {
                tracing::warn!(error = %err, slot, "lifecycle: failed to enqueue shutdown record");
            }
        }

        supervisor_handle
            .join()
            .map_err(|_| DealerError::Setup("supervisor thread panicked".into()))?;
        tracing::info!("lifecycle: supervisor joined");

        // Any worker that died between the shutdown burst and the
        // Supervisor's final shutting_down check may not have been
        // reaped by the Supervisor itself — intentional, since a late
        // death there would only spawn a replacement moments before exit;
        // catch the rest here with a blocking wait.
        let remaining: Vec<i32> = state.lock().workers.iter().collect();
        for pid in remaining {
            match waitpid(Pid::from_raw(pid), None) {
                Ok(_) => {
                    state.lock().workers.remove(pid);
                }
                Err(err) => {
                    tracing::warn!(error = %err, pid, "lifecycle: final reap failed");
                }
            }
        }

        drop(shutdown_request_tx);

        Channel::<JobRequest>::unlink(&names.request)?;
        Channel::<JobResponse>::unlink(&names.response)?;
        Channel::<WorkerAck>::unlink(&names.ack)?;
        if let Err(err) = Channel::<JobRequest>::unlink(&names.producer) {
            tracing::warn!(error = %err, name = %names.producer, "lifecycle: producer queue unlink failed");
        }

        tracing::info!(
            admitted = counters.jobs_admitted(),
            completed = counters.jobs_completed(),
            "lifecycle: shutdown complete"
        );

        Ok(())
    }
}

// No unit tests here: every operation touches real POSIX message queues
// and real child processes. End-to-end coverage lives in the
// workspace-level `tests/specs/` integration suite instead.
