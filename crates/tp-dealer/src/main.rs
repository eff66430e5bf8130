// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tp-dealer` binary entry point.
//!
//! Takes exactly one positional argument — the producer channel name —
//! plus the ambient tunables below. Exit 0 on clean shutdown, 1 on
//! argument error or fatal setup failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tp_dealer::{Dealer, DealerConfig};

/// Fault-tolerant task dispatcher.
#[derive(Debug, Parser)]
#[command(name = "tp-dealer", version, about)]
struct Args {
    /// Name of the producer's message queue (the Dealer opens, never
    /// creates, this channel).
    producer_channel: String,

    /// Number of worker processes in the pool.
    #[arg(long, default_value_t = tp_dealer::config::DEFAULT_POOL_SIZE)]
    pool_size: usize,

    /// Frame capacity of each Dealer-owned queue.
    #[arg(long, default_value_t = tp_queue::QUEUE_CAPACITY)]
    queue_capacity: usize,

    /// Path to the worker binary to spawn.
    #[arg(long, default_value = "tp-worker")]
    worker_binary: PathBuf,

    /// Per-job probability, in `[0.0, 1.0]`, that a spawned worker
    /// simulates a crash.
    #[arg(long, default_value_t = 0.0)]
    crash_probability: f64,

    /// Forwarded to every spawned worker's `--crash-before-ack-on`.
    #[arg(long)]
    crash_before_ack_on: Option<i32>,

    /// Forwarded to every spawned worker's `--crash-after-ack-on`.
    #[arg(long)]
    crash_after_ack_on: Option<i32>,

    /// Forwarded to every spawned worker's `--crash-marker`.
    #[arg(long)]
    crash_marker: Option<PathBuf>,
}

fn init_tracing() {
    use std::io::IsTerminal;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let mut config = DealerConfig::new(args.producer_channel, args.worker_binary);
    config.pool_size = args.pool_size;
    config.queue_capacity = args.queue_capacity;
    config.crash_probability = args.crash_probability;
    config.crash_before_ack_on = args.crash_before_ack_on;
    config.crash_after_ack_on = args.crash_after_ack_on;
    config.crash_marker = args.crash_marker;

    match Dealer::new(config).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "tp-dealer: fatal error");
            eprintln!("tp-dealer: {err}");
            ExitCode::FAILURE
        }
    }
}
