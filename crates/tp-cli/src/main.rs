// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tp` binary entry point: process-launch glue that ties the Producer
//! and Dealer binaries together into one runnable command.
//!
//! Derives a producer channel name from this process's own PID, launches
//! a producer and a dealer as child processes, and waits on both so its
//! own exit code reflects the run's outcome and so assert_cmd-style tests
//! can drive it synchronously.

mod binary_finder;

use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};
use clap::Parser;

use binary_finder::find_sibling_binary;

/// Launch a Producer and a Dealer wired together on a fresh channel name.
#[derive(Debug, Parser)]
#[command(name = "tp", version, about)]
struct Args {
    /// Number of worker processes in the dealer's pool.
    #[arg(long, default_value_t = 4)]
    pool_size: usize,

    /// Frame capacity of each Dealer-owned queue.
    #[arg(long, default_value_t = 10)]
    queue_capacity: usize,

    /// Emit `COUNT` synthetic jobs from the Producer instead of its
    /// built-in 12-job list.
    #[arg(long)]
    count: Option<usize>,

    /// Pause between Producer sends, in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Per-job probability that a worker simulates a crash.
    #[arg(long, default_value_t = 0.0)]
    crash_probability: f64,
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

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tp: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let channel_name = format!("/tp_gen_{}", std::process::id());

    let producer_bin = find_sibling_binary("tp-producer");
    let dealer_bin = find_sibling_binary("tp-dealer");
    let worker_bin = find_sibling_binary("tp-worker");

    let mut producer_cmd = Command::new(&producer_bin);
    producer_cmd
        .arg(&channel_name)
        .arg("--delay-ms")
        .arg(args.delay_ms.to_string());
    if let Some(count) = args.count {
        producer_cmd.arg("--count").arg(count.to_string());
    }
    let mut producer = producer_cmd
        .spawn()
        .with_context(|| format!("failed to launch producer binary at {}", producer_bin.display()))?;

    let mut dealer = Command::new(&dealer_bin)
        .arg(&channel_name)
        .arg("--pool-size")
        .arg(args.pool_size.to_string())
        .arg("--queue-capacity")
        .arg(args.queue_capacity.to_string())
        .arg("--worker-binary")
        .arg(&worker_bin)
        .arg("--crash-probability")
        .arg(args.crash_probability.to_string())
        .spawn()
        .with_context(|| format!("failed to launch dealer binary at {}", dealer_bin.display()))?;

    let dealer_status = dealer.wait().context("failed to wait on dealer process")?;
    let producer_status = producer.wait().context("failed to wait on producer process")?;

    if !producer_status.success() {
        tracing::warn!(status = %producer_status, "tp: producer exited non-zero");
    }

    if !dealer_status.success() {
        bail!("dealer exited with status: {dealer_status}");
    }

    Ok(())
}
