// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tp-producer` binary entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tp_core::JobRequest;
use tp_producer::{default_jobs, parse_job_list, run, synthetic_jobs, with_leading_duplicate, Config};

/// Producer process: emits a finite job stream onto its own channel, then
/// an end-of-stream terminator.
#[derive(Debug, Parser)]
#[command(name = "tp-producer", version, about)]
struct Args {
    /// Name of the channel this Producer creates.
    channel_name: String,

    /// Pause between sends, in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Emit `COUNT` synthetic jobs instead of the built-in 12-job list.
    #[arg(long, conflicts_with = "jobs")]
    count: Option<usize>,

    /// Emit exactly this `job_id:data,job_id:data,...` sequence instead of
    /// the built-in 12-job list (lets integration tests pin an exact
    /// scenario).
    #[arg(long, value_parser = parse_job_list)]
    jobs: Option<Vec<JobRequest>>,

    /// Duplicate the first job in the sequence (exercises the Dealer's
    /// admission-uniqueness guarantee).
    #[arg(long, default_value_t = false)]
    duplicate_first: bool,

    /// Capacity of the channel this Producer creates.
    #[arg(long)]
    queue_capacity: Option<usize>,
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

    let mut jobs = match (args.jobs, args.count) {
        (Some(jobs), _) => jobs,
        (None, Some(count)) => synthetic_jobs(count),
        (None, None) => default_jobs(),
    };
    if args.duplicate_first {
        jobs = with_leading_duplicate(jobs);
    }

    let mut config = Config::new(args.channel_name, jobs);
    config.delay = Duration::from_millis(args.delay_ms);
    if let Some(capacity) = args.queue_capacity {
        config.queue_capacity = capacity;
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "tp-producer: fatal error");
            eprintln!("tp-producer: {err}");
            ExitCode::FAILURE
        }
    }
}
