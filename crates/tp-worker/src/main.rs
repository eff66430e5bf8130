// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tp-worker` binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tp_worker::{run, Config};

/// Worker process: computes one job at a time until told to shut down.
#[derive(Debug, Parser)]
#[command(name = "tp-worker", version, about)]
struct Args {
    /// Request channel name.
    request: String,
    /// Response channel name.
    response: String,
    /// Ack channel name.
    ack: String,

    /// Probability of a simulated crash after computing a job and before
    /// responding.
    #[arg(long, default_value_t = 0.0)]
    crash_probability: f64,

    /// Deterministically crash upon receiving this job id, before acking.
    #[arg(long)]
    crash_before_ack_on: Option<i32>,

    /// Deterministically crash upon receiving this job id, after acking.
    #[arg(long)]
    crash_after_ack_on: Option<i32>,

    /// One-shot marker file path making the above hooks fire at most once
    /// across the original worker and every replacement.
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
    let config = Config {
        request: args.request,
        response: args.response,
        ack: args.ack,
        crash_probability: args.crash_probability,
        crash_before_ack_on: args.crash_before_ack_on,
        crash_after_ack_on: args.crash_after_ack_on,
        crash_marker: args.crash_marker,
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "tp-worker: fatal error");
            eprintln!("tp-worker: {err}");
            ExitCode::FAILURE
        }
    }
}
