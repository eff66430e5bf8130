// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

/// Setup-fatal errors from installing the signal bridge.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("failed to create signal bridge pipe: {0}")]
    PipeCreate(#[source] nix::Error),

    #[error("failed to install SIGCHLD handler: {0}")]
    HandlerInstall(#[source] nix::Error),

    #[error("signal bridge read end returned an I/O error: {0}")]
    Read(#[source] std::io::Error),
}
