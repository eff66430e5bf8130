// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::Read;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::sync::atomic::{AtomicI32, Ordering};

use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::unistd;

use crate::error::SignalError;

/// The write end's raw fd, read by the signal handler. A plain static is
/// unavoidable here: the handler is an `extern "C" fn` with no captured
/// state, and writing an `i32` is the only mutation it performs.
static WRITE_FD: AtomicI32 = AtomicI32::new(-1);

/// Writes a single byte to `WRITE_FD`. Async-signal-safe: `write(2)` is on
/// POSIX's safe-function list, and this touches nothing else — no
/// allocation, no locking, no access to the dealer's shared state.
extern "C" fn on_sigchld(_signum: libc::c_int) {
    let fd = WRITE_FD.load(Ordering::Relaxed);
    if fd >= 0 {
        let byte: u8 = 1;
        // SAFETY: `write` is async-signal-safe. `fd` is a valid, open pipe
        // write end for the lifetime of the process once installed; a
        // short write (including EINTR/EAGAIN) is fine to ignore since the
        // supervisor only needs "at least one byte arrived", never an exact
        // count — deaths are expected to coalesce onto fewer bytes.
        unsafe {
            libc::write(fd, &byte as *const u8 as *const libc::c_void, 1);
        }
    }
}

/// The signal-to-thread bridge: a pipe plus an installed `SIGCHLD` handler.
///
/// Only one bridge may be installed per process — the handler writes to
/// whatever fd is currently in `WRITE_FD`, so installing a second bridge
/// would silently redirect the first one's notifications.
pub struct SignalBridge {
    read_end: File,
    _write_end: OwnedFd,
}

impl SignalBridge {
    /// Create the pipe and install the `SIGCHLD` handler, in that order:
    /// the handler must never fire against a fd that hasn't been stored
    /// into `WRITE_FD` yet.
    pub fn install() -> Result<Self, SignalError> {
        let (read_fd, write_fd) = unistd::pipe().map_err(SignalError::PipeCreate)?;

        WRITE_FD.store(write_fd.as_raw_fd(), Ordering::SeqCst);

        let action = SigAction::new(
            SigHandler::Handler(on_sigchld),
            SaFlags::SA_RESTART | SaFlags::SA_NOCLDSTOP,
            SigSet::empty(),
        );
        // SAFETY: `on_sigchld` performs only an async-signal-safe `write`.
        unsafe { signal::sigaction(Signal::SIGCHLD, &action) }
            .map_err(SignalError::HandlerInstall)?;

        let read_end = File::from(read_fd);

        Ok(Self {
            read_end,
            _write_end: write_fd,
        })
    }

    /// Block until at least one `SIGCHLD` notification byte has arrived.
    /// The supervisor always follows this with a `waitpid(WNOHANG)` loop
    /// since one byte can represent multiple deaths.
    pub fn wait_for_notification(&mut self) -> Result<(), SignalError> {
        let mut buf = [0u8; 64];
        let n = self.read_end.read(&mut buf).map_err(SignalError::Read)?;
        if n == 0 {
            return Err(SignalError::Read(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "signal bridge pipe closed",
            )));
        }
        Ok(())
    }
}
