//! # pkgkit Signal Ownership
//!
//! File: cli/src/common/system/signals.rs
//!
//! ## Overview
//!
//! While an interactive child (a debugger, a serial console) runs in the
//! foreground, Ctrl-C is meant for the child. The terminal delivers `SIGINT`
//! to the whole foreground process group though, so without precautions it
//! would also kill the supervising CLI.
//!
//! [`SignalGuard`] takes ownership of `SIGINT` and `SIGTERM` for as long as
//! it lives: it installs a handler that does nothing, and restores whatever
//! dispositions were in place when it is dropped. Because the signals are
//! *caught* rather than ignored, `exec` resets them to their defaults in the
//! child, which therefore still receives and reacts to them normally.
//!
//! Signal dispositions are process-wide. Guards are serialised through a
//! global lock, so a second guard blocks until the first one is released.
//!
use crate::core::error::{Result, UtilError};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

static SIGNAL_OWNER: Mutex<()> = Mutex::new(());

/// Serialises tests that inspect or change signal dispositions.
#[cfg(test)]
pub(crate) fn test_serial() -> MutexGuard<'static, ()> {
    static SERIAL: Mutex<()> = Mutex::new(());
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scoped ownership of `SIGINT`/`SIGTERM`. Dispositions are restored on drop.
#[derive(Debug)]
pub struct SignalGuard {
    #[cfg(unix)]
    previous: Vec<(libc::c_int, libc::sighandler_t)>,
    _owner: MutexGuard<'static, ()>,
}

#[cfg(unix)]
extern "C" fn swallow(_signum: libc::c_int) {}

#[cfg(unix)]
const OWNED_SIGNALS: [libc::c_int; 2] = [libc::SIGINT, libc::SIGTERM];

impl SignalGuard {
    /// Installs the no-op handlers.
    ///
    /// # Errors
    ///
    /// Fails if the OS rejects a handler; anything already installed is
    /// rolled back first.
    #[cfg(unix)]
    pub fn acquire() -> Result<Self> {
        let owner = SIGNAL_OWNER.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut guard = SignalGuard {
            previous: Vec::with_capacity(OWNED_SIGNALS.len()),
            _owner: owner,
        };
        let handler = swallow as extern "C" fn(libc::c_int) as libc::sighandler_t;
        for signum in OWNED_SIGNALS {
            // SAFETY: `swallow` touches no state, so it is async-signal-safe.
            let previous = unsafe { libc::signal(signum, handler) };
            if previous == libc::SIG_ERR {
                let err = std::io::Error::last_os_error();
                // Dropping `guard` restores the signals handled so far.
                return Err(UtilError::with_source(
                    format!("Failed to intercept signal {}: {}", signum, err),
                    err,
                ));
            }
            guard.previous.push((signum, previous));
        }
        debug!("Intercepting SIGINT and SIGTERM");
        Ok(guard)
    }

    /// Signals are not intercepted on this platform; the guard only
    /// serialises callers.
    #[cfg(not(unix))]
    pub fn acquire() -> Result<Self> {
        let owner = SIGNAL_OWNER.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(SignalGuard { _owner: owner })
    }
}

impl SignalGuard {
    #[cfg(unix)]
    fn restore(&mut self) {
        for (signum, previous) in self.previous.drain(..).rev() {
            // SAFETY: restores a disposition previously returned by `signal`.
            unsafe {
                libc::signal(signum, previous);
            }
        }
    }

    #[cfg(not(unix))]
    fn restore(&mut self) {}
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.restore();
        debug!("Restored SIGINT and SIGTERM handling");
    }
}

// --- Unit Tests ---
#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn recorded_previous() -> Vec<(libc::c_int, libc::sighandler_t)> {
        let guard = SignalGuard::acquire().unwrap();
        guard.previous.clone()
    }

    #[test]
    fn test_guard_swallows_interrupts() {
        let _serial = test_serial();
        let guard = SignalGuard::acquire().unwrap();
        // SAFETY: raising a signal whose handler is `swallow`.
        unsafe {
            assert_eq!(libc::raise(libc::SIGINT), 0);
            assert_eq!(libc::raise(libc::SIGTERM), 0);
        }
        drop(guard);
    }

    #[test]
    fn test_guard_restores_previous_dispositions() {
        let _serial = test_serial();
        let handler = swallow as extern "C" fn(libc::c_int) as libc::sighandler_t;
        let first = recorded_previous();
        let second = recorded_previous();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert!(first.iter().all(|&(_, previous)| previous != handler));
    }
}
