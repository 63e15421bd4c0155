//! Signal relay: forward every signal we receive to the child.
//!
//! Interception is split in two so that nothing is lost around the spawn:
//! [`SignalSubscription::install`] registers the handlers (signals arriving
//! from then on are queued), and [`SignalSubscription::start`] begins
//! forwarding once the child's pid is known.
//!
//! ```text
//! kernel ─► signal-hook ─► intake thread ─► mpsc (bounded) ─► relay task ─► kill(pid)
//! ```
//!
//! The intake thread blocks when the queue is full rather than dropping.
//! Dropping a [`SignalRelay`] closes the subscription; the intake thread
//! then exits, the sender is dropped and the relay task drains and ends.

use std::io;
use std::os::raw::c_int;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[cfg(unix)]
use signal_hook::consts::signal::{
    SIGABRT, SIGALRM, SIGCONT, SIGHUP, SIGINT, SIGIO, SIGPIPE, SIGPROF, SIGQUIT, SIGTERM,
    SIGTSTP, SIGTTIN, SIGTTOU, SIGUSR1, SIGUSR2, SIGVTALRM, SIGWINCH, SIGXCPU, SIGXFSZ,
};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Default capacity of the relay queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 512;

/// Signals forwarded to the child.
///
/// Uncatchable (KILL, STOP), synchronous fault signals (ILL, FPE, SEGV,
/// BUS, TRAP, SYS) and our own reaping/OOB notifications (CHLD, URG) are
/// left alone.
#[cfg(unix)]
pub const RELAYED_SIGNALS: &[c_int] = &[
    SIGHUP, SIGINT, SIGQUIT, SIGABRT, SIGUSR1, SIGUSR2, SIGPIPE, SIGALRM, SIGTERM, SIGCONT,
    SIGTSTP, SIGTTIN, SIGTTOU, SIGWINCH, SIGXCPU, SIGXFSZ, SIGVTALRM, SIGPROF, SIGIO,
];

#[cfg(not(unix))]
pub const RELAYED_SIGNALS: &[c_int] = &[];

/// Registered signal handlers that are not yet forwarding anywhere.
pub struct SignalSubscription {
    #[cfg(unix)]
    signals: Signals,
}

impl SignalSubscription {
    /// Register handlers for [`RELAYED_SIGNALS`].
    pub fn install() -> io::Result<Self> {
        #[cfg(unix)]
        {
            let signals = Signals::new(RELAYED_SIGNALS)?;
            return Ok(Self { signals });
        }

        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Start forwarding queued and future signals to `pid`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self, pid: u32, capacity: usize) -> SignalRelay {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let task = tokio::spawn(forward_all(rx, move |sig| send_signal(pid, sig)));

        #[cfg(unix)]
        {
            let mut signals = self.signals;
            let handle = signals.handle();
            let intake = std::thread::spawn(move || {
                for sig in signals.forever() {
                    if tx.blocking_send(sig).is_err() {
                        break;
                    }
                }
            });
            tracing::debug!(pid, capacity, "signal relay started");
            return SignalRelay {
                handle,
                intake: Some(intake),
                task: Some(task),
            };
        }

        #[cfg(not(unix))]
        {
            let _ = (self, pid);
            drop(tx);
            SignalRelay { task: Some(task) }
        }
    }
}

/// A running relay. Teardown happens on [`SignalRelay::shutdown`] or drop.
pub struct SignalRelay {
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
    #[cfg(unix)]
    intake: Option<std::thread::JoinHandle<()>>,
    task: Option<JoinHandle<usize>>,
}

impl SignalRelay {
    /// Unsubscribe, drain the queue and wait for the relay task.
    ///
    /// Returns how many signals were forwarded.
    pub async fn shutdown(mut self) -> usize {
        self.close();

        let forwarded = match self.task.take() {
            Some(task) => task.await.unwrap_or(0),
            None => 0,
        };

        #[cfg(unix)]
        {
            if let Some(intake) = self.intake.take() {
                let _ = intake.join();
            }
        }

        tracing::debug!(forwarded, "signal relay stopped");
        forwarded
    }

    fn close(&self) {
        #[cfg(unix)]
        {
            self.handle.close();
        }
    }
}

impl Drop for SignalRelay {
    fn drop(&mut self) {
        self.close();
    }
}

/// Receive signals until the channel closes, handing each to `forward`.
///
/// Returns the number of successful forwards.
pub async fn forward_all<F>(mut rx: mpsc::Receiver<c_int>, mut forward: F) -> usize
where
    F: FnMut(c_int) -> io::Result<()>,
{
    let mut forwarded = 0;
    while let Some(sig) = rx.recv().await {
        match forward(sig) {
            Ok(()) => {
                forwarded += 1;
                tracing::debug!(signal = sig, "forwarded signal");
            }
            Err(e) => {
                tracing::warn!(signal = sig, error = %e, "failed to forward signal");
            }
        }
    }
    forwarded
}

#[cfg(unix)]
fn send_signal(pid: u32, sig: c_int) -> io::Result<()> {
    let pid = libc::pid_t::try_from(pid)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "pid out of range"))?;
    // SAFETY: kill(2) has no memory-safety preconditions.
    let rc = unsafe { libc::kill(pid, sig) };
    if rc == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
fn send_signal(_pid: u32, _sig: c_int) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "signal forwarding is only supported on unix",
    ))
}
