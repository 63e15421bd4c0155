//! Process supervisor: spawn, relay, wait, report.

#[cfg(unix)]
use std::io;
use std::process::Stdio;

use tokio::process::Command;

use crate::args::SpawnParams;
use crate::error::RandooError;
use crate::process::relay::{SignalSubscription, DEFAULT_QUEUE_CAPACITY};
use crate::process::status::ChildStatus;

/// Runs one child process to completion while relaying signals to it.
#[derive(Debug, Clone)]
pub struct Supervisor {
    queue_capacity: usize,
}

impl Supervisor {
    pub fn new(queue_capacity: usize) -> Self {
        Self { queue_capacity }
    }

    /// Spawn `params` with inherited stdio and wait for it to finish.
    ///
    /// Signals received while the child runs are forwarded to it. The
    /// relay is torn down before this returns, on every path.
    pub async fn run(&self, params: &SpawnParams) -> Result<ChildStatus, RandooError> {
        let subscription = SignalSubscription::install().map_err(RandooError::Relay)?;

        let mut child = Command::new(&params.command)
            .args(&params.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RandooError::Spawn {
                program: params.command.clone(),
                source,
            })?;

        let pid = child.id();
        let relay = pid.map(|pid| subscription.start(pid, self.queue_capacity));
        tracing::info!(command = %params.command, ?pid, "child spawned");

        // The relay must stop before the child is reaped: once reaped, its
        // pid can be handed to an unrelated process.
        if let Some(relay) = relay {
            #[cfg(unix)]
            {
                if let Some(pid) = pid {
                    wait_exited_unreaped(pid).await;
                }
            }
            relay.shutdown().await;
        }

        let waited = child.wait().await;

        let status = ChildStatus::from_exit_status(waited.map_err(RandooError::Wait)?);
        tracing::info!(%status, "child finished");
        Ok(status)
    }
}

/// Block until `pid` has exited, leaving it unreaped.
///
/// The zombie keeps the pid reserved, so anything forwarded meanwhile can
/// only reach this child.
#[cfg(unix)]
async fn wait_exited_unreaped(pid: u32) {
    match tokio::task::spawn_blocking(move || waitid_nowait(pid)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(pid, error = %e, "waitid failed"),
        Err(e) => tracing::warn!(pid, error = %e, "waitid task failed"),
    }
}

#[cfg(unix)]
fn waitid_nowait(pid: u32) -> io::Result<()> {
    loop {
        // SAFETY: all-zero is a valid siginfo_t, and `info` outlives the call.
        let mut info: libc::siginfo_t = unsafe { std::mem::zeroed() };
        let rc = unsafe {
            libc::waitid(
                libc::P_PID,
                pid as libc::id_t,
                &mut info,
                libc::WEXITED | libc::WNOWAIT,
            )
        };
        if rc == 0 {
            return Ok(());
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}
