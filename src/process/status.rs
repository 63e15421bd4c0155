//! Cross-platform decoding of a child's exit status.

use std::fmt;
use std::process::ExitStatus;

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    /// Exited on its own with this code.
    Exited(i32),
    /// Terminated by this signal number.
    Signaled(i32),
}

impl ChildStatus {
    /// Decode a platform exit status.
    pub fn from_exit_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildStatus::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signo) = status.signal() {
                return ChildStatus::Signaled(signo);
            }
        }

        // No code and no signal (e.g. stopped); treat as a generic failure.
        ChildStatus::Exited(1)
    }

    pub fn success(&self) -> bool {
        matches!(self, ChildStatus::Exited(0))
    }

    /// The code this process should exit with to mirror the child.
    ///
    /// Signal deaths follow the shell convention of `128 + signo`.
    pub fn exit_code(&self) -> i32 {
        match *self {
            ChildStatus::Exited(code) => code,
            ChildStatus::Signaled(signo) => 128 + signo,
        }
    }
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildStatus::Exited(code) => write!(f, "exited with status {code}"),
            ChildStatus::Signaled(signo) => write!(f, "terminated by signal {signo}"),
        }
    }
}
