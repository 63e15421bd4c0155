//! Signals sent to randoo reach the child.
#![cfg(unix)]

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

const SCRIPT: &str = r#"trap 'echo usr1' USR1; trap 'echo usr2' USR2; echo ready; while :; do sleep 0.05; done"#;

fn kill(pid: u32, sig: libc::c_int) {
    let rc = unsafe { libc::kill(pid as libc::pid_t, sig) };
    assert_eq!(rc, 0, "kill failed");
}

#[test]
fn test_signals_are_relayed_to_child() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_randoo"))
        .env("RANDOO_CONFIG", "/nonexistent/randoo-tests/config.toml")
        .env_remove("RANDOO_LOG")
        .args(["-s", "X", "sh", "-c", SCRIPT, "X"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn randoo");
    let pid = child.id();

    let stdout = child.stdout.take().expect("stdout is piped");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    let next_line = || rx.recv_timeout(Duration::from_secs(10)).expect("timed out");

    assert_eq!(next_line(), "ready");

    kill(pid, libc::SIGUSR1);
    assert_eq!(next_line(), "usr1");

    kill(pid, libc::SIGUSR2);
    assert_eq!(next_line(), "usr2");

    kill(pid, libc::SIGUSR1);
    assert_eq!(next_line(), "usr1");

    // No trap for TERM: the child dies and randoo mirrors it.
    kill(pid, libc::SIGTERM);
    let status = child.wait().expect("Failed to wait for randoo");
    assert_eq!(status.code(), Some(128 + libc::SIGTERM));
}
