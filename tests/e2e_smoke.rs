//! E2E smoke tests for the aelist binary
//!
//! These tests drive the compiled binary through a pseudo-terminal and check
//! that every way out of the loop ends with exit status 0.
//! They are gated behind the `e2e-tests` feature flag.
//!
//! Run with: `cargo test --features e2e-tests`

#![cfg(feature = "e2e-tests")]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

use expectrl::{ControlCode, Eof, Regex, Session};
use tempfile::TempDir;

fn write_script(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Spawn aelist on `bin_dir` with config and logs kept inside `state_dir`.
fn spawn_aelist(bin_dir: &Path, state_dir: &Path, extra: &[&str]) -> Session {
    let mut command = Command::new(env!("CARGO_BIN_EXE_aelist"));
    command
        .args(extra)
        .arg(bin_dir)
        .env("AELIST_CONFIG", state_dir.join("missing.toml"))
        .env("XDG_STATE_HOME", state_dir);
    Session::spawn(command).expect("Failed to spawn aelist")
}

/// Reap the aelist child. `None` means it was ended by a signal.
fn exit_code(session: &Session) -> Option<i32> {
    let pid = session.pid().as_raw();
    let mut status = 0;
    let reaped = unsafe { libc::waitpid(pid, &mut status, 0) };
    assert_eq!(reaped, pid, "waitpid failed");
    libc::WIFEXITED(status).then(|| libc::WEXITSTATUS(status))
}

fn wait_for(path: &Path) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if path.exists() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    false
}

#[test]
fn smoke_help_flag() {
    let mut command = Command::new(env!("CARGO_BIN_EXE_aelist"));
    command.arg("--help");
    let mut session = Session::spawn(command).expect("Failed to spawn aelist");

    let _ = session
        .expect(Regex("Search executables by substring"))
        .expect("Failed to find description");
    let _ = session
        .expect(Regex("Usage:"))
        .expect("Failed to find help output");
    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_shows_banner_and_cancels() {
    let bins = TempDir::new().unwrap();
    let state = TempDir::new().unwrap();
    write_script(bins.path(), "hello", "exit 0");

    let mut session = spawn_aelist(bins.path(), state.path(), &[]);

    let _ = session
        .expect(Regex("loaded 1 files from 1 paths"))
        .expect("Banner should be rendered");
    let _ = session
        .expect(Regex("exec .*hello"))
        .expect("Status line should name the only candidate");

    session.send(ControlCode::Escape).expect("Failed to send Esc");
    let _ = session.expect(Eof).expect("Process should exit");
    assert_eq!(exit_code(&session), Some(0));
}

#[test]
fn smoke_ctrl_c_key_cancels() {
    let bins = TempDir::new().unwrap();
    let state = TempDir::new().unwrap();
    write_script(bins.path(), "hello", "exit 0");

    let mut session = spawn_aelist(bins.path(), state.path(), &["-l"]);
    let _ = session.expect(Regex("exec")).expect("Status line expected");

    session
        .send(ControlCode::EndOfText)
        .expect("Failed to send Ctrl+C");
    let _ = session.expect(Eof).expect("Process should exit");
    assert_eq!(exit_code(&session), Some(0));
}

#[test]
fn smoke_sigterm_restores_and_exits_zero() {
    let bins = TempDir::new().unwrap();
    let state = TempDir::new().unwrap();
    write_script(bins.path(), "hello", "exit 0");

    let mut session = spawn_aelist(bins.path(), state.path(), &["-l"]);
    let _ = session.expect(Regex("exec")).expect("Status line expected");

    let pid = session.pid().as_raw();
    assert_eq!(unsafe { libc::kill(pid, libc::SIGTERM) }, 0);

    let _ = session
        .expect(Regex(r"\x1b\[\?1049l"))
        .expect("Alternate screen should be left on SIGTERM");
    let _ = session.expect(Eof).expect("Process should exit");
    assert_eq!(exit_code(&session), Some(0));
}

#[test]
fn smoke_enter_without_match_exits_zero() {
    let bins = TempDir::new().unwrap();
    let state = TempDir::new().unwrap();
    write_script(bins.path(), "hello", "exit 0");

    let mut session = spawn_aelist(bins.path(), state.path(), &["-l"]);
    let _ = session.expect(Regex("exec")).expect("Status line expected");

    session.send("zzzz").expect("Failed to type query");
    let _ = session
        .expect(Regex("no match"))
        .expect("Status line should report no match");
    session.send("\r").expect("Failed to send Enter");

    let _ = session.expect(Eof).expect("Process should exit");
    assert_eq!(exit_code(&session), Some(0));
}

#[test]
fn smoke_enter_launches_selected_program() {
    let bins = TempDir::new().unwrap();
    let state = TempDir::new().unwrap();
    let marker = state.path().join("launched");
    write_script(bins.path(), "other", "exit 0");
    write_script(
        bins.path(),
        "touch-marker",
        &format!("touch '{}'", marker.display()),
    );

    let mut session = spawn_aelist(bins.path(), state.path(), &["-S"]);
    let _ = session.expect(Regex(": ")).expect("Prompt expected");

    session.send("touch").expect("Failed to type query");
    let _ = session
        .expect(Regex("exec .*touch-marker"))
        .expect("Typed query should select the script");
    session.send("\r").expect("Failed to send Enter");

    let _ = session.expect(Eof).expect("Launcher should exit after Enter");
    assert_eq!(exit_code(&session), Some(0));
    assert!(wait_for(&marker), "Selected program should have run");
}
