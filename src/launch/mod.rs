//! Detached, fire-and-forget launch of the selected candidate.
//!
//! The child runs in a new session with all three standard streams on the
//! null device, so it never touches the launcher's terminal. The launcher
//! does not wait for it and never learns its exit status.

use crate::model::{Candidate, LaunchError};
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// What was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub pid: u32,
    pub path: PathBuf,
}

/// Spawn `candidate` with no arguments as a session leader.
///
/// Returns as soon as the child exists.
///
/// # Errors
///
/// - [`LaunchError::NoSelection`] when `candidate` is `None`.
/// - [`LaunchError::Spawn`] when fork or exec fails, for example because the
///   file disappeared after the scan.
pub fn launch(candidate: Option<&Candidate>) -> Result<LaunchReport, LaunchError> {
    let candidate = candidate.ok_or(LaunchError::NoSelection)?;
    let path = candidate.path().to_path_buf();

    let mut command = Command::new(&path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // SAFETY: setsid is async-signal-safe and the closure touches no state
    // shared with the parent.
    unsafe {
        command.pre_exec(|| {
            if libc::setsid() < 0 {
                Err(std::io::Error::last_os_error())
            } else {
                Ok(())
            }
        });
    }

    let child = command.spawn().map_err(|source| LaunchError::Spawn {
        path: path.clone(),
        source,
    })?;

    // Dropping the handle neither waits nor kills.
    Ok(LaunchReport {
        pid: child.id(),
        path,
    })
}

/// Launch `candidate` and terminate the current process with status 0.
///
/// The caller must have restored the terminal already. Failures are logged
/// and otherwise ignored.
pub fn launch_and_exit(candidate: Option<&Candidate>) -> ! {
    match launch(candidate) {
        Ok(report) => info!(pid = report.pid, path = ?report.path, "Launched"),
        Err(LaunchError::NoSelection) => info!("Confirmed with no match; nothing launched"),
        Err(err) => warn!("{}", err),
    }
    std::process::exit(0)
}
