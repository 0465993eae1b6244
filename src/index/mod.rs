//! Candidate index: the one-time scan of executable files.
//!
//! Directories are read in the configured order and entries in the order the
//! OS returns them. The result is never sorted or deduplicated, and it is
//! never rescanned while the interactive loop runs. A binary removed after the
//! scan only shows up as a failed launch.

use crate::model::{Candidate, CandidateId, IndexError};
use std::ffi::CString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use tracing::{debug, info};

/// Ordered, read-only list of launch candidates.
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    candidates: Vec<Candidate>,
    total_size: u64,
    directory_count: usize,
}

impl CandidateIndex {
    /// Scan `directories` for entries the current user may execute.
    ///
    /// Unreadable directories and entries that fail `access(X_OK)` or `stat`
    /// are skipped silently. Fails only if nothing at all was found.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NoExecutablesFound`] when the scan yields zero
    /// candidates.
    pub fn build<I, P>(directories: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut candidates = Vec::new();
        let mut directory_count = 0;

        for directory in directories {
            directory_count += 1;
            scan_directory(directory.as_ref(), &mut candidates);
        }

        if candidates.is_empty() {
            return Err(IndexError::NoExecutablesFound {
                directories: directory_count,
            });
        }

        let index = Self::from_candidates(candidates, directory_count);
        info!(
            candidates = index.len(),
            directories = directory_count,
            total_size = index.total_size,
            "Candidate index built"
        );
        Ok(index)
    }

    /// Build an index from already-known candidates, keeping their order.
    ///
    /// Used by tests and benchmarks that need an index without touching the
    /// filesystem.
    pub fn from_candidates(candidates: Vec<Candidate>, directory_count: usize) -> Self {
        let total_size = candidates
            .iter()
            .fold(0u64, |sum, c| sum.saturating_add(c.size()));
        Self {
            candidates,
            total_size,
            directory_count,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.get(id.get())
    }

    /// Candidates in scan order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, &Candidate)> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(position, candidate)| (CandidateId::new(position), candidate))
    }

    /// Sum of all candidate sizes, computed once at build time.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Number of directories the index was built from, readable or not.
    pub fn directory_count(&self) -> usize {
        self.directory_count
    }
}

/// Append every entry in `directory` the current user may execute and stat to `out`.
fn scan_directory(directory: &Path, out: &mut Vec<Candidate>) {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(directory = %directory.display(), error = %err, "Skipping unreadable directory");
            return;
        }
    };

    let before = out.len();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        // read_dir omits these on every supported platform
        if file_name == "." || file_name == ".." {
            continue;
        }

        let path = directory.join(&file_name);
        if !is_executable(&path) {
            continue;
        }

        // stat, not lstat: a symlink counts as the file it points at
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Skipping entry that cannot be stat'ed");
                continue;
            }
        };
        out.push(Candidate::new(
            file_name.to_string_lossy(),
            path,
            metadata.len(),
        ));
    }

    debug!(
        directory = %directory.display(),
        found = out.len() - before,
        "Scanned directory"
    );
}

/// Whether the current user may execute `path`, per `access(2)`.
fn is_executable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
