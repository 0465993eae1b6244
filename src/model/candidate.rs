//! Launch candidates discovered during the index scan.

use std::fmt;
use std::path::{Path, PathBuf};

/// Position of a candidate inside a [`CandidateIndex`](crate::index::CandidateIndex).
///
/// A non-owning handle: the index outlives every selection that refers to it,
/// so holding the position is enough to reach the candidate again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(usize);

impl CandidateId {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An executable file eligible for launch.
///
/// Immutable once the index is built. The path was executable and stat-able
/// at scan time; it is not re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    path: PathBuf,
    size: u64,
}

impl Candidate {
    /// Create a candidate from its display name, full path and size in bytes.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
        }
    }

    /// Filesystem base name, the text queries are matched against.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `directory/name` as scanned.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size in bytes at scan time.
    pub fn size(&self) -> u64 {
        self.size
    }
}
