//! Candidate directory lists for known deployment layouts.
//!
//! On the hosting platform the service may run with its root directory set
//! to `backend/` or to the repository root, and locally the working
//! directory varies the same way. Candidates derived from the build-time
//! deployment root come first (where the code actually lives), followed by
//! working-directory layouts.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Non-empty, priority-ordered list of candidate directories.
///
/// Earlier entries win ties: the first candidate that exists is returned by
/// discovery, and the first entry doubles as the fallback when nothing
/// exists on disk. The list is fixed once built; resolution never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    first: PathBuf,
    rest: Vec<PathBuf>,
}

impl CandidateList {
    /// Create a list with its highest-priority candidate.
    #[must_use]
    pub fn new(first: impl Into<PathBuf>) -> Self {
        Self {
            first: first.into(),
            rest: Vec::new(),
        }
    }

    /// Append a lower-priority candidate.
    #[must_use]
    pub fn with(mut self, candidate: impl Into<PathBuf>) -> Self {
        self.rest.push(candidate.into());
        self
    }

    /// The highest-priority candidate; also the fallback value.
    #[must_use]
    pub fn first(&self) -> &Path {
        &self.first
    }

    /// Iterate candidates from highest to lowest priority.
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Number of candidates (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false: a list carries at least one candidate by construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `path` is a member of this list.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.iter().any(|candidate| candidate == path)
    }
}

/// Deployment root baked in at build time.
///
/// The hosting platform does not guarantee that the working directory is the
/// project root, so layouts anchored at this path are probed before
/// working-directory layouts.
#[must_use]
pub fn server_root() -> PathBuf {
    PathBuf::from(env!("FLEETCAST_REPO_ROOT"))
}

/// Candidate locations for the artifacts directory.
///
/// Covers both "service runs from `backend/`" and "service runs from the
/// repository root", anchored first at the build-time root and then at the
/// working directory.
pub fn artifact_dir_candidates() -> Result<CandidateList, PathError> {
    let root = server_root();
    let cwd = current_dir()?;
    Ok(CandidateList::new(root.join("artifacts"))
        .with(root.join("backend").join("artifacts"))
        .with(cwd.join("artifacts"))
        .with(cwd.join("backend").join("artifacts")))
}

/// Candidate locations for the bundled data directory.
///
/// The data directory historically lived at `app/data` and may move to a
/// top-level `data/`, so both shapes are probed.
pub fn data_dir_candidates() -> Result<CandidateList, PathError> {
    let root = server_root();
    let cwd = current_dir()?;
    Ok(CandidateList::new(root.join("app").join("data"))
        .with(root.join("data"))
        .with(root.join("backend").join("app").join("data"))
        .with(cwd.join("app").join("data"))
        .with(cwd.join("backend").join("app").join("data")))
}

fn current_dir() -> Result<PathBuf, PathError> {
    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}
