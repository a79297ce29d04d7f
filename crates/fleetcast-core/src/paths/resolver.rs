//! Whole-process path resolution captured in one struct.
//!
//! This is the single source of truth for "where does fleetcast read X
//! from": used by the `fleetcast paths` CLI command, by integration tests,
//! and when debugging layout issues on the hosting platform.

use serde::Serialize;

use super::artifacts::ArtifactPaths;
use super::candidates::{CandidateList, artifact_dir_candidates, data_dir_candidates};
use super::error::PathError;
use super::locate::{ResolvedPath, resolve_dir};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    /// Directory holding the serialized model artifacts.
    pub artifacts_dir: ResolvedPath,
    /// Directory holding bundled application data. No fixed filename
    /// contract at this layer; consumers compose their own paths under it.
    pub data_dir: ResolvedPath,
    /// The artifact files themselves, each probed independently.
    pub artifacts: ArtifactPaths,
}

impl ResolvedPaths {
    /// Resolve every path using the default candidate lists and the current
    /// environment.
    ///
    /// Call this once at startup and keep the result; repeated calls with an
    /// unchanged environment and filesystem return identical values.
    pub fn resolve() -> Result<Self, PathError> {
        let artifact_candidates = artifact_dir_candidates()?;
        let data_candidates = data_dir_candidates()?;
        Ok(Self::resolve_with_candidates(
            &artifact_candidates,
            &data_candidates,
        ))
    }

    /// Resolve against explicit candidate lists.
    ///
    /// Lets tests point resolution at a scratch filesystem without touching
    /// process-global state. Environment overrides still apply.
    #[must_use]
    pub fn resolve_with_candidates(
        artifact_candidates: &CandidateList,
        data_candidates: &CandidateList,
    ) -> Self {
        Self {
            artifacts_dir: resolve_dir("ARTIFACTS_DIR", artifact_candidates),
            data_dir: resolve_dir("DATA_DIR", data_candidates),
            artifacts: ArtifactPaths::resolve(artifact_candidates),
        }
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "artifacts_dir = {} ({})",
            self.artifacts_dir.path.display(),
            self.artifacts_dir.source
        )?;
        writeln!(
            f,
            "data_dir = {} ({})",
            self.data_dir.path.display(),
            self.data_dir.source
        )?;
        let mut lines = self.artifacts.iter().peekable();
        while let Some((label, resolved)) = lines.next() {
            write!(f, "{label} = {} ({})", resolved.path.display(), resolved.source)?;
            if lines.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
