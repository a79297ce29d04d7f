//! Candidate probing and the environment override layer.
//!
//! Both entry points are total functions: they always produce a path, even
//! when nothing exists on disk. The deliberate "fail later, legibly" policy
//! means the consuming component raises a concrete file-not-found error when
//! it actually opens the path, and that error reports a stable location.

use std::env;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use super::candidates::CandidateList;

/// How a resolved path was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathSource {
    /// An environment variable named the path explicitly.
    /// Used verbatim, never existence-checked.
    EnvOverride,
    /// The first candidate that existed on disk.
    Discovered,
    /// No candidate existed; defaulted to the first candidate so later
    /// errors report the expected location.
    Fallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvOverride => write!(f, "env-override"),
            Self::Discovered => write!(f, "discovered"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A path together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPath {
    /// The resolved absolute path.
    pub path: PathBuf,
    /// Where the path came from.
    pub source: PathSource,
}

impl ResolvedPath {
    /// Whether resolution fell back to the first candidate.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, PathSource::Fallback)
    }

    /// Re-check existence on disk.
    ///
    /// Resolution never guarantees existence (env overrides are trusted
    /// verbatim and fallbacks are by definition absent at resolve time), so
    /// consumers probe again before opening.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Return the first candidate directory that exists, or the first candidate
/// unchanged when none do.
///
/// Total function: the returned path is always a member of `candidates`.
/// One existence check per candidate, short-circuited on the first hit.
#[must_use]
pub fn first_existing_dir(candidates: &CandidateList) -> ResolvedPath {
    for candidate in candidates.iter() {
        if candidate.exists() {
            return ResolvedPath {
                path: candidate.clone(),
                source: PathSource::Discovered,
            };
        }
    }
    ResolvedPath {
        path: candidates.first().to_path_buf(),
        source: PathSource::Fallback,
    }
}

/// Probe `candidate/filename` for each candidate in order; first existing
/// composed path wins, else `first_candidate/filename`.
///
/// Files are probed independently of directory-level resolution: a file
/// found in the second candidate is returned even when the first candidate
/// directory itself exists but lacks that file. This tolerates deployments
/// where files of the same logical group end up under sibling layouts.
#[must_use]
pub fn locate_file(filename: &str, candidates: &CandidateList) -> ResolvedPath {
    for candidate in candidates.iter() {
        let composed = candidate.join(filename);
        if composed.exists() {
            return ResolvedPath {
                path: composed,
                source: PathSource::Discovered,
            };
        }
    }
    ResolvedPath {
        path: candidates.first().join(filename),
        source: PathSource::Fallback,
    }
}

/// Read an environment variable, treating unset and blank values alike.
pub(crate) fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Resolve a directory, with the `env_key` variable taking precedence over
/// discovery across `candidates`.
#[must_use]
pub fn resolve_dir(env_key: &str, candidates: &CandidateList) -> ResolvedPath {
    if let Some(overridden) = env_value(env_key) {
        debug!(key = env_key, path = %overridden, "directory overridden via environment");
        return ResolvedPath {
            path: PathBuf::from(overridden),
            source: PathSource::EnvOverride,
        };
    }

    let resolved = first_existing_dir(candidates);
    if resolved.is_fallback() {
        warn!(
            key = env_key,
            path = %resolved.path.display(),
            "no candidate directory exists; using first candidate"
        );
    } else {
        debug!(key = env_key, path = %resolved.path.display(), "directory discovered");
    }
    resolved
}

/// Resolve a file, with the `env_key` variable taking precedence over
/// per-candidate probing of `filename`.
#[must_use]
pub fn resolve_file(env_key: &str, filename: &str, candidates: &CandidateList) -> ResolvedPath {
    if let Some(overridden) = env_value(env_key) {
        debug!(key = env_key, path = %overridden, "file overridden via environment");
        return ResolvedPath {
            path: PathBuf::from(overridden),
            source: PathSource::EnvOverride,
        };
    }

    let resolved = locate_file(filename, candidates);
    if resolved.is_fallback() {
        warn!(
            key = env_key,
            file = filename,
            path = %resolved.path.display(),
            "file not found in any candidate; using first candidate"
        );
    } else {
        debug!(key = env_key, path = %resolved.path.display(), "file discovered");
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_first_existing_dir_returns_member_of_list() {
        let temp = tempdir().unwrap();
        let list = CandidateList::new("/nonexistent-a")
            .with(temp.path().to_path_buf())
            .with("/nonexistent-b");

        let resolved = first_existing_dir(&list);
        assert!(list.contains(&resolved.path));
        assert_eq!(resolved.source, PathSource::Discovered);
        assert_eq!(resolved.path, temp.path());
    }

    #[test]
    fn test_first_existing_dir_earliest_wins() {
        let temp_a = tempdir().unwrap();
        let temp_b = tempdir().unwrap();
        let list = CandidateList::new(temp_a.path()).with(temp_b.path());

        let resolved = first_existing_dir(&list);
        assert_eq!(resolved.path, temp_a.path());
        assert_eq!(resolved.source, PathSource::Discovered);
    }

    #[test]
    fn test_first_existing_dir_fallback_is_idempotent() {
        let list = CandidateList::new("/nonexistent-a").with("/nonexistent-b");

        let first = first_existing_dir(&list);
        let second = first_existing_dir(&list);
        assert_eq!(first, second);
        assert_eq!(first.path, PathBuf::from("/nonexistent-a"));
        assert_eq!(first.source, PathSource::Fallback);
    }

    #[test]
    fn test_locate_file_probes_candidates_independently() {
        // First candidate directory exists but lacks the file; the file in
        // the second candidate must still be found.
        let temp = tempdir().unwrap();
        let empty = temp.path().join("empty");
        let populated = temp.path().join("populated");
        fs::create_dir_all(&empty).unwrap();
        fs::create_dir_all(&populated).unwrap();
        fs::write(populated.join("model.bin"), b"x").unwrap();

        let list = CandidateList::new(&empty).with(&populated);
        let resolved = locate_file("model.bin", &list);

        assert_eq!(resolved.path, populated.join("model.bin"));
        assert_eq!(resolved.source, PathSource::Discovered);
    }

    #[test]
    fn test_locate_file_fallback_composes_first_candidate() {
        let list = CandidateList::new("/nonexistent-a").with("/nonexistent-b");
        let resolved = locate_file("model.bin", &list);

        assert_eq!(resolved.path, PathBuf::from("/nonexistent-a/model.bin"));
        assert_eq!(resolved.source, PathSource::Fallback);
    }

    #[test]
    fn test_resolve_dir_env_override_is_verbatim() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set("FLEETCAST_TEST_DIR_OVERRIDE", "/nonexistent/override");

        let temp = tempdir().unwrap();
        let list = CandidateList::new(temp.path());

        // The override does not exist on disk and must not be checked.
        let resolved = resolve_dir("FLEETCAST_TEST_DIR_OVERRIDE", &list);
        assert_eq!(resolved.path, PathBuf::from("/nonexistent/override"));
        assert_eq!(resolved.source, PathSource::EnvOverride);
    }

    #[test]
    fn test_resolve_dir_blank_override_falls_through() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set("FLEETCAST_TEST_DIR_BLANK", "   ");

        let temp = tempdir().unwrap();
        let list = CandidateList::new(temp.path());

        let resolved = resolve_dir("FLEETCAST_TEST_DIR_BLANK", &list);
        assert_eq!(resolved.path, temp.path());
        assert_eq!(resolved.source, PathSource::Discovered);
    }

    #[test]
    fn test_resolve_file_env_override_skips_probing() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set("FLEETCAST_TEST_FILE_OVERRIDE", "/elsewhere/model.bin");

        let temp = tempdir().unwrap();
        fs::write(temp.path().join("model.bin"), b"x").unwrap();
        let list = CandidateList::new(temp.path());

        let resolved = resolve_file("FLEETCAST_TEST_FILE_OVERRIDE", "model.bin", &list);
        assert_eq!(resolved.path, PathBuf::from("/elsewhere/model.bin"));
        assert_eq!(resolved.source, PathSource::EnvOverride);
    }

    #[test]
    fn test_path_source_display() {
        assert_eq!(PathSource::EnvOverride.to_string(), "env-override");
        assert_eq!(PathSource::Discovered.to_string(), "discovered");
        assert_eq!(PathSource::Fallback.to_string(), "fallback");
    }
}
