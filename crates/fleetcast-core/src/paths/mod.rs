//! Path resolution for fleetcast artifact and data directories.
//!
//! The process working directory and project root differ between local
//! development and the hosting platform, so every required file is probed
//! against an ordered list of plausible locations. An environment variable
//! can override each value individually; when nothing exists on disk the
//! first candidate is returned unchanged, so that the error raised later by
//! the consumer shows a stable, inspectable path instead of an empty value.
//!
//! # Design
//!
//! - Resolution is total: a path is always produced, never an error for a
//!   missing file. Consumers re-check existence when they actually open it.
//! - Every resolved value carries a [`PathSource`] tag so diagnostics can
//!   report *why* a path was chosen, not only the final value.
//! - No interactive/terminal I/O, and nothing is created on the filesystem.

mod artifacts;
mod candidates;
mod error;
mod locate;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Candidate lists and deployment layouts
pub use candidates::{CandidateList, artifact_dir_candidates, data_dir_candidates, server_root};

// Resolution algorithm and the environment override layer
pub use locate::{
    PathSource, ResolvedPath, first_existing_dir, locate_file, resolve_dir, resolve_file,
};

// Artifact file set
pub use artifacts::{
    ArtifactPaths, CA_SCALER_FILENAME, F_SCALER_FILENAME, FEAT_DF_FILENAME, FEATURES_CFG_FILENAME,
    GPR_RESIDUAL_FILENAME, SEQ2SEQ_MODEL_FILENAME, X2_SCALER_FILENAME,
};

// Whole-process capture for tests and CLI
pub use resolver::ResolvedPaths;

// Shared by the settings module; not part of the public API
pub(crate) use locate::env_value;
