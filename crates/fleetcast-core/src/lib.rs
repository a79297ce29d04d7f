//! Core configuration resolution for the fleetcast prediction service.
//!
//! This crate resolves, once at process start, everything the serving
//! application needs from its environment:
//!
//! - The on-disk locations of the model artifacts consumed by the inference
//!   pipeline (feature table, feature config, sequence model, residual model
//!   and scalers), tolerating the different directory layouts seen in local
//!   development and on the hosting platform.
//! - The scalar runtime settings (mail relay, signing secret, token
//!   lifetime, frontend base URL) read from environment variables.
//!
//! Everything is captured in an immutable [`AppConfig`] built at startup and
//! passed by reference to collaborators. No adapter concerns, no interactive
//! I/O, nothing is created on disk.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod paths;
pub mod settings;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigError};
pub use paths::{
    ArtifactPaths, CA_SCALER_FILENAME, CandidateList, F_SCALER_FILENAME, FEAT_DF_FILENAME,
    FEATURES_CFG_FILENAME, GPR_RESIDUAL_FILENAME, PathError, PathSource, ResolvedPath,
    ResolvedPaths, SEQ2SEQ_MODEL_FILENAME, X2_SCALER_FILENAME, artifact_dir_candidates,
    data_dir_candidates, first_existing_dir, locate_file, resolve_dir, resolve_file, server_root,
};
pub use settings::{
    DEFAULT_FRONTEND_BASE_URL, DEFAULT_RESET_TOKEN_EXP_MIN, DEFAULT_SMTP_PORT, DEV_SECRET_KEY,
    DeploymentMode, Settings, SettingsError, SmtpSettings,
};
