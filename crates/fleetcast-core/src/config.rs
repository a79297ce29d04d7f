//! Startup configuration composition.
//!
//! [`AppConfig`] is built once at process start and passed by reference to
//! collaborators (HTTP handlers, the inference pipeline, the mailer). There
//! are no ambient global lookups: tests construct configurations with their
//! own candidate lists and environments without process-global leakage.

use thiserror::Error;
use tracing::debug;

use crate::paths::{CandidateList, PathError, ResolvedPaths};
use crate::settings::{Settings, SettingsError};

/// Startup failure taxonomy for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not build the default candidate lists.
    #[error(transparent)]
    Path(#[from] PathError),

    /// A scalar setting was malformed or missing.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Immutable process-wide configuration.
///
/// Safe to share across request-handling threads after construction; no
/// field is ever mutated post-init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Resolved artifact and data locations.
    pub paths: ResolvedPaths,
    /// Scalar runtime settings.
    pub settings: Settings,
}

impl AppConfig {
    /// Build the configuration from the current environment and the default
    /// candidate lists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let paths = ResolvedPaths::resolve()?;
        let settings = Settings::from_env()?;
        debug!(
            artifacts_dir = %paths.artifacts_dir.path.display(),
            data_dir = %paths.data_dir.path.display(),
            mode = %settings.mode,
            "configuration resolved"
        );
        Ok(Self { paths, settings })
    }

    /// Build the configuration against explicit candidate lists.
    ///
    /// Environment overrides and scalar settings still come from the
    /// process environment; only filesystem discovery is redirected.
    pub fn from_env_with_candidates(
        artifact_candidates: &CandidateList,
        data_candidates: &CandidateList,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            paths: ResolvedPaths::resolve_with_candidates(artifact_candidates, data_candidates),
            settings: Settings::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{
        ENV_LOCK, EnvVarGuard, clear_artifact_overrides, clear_settings_vars,
    };

    #[test]
    fn test_from_env_builds_complete_config() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _clean_paths = clear_artifact_overrides();
        let _clean_settings = clear_settings_vars();

        let config = AppConfig::from_env().expect("config should build");
        assert_eq!(config.settings.smtp.port, crate::settings::DEFAULT_SMTP_PORT);
    }

    #[test]
    fn test_settings_failure_propagates() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _clean_paths = clear_artifact_overrides();
        let _clean_settings = clear_settings_vars();
        let _port = EnvVarGuard::set("SMTP_PORT", "high");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Settings(_)));
    }
}
