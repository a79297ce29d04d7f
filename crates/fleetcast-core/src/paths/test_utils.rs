//! Environment isolation helpers for tests.
//!
//! Resolution reads process environment variables, so tests that set or
//! clear them must serialize on [`ENV_LOCK`] and restore prior state when
//! they finish. Without this, concurrent tests interfere with each other's
//! environment and results become non-deterministic.

use std::env;
use std::sync::Mutex;

/// Shared lock serializing every test that touches environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on
/// drop.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set `key` to `value` for the guard's lifetime.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Ensure `key` is unset for the guard's lifetime.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => unsafe {
                env::set_var(&self.key, value);
            },
            None => unsafe {
                env::remove_var(&self.key);
            },
        }
    }
}

/// Unset every path-override variable so discovery tests are hermetic.
#[must_use]
pub fn clear_artifact_overrides() -> Vec<EnvVarGuard> {
    [
        "ARTIFACTS_DIR",
        "DATA_DIR",
        "FEAT_DF_CSV",
        "FEATURES_CFG_JSON",
        "SEQ2SEQ_MODEL",
        "GPR_RESIDUAL_PKL",
        "CA_SCALER_PKL",
        "F_SCALER_PKL",
        "X2_SCALER_PKL",
    ]
    .iter()
    .map(|key| EnvVarGuard::unset(key))
    .collect()
}

/// Unset every scalar-settings variable so settings tests are hermetic.
#[must_use]
pub fn clear_settings_vars() -> Vec<EnvVarGuard> {
    [
        "APP_ENV",
        "SMTP_HOST",
        "SMTP_PORT",
        "SMTP_USER",
        "SMTP_PASS",
        "SMTP_FROM",
        "SECRET_KEY",
        "RESET_TOKEN_EXP_MIN",
        "FRONTEND_BASE_URL",
    ]
    .iter()
    .map(|key| EnvVarGuard::unset(key))
    .collect()
}
