//! Runtime settings read from the process environment.
//!
//! Scalar settings follow a simpler two-tier precedence than path
//! resolution: environment value, then hardcoded default. A malformed
//! numeric value is a fatal startup error rather than a silent fallback,
//! since it indicates real misconfiguration.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::paths::env_value;

/// Default mail relay port (STARTTLS submission).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default password-reset token lifetime in minutes.
pub const DEFAULT_RESET_TOKEN_EXP_MIN: u64 = 30;

/// Default frontend origin used when building password-reset links.
pub const DEFAULT_FRONTEND_BASE_URL: &str = "http://localhost:3000";

/// Development-only signing secret. Rejected in production mode.
pub const DEV_SECRET_KEY: &str = "dev_change_me_secret_key";

/// Deployment mode, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Local development; a missing `SECRET_KEY` falls back to
    /// [`DEV_SECRET_KEY`] with a warning.
    #[default]
    Development,
    /// Hosted deployment; a missing `SECRET_KEY` is a fatal startup error.
    Production,
}

impl DeploymentMode {
    /// Read the mode from `APP_ENV`. `production`/`prod` (case-insensitive)
    /// select production; anything else, including unset, is development.
    #[must_use]
    pub fn from_env() -> Self {
        match env_value("APP_ENV")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Mail relay credentials and addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmtpSettings {
    /// Relay hostname; empty when mail sending is not configured.
    pub host: String,
    /// Relay port.
    pub port: u16,
    /// Relay login.
    pub user: String,
    /// Relay password. Never serialized.
    #[serde(skip_serializing)]
    pub pass: String,
    /// Sender address; defaults to `user` when `SMTP_FROM` is unset.
    pub from: String,
}

/// Settings resolution failures. All fatal at startup.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// A numeric environment variable did not parse. Silent fallback here
    /// would hide a real misconfiguration.
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidInteger { key: &'static str, value: String },

    /// `SECRET_KEY` is mandatory in production mode.
    #[error("SECRET_KEY must be set when APP_ENV=production")]
    MissingSecretKey,
}

/// Immutable runtime settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Deployment mode (`APP_ENV`).
    pub mode: DeploymentMode,
    /// Mail relay configuration.
    pub smtp: SmtpSettings,
    /// Token-signing secret. Never serialized.
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Password-reset token lifetime in minutes.
    pub reset_token_exp_min: u64,
    /// Frontend origin for building password-reset links.
    pub frontend_base_url: String,
}

impl Settings {
    /// Read all scalar settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_env_with_mode(DeploymentMode::from_env())
    }

    /// Read settings with an explicit deployment mode.
    pub fn from_env_with_mode(mode: DeploymentMode) -> Result<Self, SettingsError> {
        let user = env_value("SMTP_USER").unwrap_or_default();
        // Sender defaults to the relay login, so it resolves after it.
        let from = env_value("SMTP_FROM").unwrap_or_else(|| user.clone());
        let smtp = SmtpSettings {
            host: env_value("SMTP_HOST").unwrap_or_default(),
            port: parse_env("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            user,
            pass: env_value("SMTP_PASS").unwrap_or_default(),
            from,
        };

        let secret_key = match env_value("SECRET_KEY") {
            Some(secret) => secret,
            None if mode == DeploymentMode::Production => {
                return Err(SettingsError::MissingSecretKey);
            }
            None => {
                warn!("SECRET_KEY unset; using the development default");
                DEV_SECRET_KEY.to_string()
            }
        };

        Ok(Self {
            mode,
            smtp,
            secret_key,
            reset_token_exp_min: parse_env("RESET_TOKEN_EXP_MIN", DEFAULT_RESET_TOKEN_EXP_MIN)?,
            frontend_base_url: env_value("FRONTEND_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FRONTEND_BASE_URL.to_string()),
        })
    }

    /// Masked signing secret for display purposes.
    #[must_use]
    pub fn masked_secret(&self) -> String {
        mask(&self.secret_key)
    }

    /// Masked relay password for display purposes.
    #[must_use]
    pub fn masked_smtp_pass(&self) -> String {
        mask(&self.smtp.pass)
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "mode = {}", self.mode)?;
        writeln!(f, "smtp_host = {}", self.smtp.host)?;
        writeln!(f, "smtp_port = {}", self.smtp.port)?;
        writeln!(f, "smtp_user = {}", self.smtp.user)?;
        writeln!(f, "smtp_pass = {}", self.masked_smtp_pass())?;
        writeln!(f, "smtp_from = {}", self.smtp.from)?;
        writeln!(f, "secret_key = {}", self.masked_secret())?;
        writeln!(f, "reset_token_exp_min = {}", self.reset_token_exp_min)?;
        write!(f, "frontend_base_url = {}", self.frontend_base_url)
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, SettingsError> {
    match env_value(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidInteger { key, value: raw }),
        None => Ok(default),
    }
}

/// Mask a secret for display, keeping just enough to recognize it.
///
/// Counts characters, not bytes, so multi-byte secrets never split inside
/// a char boundary.
fn mask(value: &str) -> String {
    if value.is_empty() {
        return "(unset)".to_string();
    }
    let count = value.chars().count();
    let head: String = value.chars().take(4).collect();
    if count <= 12 {
        format!("{head}...")
    } else {
        let tail: String = value.chars().skip(count - 4).collect();
        format!("{head}...{tail}")
    }
}
