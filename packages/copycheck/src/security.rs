//! Credential handling with secure memory.
//!
//! Uses the `secrecy` crate to prevent accidental logging of sensitive
//! values. Key material is loaded once at startup and is never written to
//! logs or persisted state.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use crate::error::{AnalysisError, AnalysisResult, CoreError, Result};

/// Environment variable holding the document store bearer token.
pub const STORE_TOKEN_VAR: &str = "COPYCHECK_DRIVE_TOKEN";

/// Environment variable holding the generative-model API key.
pub const MODEL_KEY_VAR: &str = "GEMINI_API_KEY";

/// A secret string that won't be logged or displayed.
///
/// Wraps `secrecy::SecretBox` so tokens and API keys are never accidentally
/// exposed in logs, debug output, or error messages.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Create a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value for use.
    ///
    /// Only call this at the point of use (e.g. an Authorization header).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Service credentials for the remote document store.
///
/// Read-only scope; one bundle per process, loaded at startup.
#[derive(Clone)]
pub struct CredentialBundle {
    token: SecretString,
}

impl CredentialBundle {
    /// Create a bundle from a bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token),
        }
    }

    /// Load the bundle from the `COPYCHECK_DRIVE_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(STORE_TOKEN_VAR).map_err(|_| CoreError::Config {
            reason: format!("{} not set", STORE_TOKEN_VAR),
        })?;
        Ok(Self::new(token))
    }

    /// The bearer token.
    pub fn token(&self) -> &SecretString {
        &self.token
    }
}

impl fmt::Debug for CredentialBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialBundle")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Credentials and model selection for the generative-text service.
#[derive(Clone)]
pub struct ModelCredentials {
    /// API key (secret)
    pub api_key: SecretString,

    /// Model identifier
    pub model: String,

    /// API base URL override (proxies, tests)
    pub base_url: Option<String>,
}

impl ModelCredentials {
    /// Create new model credentials.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: model.into(),
            base_url: None,
        }
    }

    /// Load the API key from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(model: impl Into<String>) -> AnalysisResult<Self> {
        let api_key = std::env::var(MODEL_KEY_VAR).map_err(|_| AnalysisError::MissingCredential)?;
        Ok(Self::new(api_key, model))
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

impl fmt::Debug for ModelCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCredentials")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
