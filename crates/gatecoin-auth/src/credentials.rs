//! API credentials for Gatecoin
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretBox};

use crate::error::{AuthError, AuthResult};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.gatecoin.com";

const API_KEY_VAR: &str = "GATECOIN_API_KEY";
const API_SECRET_VAR: &str = "GATECOIN_API_SECRET";
const API_URL_VAR: &str = "GATECOIN_API_URL";

/// API credentials for authenticated requests
///
/// Immutable once built. Only the public key ever leaves this struct in
/// clear text; the secret is used solely as the HMAC key.
pub struct Credentials {
    /// Public API key, sent with every request
    public_key: String,
    /// Secret API key (zeroized on drop)
    secret_key: SecretBox<Vec<u8>>,
    /// Base URL, part of every signed string
    base_url: String,
}

impl Credentials {
    /// Create credentials for the production endpoint
    ///
    /// # Arguments
    /// * `public_key` - Your Gatecoin public API key
    /// * `secret_key` - Your Gatecoin private API key
    pub fn new(public_key: impl Into<String>, secret_key: impl AsRef<str>) -> AuthResult<Self> {
        let public_key = public_key.into();
        let secret_key = secret_key.as_ref();

        if public_key.is_empty() {
            return Err(AuthError::InvalidCredentials("empty public key".to_string()));
        }
        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials("empty secret key".to_string()));
        }

        Ok(Self {
            public_key,
            secret_key: SecretBox::new(Box::new(secret_key.as_bytes().to_vec())),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `GATECOIN_API_KEY` and `GATECOIN_API_SECRET`, and optionally
    /// `GATECOIN_API_URL` to target a non-production endpoint.
    pub fn from_env() -> AuthResult<Self> {
        let public_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_VAR.to_string()))?;
        let secret_key = std::env::var(API_SECRET_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_VAR.to_string()))?;

        let creds = Self::new(public_key, secret_key)?;
        match std::env::var(API_URL_VAR) {
            Ok(url) => Ok(creds.with_base_url(url)),
            Err(_) => Ok(creds),
        }
    }

    /// Target a different API endpoint
    ///
    /// A trailing `/` is dropped so that `{base_url}{path}` stays well formed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn secret_key(&self) -> &[u8] {
        self.secret_key.expose_secret()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key.clone(),
            secret_key: SecretBox::new(Box::new(self.secret_key.expose_secret().clone())),
            base_url: self.base_url.clone(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "public_key",
                &format!("{}...", self.public_key.chars().take(8).collect::<String>()),
            )
            .field("secret_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
