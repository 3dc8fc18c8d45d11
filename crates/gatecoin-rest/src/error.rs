//! Error types for REST API operations

use gatecoin_auth::AuthError;
use reqwest::StatusCode;

/// Errors that can occur during REST API operations
///
/// `Http` and `HttpStatus` form the transport family; `CreateOrder`,
/// `CancelOrder` and `Withdrawal` are the per-operation business failures.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Connection or protocol failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        /// Response status
        status: StatusCode,
        /// Response body as text
        body: String,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters, detected before any request is sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// API reported a failure outside the order and withdrawal operations
    #[error("API error: {0}")]
    Api(String),

    /// Order creation failed
    #[error("Create order failed: {0}")]
    CreateOrder(String),

    /// Order cancellation failed
    #[error("Cancel order failed: {0}")]
    CancelOrder(String),

    /// Withdrawal failed
    #[error("Withdrawal failed: {0}")]
    Withdrawal(String),

    /// Credentials could not be loaded
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Check if this error came from the transport rather than the API
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpStatus { .. })
    }

    /// Human-readable message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Self::Parse(msg)
            | Self::InvalidParameter(msg)
            | Self::Api(msg)
            | Self::CreateOrder(msg)
            | Self::CancelOrder(msg)
            | Self::Withdrawal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Fold any error into [`RestError::CreateOrder`]
    pub(crate) fn into_create_order(self) -> Self {
        match self {
            Self::CreateOrder(_) => self,
            other => Self::CreateOrder(other.message()),
        }
    }

    /// Fold any error into [`RestError::CancelOrder`]
    pub(crate) fn into_cancel_order(self) -> Self {
        match self {
            Self::CancelOrder(_) => self,
            other => Self::CancelOrder(other.message()),
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
