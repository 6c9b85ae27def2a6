mod error_info;

pub use error_info::ErrorInfo;

use thiserror::Error;

/// The main error type for Leaseweb API operations.
///
/// Every resource operation returns exactly one of these kinds. Nothing is
/// retried or recovered internally; the caller decides how to surface them.
#[derive(Error, Debug)]
pub enum LeasewebError {
    /// The API answered with an unexpected status and a well-formed error body.
    #[error(transparent)]
    Api(#[from] ErrorInfo),

    /// A response body that should contain JSON could not be decoded.
    ///
    /// # Fields
    /// * `context` - The operation that was being performed
    /// * `message` - The underlying parse failure
    #[error("{context}: error while decoding JSON response body ({message})")]
    Decoding { context: String, message: String },

    /// A request body could not be serialized. No request was sent.
    ///
    /// # Fields
    /// * `context` - The operation that was being performed
    /// * `message` - The underlying serialization failure
    #[error("{context}: error while encoding JSON request body ({message})")]
    Encoding { context: String, message: String },

    /// A successful response did not contain the requested resource.
    #[error("{context}: {message}")]
    NotFound { context: String, message: String },

    /// Connection-level failure (DNS, TLS, timeout, refused connection).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A configuration value was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl LeasewebError {
    pub(crate) fn decoding(context: impl Into<String>, source: &serde_json::Error) -> Self {
        Self::Decoding {
            context: context.into(),
            message: source.to_string(),
        }
    }

    pub(crate) fn encoding(context: impl Into<String>, source: &serde_json::Error) -> Self {
        Self::Encoding {
            context: context.into(),
            message: source.to_string(),
        }
    }

    /// Returns the structured API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Api(info) => Some(info),
            _ => None,
        }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a configuration value
/// was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a LeasewebError
pub type LeasewebResult<T> = Result<T, LeasewebError>;
