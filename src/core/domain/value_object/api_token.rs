use crate::core::domain::error::ValidationError;
use std::fmt;

/// A Leaseweb API token, sent in the `X-Lsw-Auth` header of every request.
///
/// The `Debug` representation never includes the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct LeasewebApiToken(String);

impl LeasewebApiToken {
    /// Creates a new token after validating it.
    ///
    /// # Errors
    /// Returns `ValidationError` if the token is empty or cannot be sent as a header value.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        validate_token(&token)?;
        Ok(Self(token))
    }

    /// Creates a new token without validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LeasewebApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LeasewebApiToken(<redacted>)")
    }
}

/// Validates the format of an API token string.
pub(crate) fn validate_token(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "token".to_string(),
            message: "API token cannot be empty".to_string(),
        });
    }
    if !token.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ValidationError::Format(
            "API token may only contain visible ASCII characters".to_string(),
        ));
    }
    Ok(())
}
