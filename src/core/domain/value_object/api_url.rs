use crate::core::domain::error::ValidationError;
use std::fmt;
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// The base URL of the Leaseweb API, e.g. `https://api.leaseweb.com`.
///
/// Endpoint paths (`/bareMetals/v2/...`) are appended to it, so it must be
/// able to act as a base: an http(s) URL with a host and without query or
/// fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeasewebApiUrl(Url);

impl LeasewebApiUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    /// Returns `ValidationError` if the URL cannot be parsed or violates the constraints above.
    pub fn new(url: &str) -> Result<Self, ValidationError> {
        validate_url(url)?;
        let parsed = Url::parse(url.trim())
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for LeasewebApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str().trim_end_matches('/'))
    }
}

/// Validates a base URL string.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    let parsed = Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }
    if parsed.cannot_be_a_base() || parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::ConstraintViolation(
            "URL must contain a host".to_string(),
        ));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "URL cannot contain a query string or fragment".to_string(),
        ));
    }

    Ok(())
}
