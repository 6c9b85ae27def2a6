//! Domain model for stored server credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A credential stored for a server.
///
/// `credential_type` and `username` identify the credential; only the
/// password can be changed afterwards. The `Debug` representation never
/// includes the password.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credential {
    /// e.g. "OPERATING_SYSTEM", "CONTROL_PANEL", "REMOTE_MANAGEMENT".
    #[serde(rename = "type", default)]
    pub credential_type: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("credential_type", &self.credential_type)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a password change.
#[derive(Serialize)]
pub(crate) struct PasswordUpdate<'a> {
    pub password: &'a str,
}
