//! Domain model for server network interfaces.

use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Network interface selector used in `/servers/{id}/networkInterfaces/{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NetworkType {
    Public,
    Internal,
    RemoteManagement,
}

impl NetworkType {
    /// Returns the path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::RemoteManagement => "remoteManagement",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Switch port state of a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkInterfaceInfo {
    /// "OPEN" or "CLOSED".
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl NetworkInterfaceInfo {
    /// True only for the exact status "OPEN".
    pub fn is_opened(&self) -> bool {
        self.status == "OPEN"
    }
}
