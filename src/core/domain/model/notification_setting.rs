//! Domain model for bandwidth and data traffic notification settings.

use crate::core::domain::value_object::serde_helpers::{float_as_string, null_as_default};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of notification, used in `/servers/{id}/notificationSettings/{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Bandwidth,
    Datatraffic,
}

impl NotificationType {
    /// Returns the path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bandwidth => "bandwidth",
            Self::Datatraffic => "datatraffic",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A threshold notification configured for a server.
///
/// The threshold travels as a JSON string (`"threshold": "1.5"`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NotificationSetting {
    /// Assigned by the API; leave empty when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// e.g. "DAILY", "WEEKLY", "MONTHLY".
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequency: String,
    /// Missing or `null` on the wire reads as `0`.
    #[serde(default, with = "float_as_string")]
    pub threshold: f64,
    /// e.g. "Gbps", "GB".
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
}
