//! Domain model for server power status.

use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// Power status as reported by IPMI and the PDU, from `/servers/{id}/powerInfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PowerInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipmi: PowerStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pdu: PowerStatus,
}

impl PowerInfo {
    /// A server counts as powered on unless either subsystem reports "off".
    pub fn is_powered_on(&self) -> bool {
        self.ipmi.status != "off" && self.pdu.status != "off"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PowerStatus {
    /// e.g. "on", "off", "unknown".
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}
