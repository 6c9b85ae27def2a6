//! Domain model for server IP addresses.

use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// An IP address assigned to a server, from `/servers/{id}/ips/{ip}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ip {
    /// The address, possibly with a prefix length (e.g. "85.17.0.12/32").
    #[serde(default)]
    pub ip: String,
    /// PTR record for the address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reverse_lookup: String,
    /// Whether traffic to the address is currently discarded.
    #[serde(default)]
    pub null_routed: bool,
}

/// Body of a reverse lookup update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReverseLookupUpdate<'a> {
    pub reverse_lookup: &'a str,
}
