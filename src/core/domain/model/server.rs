//! Domain model for dedicated servers from the `/servers` endpoints.

use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// A dedicated (bare metal) server.
///
/// Returned by `/bareMetals/v2/servers/{id}` and, wrapped in a `servers`
/// envelope, by `/bareMetals/v2/servers`. Network addresses are reported
/// with their prefix length stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Server identifier.
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contract: Contract,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_interfaces: NetworkInterfaces,
    /// Physical placement of the server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Location,
}

impl Server {
    /// Returns the public IP address, if the server has a public interface.
    pub fn public_ip(&self) -> Option<&str> {
        self.network_interfaces
            .public
            .as_ref()
            .map(|interface| interface.ip.as_str())
    }

    /// Returns the remote management (IPMI/iDRAC) IP address, if any.
    pub fn remote_management_ip(&self) -> Option<&str> {
        self.network_interfaces
            .remote_management
            .as_ref()
            .map(|interface| interface.ip.as_str())
    }

    /// Drops the `/prefix` part of the public and remote management addresses.
    pub(crate) fn strip_prefix_lengths(mut self) -> Self {
        for interface in [
            self.network_interfaces.public.as_mut(),
            self.network_interfaces.remote_management.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            if let Some(end) = interface.ip.find('/') {
                interface.ip.truncate(end);
            }
        }
        self
    }
}

/// Contract the server is billed under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Contract {
    /// Free-form customer reference.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reference: String,
}

/// Network interfaces of a server. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaces {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<InterfaceAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_management: Option<InterfaceAddress>,
}

/// Address assigned to a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InterfaceAddress {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip: String,
}

/// Physical location of a server in a data center.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    /// Data center, e.g. "AMS-01".
    #[serde(default, deserialize_with = "null_as_default")]
    pub site: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suite: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rack: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
}

/// Envelope of the server listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ServerList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub servers: Vec<Server>,
}
