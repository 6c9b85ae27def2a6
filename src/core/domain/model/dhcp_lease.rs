//! Domain model for DHCP leases used for network (PXE) boots.

use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// DHCP reservations of a server, from `/servers/{id}/leases`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DhcpLease {
    #[serde(default, deserialize_with = "null_as_default")]
    pub leases: Vec<Lease>,
}

impl DhcpLease {
    /// Returns the boot file of the first lease, or `""` when there is none.
    pub fn boot_file(&self) -> &str {
        self.leases
            .first()
            .map_or("", |lease| lease.bootfile.as_str())
    }
}

/// A single DHCP reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lease {
    #[serde(default)]
    pub ip: String,
    /// File served to the client for network boot.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bootfile: String,
}

/// Body of a lease creation request.
#[derive(Debug, Serialize)]
pub(crate) struct NewLease<'a> {
    pub bootfile: &'a str,
}
