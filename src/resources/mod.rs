//! Endpoint operations, one `impl LeasewebClient` block per resource family.

mod catalog;
mod credentials;
mod ips;
mod jobs;
mod leases;
mod network_interfaces;
mod notification_settings;
pub(crate) mod pagination;
mod power;
mod servers;
