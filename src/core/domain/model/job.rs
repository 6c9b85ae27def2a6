//! Domain model for server jobs (installations and other long-running actions).

use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// Free-form installation request body.
///
/// The schema (operatingSystemId, hostname, partitions, ...) is owned by the
/// caller; this client only transports it.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// A job running on a server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Job {
    #[serde(default)]
    pub uuid: String,
    /// e.g. "ACTIVE", "FINISHED", "FAILED".
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// The payload the job was started with.
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: Payload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
}
