//! Structured error body returned by the Leaseweb API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// An error reported by the API with a recognizable JSON body.
///
/// `context` is filled in locally with the operation being performed; the
/// remaining fields come from the wire.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[error("({code}) {context}: {message}")]
pub struct ErrorInfo {
    /// Operation being performed when the error occurred.
    #[serde(skip)]
    pub context: String,
    /// Opaque identifier to quote when contacting support.
    #[serde(default, rename = "correlationId")]
    pub correlation_id: String,
    #[serde(default, rename = "errorCode")]
    pub code: String,
    #[serde(default, rename = "errorMessage")]
    pub message: String,
    /// Field name to the ordered list of problems reported for it.
    #[serde(default, rename = "errorDetails")]
    pub details: BTreeMap<String, Vec<String>>,
}
