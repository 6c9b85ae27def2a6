//! Turns non-success responses into typed errors and reports them.

use crate::core::domain::error::{ErrorInfo, LeasewebError};
use reqwest::{Method, StatusCode};
use tracing::error;
use url::Url;

/// Decodes an error body into a structured API error.
///
/// A body that is not a JSON error object becomes a `Decoding` error
/// carrying the same context.
pub(crate) fn decode_error(body: &[u8], context: &str) -> LeasewebError {
    match serde_json::from_slice::<ErrorInfo>(body) {
        Ok(mut info) => {
            info.context = context.to_string();
            LeasewebError::Api(info)
        }
        Err(e) => LeasewebError::decoding(context, &e),
    }
}

/// Emits one error event for a failed request, plus one per detailed field.
pub(crate) fn log_api_error(method: &Method, url: &Url, status: StatusCode, err: &LeasewebError) {
    match err {
        LeasewebError::Api(info) => {
            error!(
                url = %url,
                method = %method,
                status = status.as_u16(),
                context = %info.context,
                code = %info.code,
                error_message = %info.message,
                correlation_id = %info.correlation_id,
                "API request error"
            );
            for (field, details) in &info.details {
                error!(
                    url = %url,
                    method = %method,
                    correlation_id = %info.correlation_id,
                    field = %field,
                    details = ?details,
                    "API request error detail"
                );
            }
        }
        other => {
            error!(
                url = %url,
                method = %method,
                status = status.as_u16(),
                error = %other,
                "API request error"
            );
        }
    }
}
