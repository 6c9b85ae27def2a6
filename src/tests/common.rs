use crate::LeasewebClient;
use wiremock::MockServer;

pub(crate) const TEST_TOKEN: &str = "test-token";

pub(crate) fn create_test_client(mock_server: &MockServer) -> LeasewebClient {
    LeasewebClient::builder()
        .base_url(mock_server.uri())
        .unwrap()
        .token(TEST_TOKEN)
        .unwrap()
        .build()
        .unwrap()
}

/// A server as listed by the API, with prefix lengths on both addresses.
pub(crate) fn server_json(id: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id.to_string(),
        "contract": { "reference": format!("ref-{id}") },
        "networkInterfaces": {
            "public": { "ip": format!("85.17.0.{}/28", id % 250) },
            "remoteManagement": { "ip": format!("10.11.12.{}/27", id % 250) }
        },
        "location": { "site": "AMS-01", "suite": "A6", "rack": "13", "unit": "16-17" }
    })
}

pub(crate) fn error_json(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "correlationId": "c-1",
        "errorCode": code,
        "errorMessage": message
    })
}
