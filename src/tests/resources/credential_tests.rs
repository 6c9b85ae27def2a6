use crate::{Credential, tests::common::create_test_client};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn root_credential(password: &str) -> Credential {
    Credential {
        credential_type: "OPERATING_SYSTEM".to_string(),
        username: "root".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_create_credential_sends_full_body() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/bareMetals/v2/servers/12345/credentials"))
        .and(body_json(serde_json::json!({
            "type": "OPERATING_SYSTEM",
            "username": "root",
            "password": "s3cr3t"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "OPERATING_SYSTEM",
            "username": "root",
            "password": "s3cr3t"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client
        .create_credential("12345", &root_credential("s3cr3t"))
        .await
        .unwrap();
    assert_eq!(created, root_credential("s3cr3t"));
}

#[tokio::test]
async fn test_get_credential() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(
            "/bareMetals/v2/servers/12345/credentials/OPERATING_SYSTEM/root",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "OPERATING_SYSTEM",
            "username": "root",
            "password": "mys3cr3tp@ssw0rd"
        })))
        .mount(&mock_server)
        .await;

    let credential = client
        .credential("12345", "OPERATING_SYSTEM", "root")
        .await
        .unwrap();
    assert_eq!(credential.password, "mys3cr3tp@ssw0rd");
}

#[tokio::test]
async fn test_update_credential_sends_password_only() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PUT"))
        .and(path(
            "/bareMetals/v2/servers/12345/credentials/OPERATING_SYSTEM/root",
        ))
        .and(body_json(serde_json::json!({ "password": "new-pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "OPERATING_SYSTEM",
            "username": "root",
            "password": "new-pw"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = client
        .update_credential("12345", &root_credential("new-pw"))
        .await
        .unwrap();
    assert_eq!(updated.password, "new-pw");

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, serde_json::json!({ "password": "new-pw" }));
}

#[tokio::test]
async fn test_delete_credential() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path(
            "/bareMetals/v2/servers/12345/credentials/OPERATING_SYSTEM/root",
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .delete_credential("12345", &root_credential(""))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_username_is_path_encoded() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(
            "/bareMetals/v2/servers/12345/credentials/CONTROL_PANEL/admin%2Fops",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "CONTROL_PANEL",
            "username": "admin/ops",
            "password": "x"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let credential = client
        .credential("12345", "CONTROL_PANEL", "admin/ops")
        .await
        .unwrap();
    assert_eq!(credential.username, "admin/ops");
}
