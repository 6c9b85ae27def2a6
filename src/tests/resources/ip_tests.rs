use crate::tests::common::{create_test_client, error_json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[tokio::test]
async fn test_server_ip_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/bareMetals/v2/servers/12345/ips/85.17.0.12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ip": "85.17.0.12/32",
            "gateway": "85.17.0.1",
            "reverseLookup": "web01.example.com",
            "nullRouted": false
        })))
        .mount(&mock_server)
        .await;

    let ip = client.server_ip("12345", "85.17.0.12").await.unwrap();
    assert_eq!(ip.ip, "85.17.0.12/32");
    assert_eq!(ip.reverse_lookup, "web01.example.com");
    assert!(!ip.null_routed);
}

#[tokio::test]
async fn test_server_ip_null_reverse_lookup() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/bareMetals/v2/servers/12345/ips/85.17.0.12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ip": "85.17.0.12/32",
            "reverseLookup": null,
            "nullRouted": true
        })))
        .mount(&mock_server)
        .await;

    let ip = client.server_ip("12345", "85.17.0.12").await.unwrap();
    assert_eq!(ip.reverse_lookup, "");
    assert!(ip.null_routed);
}

#[tokio::test]
async fn test_update_reverse_lookup() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/bareMetals/v2/servers/12345/ips/85.17.0.12"))
        .and(body_json(serde_json::json!({ "reverseLookup": "mail.example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ip": "85.17.0.12/32",
            "reverseLookup": "mail.example.com",
            "nullRouted": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .update_reverse_lookup("12345", "85.17.0.12", "mail.example.com")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_null_and_unnull_ip() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/bareMetals/v2/servers/12345/ips/85.17.0.12/null"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bareMetals/v2/servers/12345/ips/85.17.0.12/unnull"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.null_ip("12345", "85.17.0.12").await.unwrap();
    client.unnull_ip("12345", "85.17.0.12").await.unwrap();
}

#[tokio::test]
async fn test_null_ip_requires_accepted() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/bareMetals/v2/servers/12345/ips/85.17.0.12/null"))
        .respond_with(ResponseTemplate::new(409).set_body_json(error_json(
            "409",
            "IP is already null routed",
        )))
        .mount(&mock_server)
        .await;

    let err = client.null_ip("12345", "85.17.0.12").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "(409) nulling server 12345 IP 85.17.0.12: IP is already null routed"
    );
}
