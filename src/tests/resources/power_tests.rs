use crate::tests::common::{create_test_client, error_json};
use tracing_test::traced_test;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn test_power_info() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/bareMetals/v2/servers/12345/powerInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ipmi": { "status": "on" },
            "pdu": { "status": "off" }
        })))
        .mount(&mock_server)
        .await;

    let power = client.power_info("12345").await.unwrap();
    assert_eq!(power.ipmi.status, "on");
    assert_eq!(power.pdu.status, "off");
    assert!(!power.is_powered_on());
}

#[tokio::test]
async fn test_power_info_unknown_status_counts_as_on() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/bareMetals/v2/servers/12345/powerInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ipmi": { "status": "unknown" },
            "pdu": null
        })))
        .mount(&mock_server)
        .await;

    let power = client.power_info("12345").await.unwrap();
    assert!(power.is_powered_on());
}

#[tokio::test]
async fn test_power_on_and_off() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    for action in ["powerOn", "powerOff"] {
        Mock::given(method("POST"))
            .and(path(format!("/bareMetals/v2/servers/12345/{action}")))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    client.power_on("12345").await.unwrap();
    client.power_off("12345").await.unwrap();
}

#[traced_test]
#[tokio::test]
async fn test_power_on_failure_is_logged() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/bareMetals/v2/servers/12345/powerOn"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(error_json("503", "IPMI unreachable")),
        )
        .mount(&mock_server)
        .await;

    let err = client.power_on("12345").await.unwrap_err();
    assert_eq!(err.to_string(), "(503) powering on server 12345: IPMI unreachable");
    assert!(logs_contain("API request error"));
    assert!(logs_contain("correlation_id=c-1"));
}
