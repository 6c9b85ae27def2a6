use crate::tests::common::create_test_client;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

#[tokio::test]
async fn test_operating_systems() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/bareMetals/v2/operatingSystems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_metadata": { "limit": 20, "offset": 0, "totalCount": 2 },
            "operatingSystems": [
                { "id": "UBUNTU_22_04_64BIT", "name": "Ubuntu 22.04 LTS (Jammy Jellyfish) (amd64)" },
                { "id": "DEBIAN_12_64BIT", "name": "Debian 12 (amd64)" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let systems = client.operating_systems().await.unwrap();
    assert_eq!(systems.len(), 2);
    assert_eq!(systems[0].id, "UBUNTU_22_04_64BIT");
    assert_eq!(systems[1].name, "Debian 12 (amd64)");
}

#[tokio::test]
async fn test_control_panels_for_operating_system() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/bareMetals/v2/controlPanels"))
        .and(query_param("operatingSystemId", "UBUNTU_22_04_64BIT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "controlPanels": [{ "id": "PLESK_18", "name": "Plesk 18" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let panels = client
        .control_panels(Some("UBUNTU_22_04_64BIT"))
        .await
        .unwrap();
    assert_eq!(panels.len(), 1);
    assert_eq!(panels[0].id, "PLESK_18");
}

#[tokio::test]
async fn test_control_panels_without_filter() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/bareMetals/v2/controlPanels"))
        .and(query_param_is_missing("operatingSystemId"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "controlPanels": [] })),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    assert!(client.control_panels(None).await.unwrap().is_empty());
    assert!(client.control_panels(Some("")).await.unwrap().is_empty());
}
