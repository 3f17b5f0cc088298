use reqwest::Method;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::AppConfig;
use shared_gateway::{ApiClient, GatewayError};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&AppConfig {
        api_base_url: server.uri(),
        request_timeout_secs: 5,
    })
}

#[tokio::test]
async fn test_request_deserializes_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doctor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "doctors": [{"id": 1}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body: Value = client
        .request(Method::GET, "/doctor", None, None)
        .await
        .unwrap();

    assert_eq!(body["doctors"][0]["id"], 1);
}

#[tokio::test]
async fn test_bearer_token_is_sent_as_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patient/details"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body: Value = client
        .request(Method::GET, "/patient/details", Some("secret-token"), None)
        .await
        .unwrap();

    assert_eq!(body["id"], 7);
}

#[tokio::test]
async fn test_non_success_status_maps_to_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/doctor/5/bad-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid admin token"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request::<Value>(Method::DELETE, "/doctor/5/bad-token", None, None)
        .await
        .unwrap_err();

    match err {
        GatewayError::Http { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("Invalid admin token"));
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_maps_to_network_error() {
    // Nothing is listening on this port.
    let client = ApiClient::new(&AppConfig {
        api_base_url: "http://127.0.0.1:1".to_string(),
        request_timeout_secs: 1,
    });

    let err = client
        .request::<Value>(Method::GET, "/doctor", None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Network(_)));
}
