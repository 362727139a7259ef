//! Integration tests for the HTTP client functionality.
//!
//! These tests verify authentication headers, response parsing, error
//! mapping, retries and timeouts against a mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use azurerm_mssql::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use azurerm_mssql::{AccessToken, ClientOptions, EndpointUrl, SubscriptionId};

fn create_test_client(server: &MockServer, tries: u32) -> HttpClient {
    let options = ClientOptions::builder()
        .subscription_id(SubscriptionId::new("sub").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .resource_manager_endpoint(EndpointUrl::new(server.uri()).unwrap())
        .user_agent_prefix("integration-test/1.0")
        .tries(tries)
        .build()
        .unwrap();
    HttpClient::new(&options)
}

fn get(path: &str) -> HttpRequest {
    HttpRequest::builder(HttpMethod::Get, path)
        .query_param("api-version", "2017-03-01-preview")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_request_sends_bearer_token_and_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/sub/resourceGroups/rg"))
        .and(query_param("api-version", "2017-03-01-preview"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .and(header_regex("User-Agent", r"^integration-test/1\.0 azurerm-mssql/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "rg"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 1);
    let response = client
        .request(get("/subscriptions/sub/resourceGroups/rg"))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["name"], "rg");
}

#[tokio::test]
async fn test_put_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "tg"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "x"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 1);
    let request = HttpRequest::builder(HttpMethod::Put, "/subscriptions/sub/x")
        .body(json!({"name": "tg"}))
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_not_found_is_reported_with_arm_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-ms-request-id", "req-404")
                .set_body_json(json!({
                    "error": {"code": "ResourceNotFound", "message": "gone"}
                })),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server, 1);
    let err = client.request(get("/subscriptions/sub/x")).await.unwrap_err();

    assert!(err.was_not_found());
    match err {
        HttpError::Response(e) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.message, r#"Status=404 Code="ResourceNotFound" Message="gone""#);
            assert_eq!(e.error_reference.as_deref(), Some("req-404"));
        }
        other => panic!("expected a response error, got {other}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 1);
    let err = client.request(get("/subscriptions/sub/x")).await.unwrap_err();

    assert!(!err.was_not_found());
    assert!(err.to_string().contains(r#"Body="Bad Gateway""#));
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 3);
    let err = client.request(get("/subscriptions/sub/x")).await.unwrap_err();
    assert!(matches!(err, HttpError::Response(ref e) if e.code == 400));
}

#[tokio::test]
async fn test_server_errors_are_retried_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 2);
    let response = client.request(get("/subscriptions/sub/x")).await.unwrap();
    assert_eq!(response.body["ok"], true);
}

#[tokio::test]
async fn test_retries_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(3)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 1);
    let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub/x")
        .tries(3)
        .build()
        .unwrap();

    let err = client.request(request).await.unwrap_err();
    match err {
        HttpError::MaxRetries(e) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.tries, 3);
        }
        other => panic!("expected MaxRetries, got {other}"),
    }
}

#[tokio::test]
async fn test_without_retries_throttling_fails_immediately() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, 1);
    let err = client.request(get("/subscriptions/sub/x")).await.unwrap_err();
    assert!(matches!(err, HttpError::Response(ref e) if e.code == 429));
}

#[tokio::test]
async fn test_request_timeout_surfaces_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = create_test_client(&server, 1);
    let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub/x")
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.request(request).await.unwrap_err();
    assert!(err.is_timeout());
    assert!(matches!(err, HttpError::Network(_)));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, 1);

    let request = HttpRequest {
        http_method: HttpMethod::Put,
        path: "/subscriptions/sub/x".to_string(),
        body: None,
        query: None,
        timeout: None,
        tries: 1,
    };

    let err = client.request(request).await.unwrap_err();
    assert!(matches!(err, HttpError::InvalidRequest(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
