//! Integration tests for `ApiClient` using wiremock HTTP mocks.

use std::sync::Arc;

use rxstock_api::types::Product;
use rxstock_api::{ApiClient, ApiError, Endpoint, StaticTokens, SESSION_TOKEN_HEADER};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_tokens(base_url: &str, device: Option<&str>, session: Option<&str>) -> ApiClient {
    ApiClient::with_base_url(base_url, Arc::new(StaticTokens::new(device, session)))
        .expect("client construction should not fail")
}

fn product_json() -> serde_json::Value {
    serde_json::json!({
        "id": "P1",
        "name": "Paracetamol 500mg",
        "sku": "PAR500",
        "sellingPrice": "4.99",
        "currentStock": 120,
        "isActive": true
    })
}

#[tokio::test]
async fn enveloped_payload_decodes() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "success": true,
        "data": [product_json()],
        "error": null,
        "message": null
    });
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server.uri(), Some("dev-t"), Some("sess-t"));
    let products: Vec<Product> = client
        .get(&Endpoint::ListProducts, &[])
        .await
        .expect("should decode enveloped payload");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "P1");
    assert_eq!(products[0].name, "Paracetamol 500mg");
}

#[tokio::test]
async fn bare_payload_decodes_identically() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([product_json()])),
        )
        .mount(&server)
        .await;

    let client = client_with_tokens(&server.uri(), Some("dev-t"), Some("sess-t"));
    let products: Vec<Product> = client
        .get(&Endpoint::ListProducts, &[])
        .await
        .expect("should decode bare payload");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "P1");
}

#[tokio::test]
async fn device_header_is_omitted_for_open_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/setup/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ready": true})))
        .mount(&server)
        .await;

    // A device token is held, but setup/status must not send it.
    let client = client_with_tokens(&server.uri(), Some("dev-t"), Some("sess-t"));
    let _: serde_json::Value = client
        .get(&Endpoint::SetupStatus, &[])
        .await
        .expect("setup status should succeed");

    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "open endpoint must not carry the device bearer token"
    );
    assert!(
        !requests[0].headers.contains_key(SESSION_TOKEN_HEADER),
        "open endpoint must not carry the session token"
    );
}

#[tokio::test]
async fn session_header_is_omitted_when_no_token_is_held() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server.uri(), Some("dev-t"), None);
    let _: Vec<Product> = client
        .get(&Endpoint::ListProducts, &[])
        .await
        .expect("request should succeed");

    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests.len(), 1);
    let headers = &requests[0].headers;
    assert_eq!(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default(),
        "Bearer dev-t"
    );
    assert!(
        !headers.contains_key(SESSION_TOKEN_HEADER),
        "a missing session token must omit the header, not send an empty one"
    );
}

#[tokio::test]
async fn both_headers_are_sent_when_required_and_held() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "totalProducts": 10,
                "lowStockCount": 1,
                "expiringSoonCount": 0,
                "inventoryValue": "1234.00"
            }
        })))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server.uri(), Some("dev-t"), Some("sess-t"));
    let _: rxstock_api::types::DashboardReport = client
        .get(&Endpoint::DashboardReport, &[])
        .await
        .expect("dashboard should decode");

    let requests = server.received_requests().await.expect("requests recorded");
    let headers = &requests[0].headers;
    assert_eq!(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default(),
        "Bearer dev-t"
    );
    assert_eq!(
        headers
            .get(SESSION_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default(),
        "sess-t"
    );
    // Content-Type is a standard default header, sent even without a body.
    assert_eq!(
        headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default(),
        "application/json"
    );
}

#[tokio::test]
async fn session_expiry_message_maps_through_the_full_stack() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "message": "session token expired"
        })))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server.uri(), Some("dev-t"), Some("stale"));
    let result: Result<Vec<Product>, ApiError> = client.get(&Endpoint::ListProducts, &[]).await;

    assert!(matches!(result, Err(ApiError::SessionExpired)));
}

#[tokio::test]
async fn server_error_surfaces_the_reported_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/inventory/receive"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false,
            "error": "batch allocation failed"
        })))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server.uri(), Some("dev-t"), Some("sess-t"));
    let body = serde_json::json!({ "lines": [] });
    let result = client
        .request_empty(&Endpoint::ReceiveInventory, &[], Some(&body))
        .await;

    assert!(
        matches!(result, Err(ApiError::Server { ref message }) if message == "batch allocation failed")
    );
}

#[tokio::test]
async fn empty_body_is_success_when_payload_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/expenses/e1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server.uri(), Some("dev-t"), Some("sess-t"));
    client
        .request_empty::<()>(&Endpoint::DeleteExpense { id: "e1".into() }, &[], None)
        .await
        .expect("204 with no body should be success");
}

#[tokio::test]
async fn query_parameters_reach_the_server_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/search"))
        .and(wiremock::matchers::query_param("q", "amoxicillin 250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server.uri(), Some("dev-t"), Some("sess-t"));
    let products: Vec<Product> = client
        .get(&Endpoint::SearchProducts, &[("q", "amoxicillin 250")])
        .await
        .expect("query should match");
    assert!(products.is_empty());
}
