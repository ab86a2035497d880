//! End-to-end tests for the store ↔ backend bridge using wiremock.

use std::sync::Arc;

use rust_decimal::Decimal;
use rxstock_api::{ApiClient, StaticTokens};
use rxstock_lists::{
    submit, MemoryPersister, NewItem, ShoppingListStore, SubmitError,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::with_base_url(
        base_url,
        Arc::new(StaticTokens::new(Some("dev-t"), Some("sess-t"))),
    )
    .expect("client construction should not fail")
}

fn store_with_received_list() -> (ShoppingListStore, uuid::Uuid) {
    let store = ShoppingListStore::new(Box::new(MemoryPersister::new()));
    let list = store.create("Monday order", None, None).unwrap();
    store
        .update_details(
            list.id,
            rxstock_lists::ListDetailsEdit {
                supplier_id: Some("sup-1".into()),
                supplier_name: Some("MedSupply".into()),
                ..rxstock_lists::ListDetailsEdit::default()
            },
        )
        .unwrap();
    let item_id = store
        .add_item(
            list.id,
            NewItem {
                product_id: "P1".into(),
                product_name: "Paracetamol".into(),
                sku: None,
                planned_quantity: 5,
                unit_cost: Decimal::new(1000, 2),
                batch_number: None,
                expiry_date: None,
                notes: None,
            },
        )
        .unwrap();
    store.mark_ready(list.id).unwrap();
    store.mark_item_received(list.id, item_id, 5).unwrap();
    (store, list.id)
}

#[tokio::test]
async fn submit_receive_posts_the_received_lines() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/inventory/receive"))
        .and(body_partial_json(serde_json::json!({
            "supplierId": "sup-1",
            "lines": [{ "productId": "P1", "quantity": 5 }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "receivingId": "r-1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (store, list_id) = store_with_received_list();
    let client = test_client(&server.uri());

    submit::submit_receive(&client, &store, list_id)
        .await
        .expect("submission should succeed");
}

#[tokio::test]
async fn submit_receive_with_nothing_received_does_not_touch_the_network() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail the assertion below.

    let store = ShoppingListStore::new(Box::new(MemoryPersister::new()));
    let list = store.create("Untouched", None, None).unwrap();
    let client = test_client(&server.uri());

    let result = submit::submit_receive(&client, &store, list.id).await;
    assert!(matches!(result, Err(SubmitError::NothingReceived)));
    assert!(server
        .received_requests()
        .await
        .expect("requests recorded")
        .is_empty());
}

#[tokio::test]
async fn refresh_from_backend_fetches_the_catalog_and_applies_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/suppliers/sup-1/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [{
                "productId": "P2",
                "productName": "Ibuprofen",
                "lastCost": "8.40",
                "currentStock": 12
            }]
        })))
        .mount(&server)
        .await;

    let store = ShoppingListStore::new(Box::new(MemoryPersister::new()));
    let list = store.create("Needs repricing", None, None).unwrap();
    store
        .update_details(
            list.id,
            rxstock_lists::ListDetailsEdit {
                supplier_id: Some("sup-1".into()),
                ..rxstock_lists::ListDetailsEdit::default()
            },
        )
        .unwrap();
    store
        .add_item(
            list.id,
            NewItem {
                product_id: "P2".into(),
                product_name: "Ibuprofen".into(),
                sku: None,
                planned_quantity: 2,
                unit_cost: Decimal::new(700, 2),
                batch_number: None,
                expiry_date: None,
                notes: None,
            },
        )
        .unwrap();
    let list_id = list.id;
    let client = test_client(&server.uri());

    let report = submit::refresh_costs_from_backend(&client, &store, list_id)
        .await
        .expect("refresh should succeed");

    assert_eq!(report.updated_count, 1);
    assert_eq!(report.changes[0].new_cost, Decimal::new(840, 2));
}

#[tokio::test]
async fn refresh_without_a_supplier_is_rejected_locally() {
    let server = MockServer::start().await;
    let store = ShoppingListStore::new(Box::new(MemoryPersister::new()));
    let list = store.create("No supplier", None, None).unwrap();
    let client = test_client(&server.uri());

    let result = submit::refresh_costs_from_backend(&client, &store, list.id).await;
    assert!(matches!(result, Err(SubmitError::NoSupplier)));
}
