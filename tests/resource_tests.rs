//! Integration tests for the typed resources.
//!
//! Each test checks what a resource puts on the wire and how it decodes the
//! answer, using a mock Recharge server.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use recharge_api::rest::resources::{
    AddressApplyDiscount, AddressListQuery, AsyncBatchCreateTaskBody, AsyncBatchType,
    DiscountDeleteBody, DiscountListQuery, OnetimeDeleteBody, ProductListQuery,
};
use recharge_api::{AccessToken, BaseUrl, RechargeConfig, RestClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALL_SCOPES: &str = "read_customers,write_customers,read_products,write_products,\
                          read_discounts,write_discounts,read_batches,write_batches";

fn create_client(server: &MockServer) -> RestClient {
    let config = RechargeConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .scopes(ALL_SCOPES.parse().unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .retry_wait(Duration::from_millis(10))
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

// === Addresses (2021-01) ===

#[tokio::test]
async fn test_address_list_encodes_ids_and_timestamps() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/42/addresses"))
        .and(header("X-Recharge-Version", "2021-01"))
        .and(query_param("ids", "1,2,3"))
        .and(query_param("created_at_min", "2021-03-04T05:06:07"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "addresses": [
                {"id": 1, "customer_id": 42, "city": "Austin"},
                {"id": 2, "customer_id": 42, "created_at": "2021-03-04T05:06:07"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let query = AddressListQuery {
        ids: Some(vec![1, 2, 3]),
        created_at_min: Some(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap()),
        limit: Some(50),
        ..Default::default()
    };

    let addresses = client.addresses().list(42, Some(&query)).await.unwrap();

    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0].city.as_deref(), Some("Austin"));
    assert_eq!(
        addresses[1].created_at,
        Some(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap())
    );
}

#[tokio::test]
async fn test_address_count_returns_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/addresses/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 17})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let count = client.addresses().count(None).await.unwrap();

    assert_eq!(count.into_inner(), 17);
}

#[tokio::test]
async fn test_apply_discount_by_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/addresses/10/apply_discount"))
        .and(body_json(json!({"discount_code": "SAVE10"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": {"id": 10, "discount_id": 77}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let address = client
        .addresses()
        .apply_discount(
            10,
            &AddressApplyDiscount::Code {
                discount_code: "SAVE10".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(address.discount_id, Some(77));
}

#[tokio::test]
async fn test_remove_discount_sends_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/addresses/10/remove_discount"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": {"id": 10}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let address = client.addresses().remove_discount(10).await.unwrap();

    assert_eq!(address.id, 10);
    assert_eq!(address.discount_id, None);
}

#[tokio::test]
async fn test_address_update_without_body_sends_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/addresses/10"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": {"id": 10}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    client.addresses().update(10, None).await.unwrap();
}

// === Products (2021-01) ===

#[tokio::test]
async fn test_product_list_decodes_products() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("X-Recharge-Version", "2021-01"))
        .and(query_param("shopify_product_id", "555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{
                "id": 1,
                "shopify_product_id": 555,
                "title": "Coffee",
                "discount_type": "percentage",
                "discount_amount": 10.0,
                "order_interval_unit": "month",
                "created_at": "2021-01-02T03:04:05"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let query = ProductListQuery {
        shopify_product_id: Some(555),
        ..Default::default()
    };
    let products = client.products().list(Some(&query)).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title.as_deref(), Some("Coffee"));
    assert_eq!(products[0].discount_amount, Some(10.0));
}

#[tokio::test]
async fn test_product_delete_returns_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/3"))
        .respond_with(ResponseTemplate::new(204).insert_header("X-Request-Id", "req-del"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client.products().delete(3).await.unwrap();

    assert_eq!(response.request_id(), Some("req-del"));
}

// === Discounts (2021-11) ===

#[tokio::test]
async fn test_discount_list_sends_version_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discounts"))
        .and(header("X-Recharge-Version", "2021-11"))
        .and(query_param("ids", "8,9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "discounts": [
                {"id": 8, "code": "A", "value": "10", "value_type": "percentage"},
                {"id": 9, "code": "B", "value": "5.00", "value_type": "fixed_amount"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let query = DiscountListQuery {
        ids: Some(vec![8, 9]),
        ..Default::default()
    };
    let discounts = client.discounts().list(Some(&query)).await.unwrap();

    assert_eq!(discounts.len(), 2);
    assert_eq!(discounts[1].code.as_deref(), Some("B"));
    assert_eq!(discounts[1].value.as_deref(), Some("5.00"));
}

// === Async batches (2021-11) ===

#[tokio::test]
async fn test_create_tasks_wraps_bodies_in_tasks_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/async_batches/21/tasks"))
        .and(header("X-Recharge-Version", "2021-11"))
        .and(body_json(json!({
            "tasks": [
                {"body": {"discount_id": 1}},
                {"body": {"discount_id": 2}}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "async_batch_tasks": [
                {"id": 100, "body": {"discount_id": 1}},
                {"id": 101, "body": {"discount_id": 2}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let tasks = vec![
        AsyncBatchCreateTaskBody::new(DiscountDeleteBody { discount_id: 1 }),
        AsyncBatchCreateTaskBody::new(DiscountDeleteBody { discount_id: 2 }),
    ];
    let created = client.async_batches().create_tasks(21, &tasks).await.unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].id, 100);
    assert_eq!(created[1].body["discount_id"], 2);
}

#[test]
fn test_task_body_reports_batch_type() {
    let task = AsyncBatchCreateTaskBody::new(OnetimeDeleteBody { onetime_id: 4 });
    assert_eq!(task.body.batch_type(), AsyncBatchType::OnetimeDelete);
}

#[tokio::test]
async fn test_process_batch_posts_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/async_batches/21/process"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "async_batch": {
                "id": 21,
                "batch_type": "onetime_delete",
                "status": "processing",
                "submitted_at": "2021-11-01T10:00:00+00:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let batch = client.async_batches().process(21).await.unwrap();

    assert_eq!(batch.batch_type, AsyncBatchType::OnetimeDelete);
    assert_eq!(batch.status.as_deref(), Some("processing"));
    assert_eq!(
        batch.submitted_at,
        Some(Utc.with_ymd_and_hms(2021, 11, 1, 10, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn test_list_tasks_decodes_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/async_batches/21/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "async_batch_tasks": [{
                "id": 5,
                "body": {"onetime_id": 4},
                "result": {"status_code": 200, "output": {"ok": true}}
            }]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let tasks = client.async_batches().list_tasks(21).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].result.is_some());
}
