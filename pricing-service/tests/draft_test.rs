//! Subscription draft endpoint integration tests.

mod common;

use chrono::{DateTime, Utc};
use common::{customers, decimal, products, taxes, TestApp};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn draft_body() -> Value {
    json!({
        "mode": "create",
        "customerId": "cus_1",
        "customers": customers(),
        "lineItems": [
            { "id": "li_1", "productId": "p1", "quantity": 2, "taxId": "t1" },
            { "id": "li_2", "productId": "p2", "quantity": 1 }
        ],
        "products": products(),
        "taxes": taxes(),
        "intervalCount": 1,
        "interval": "month",
        "startDate": "2024-01-31T00:00:00Z"
    })
}

#[tokio::test]
async fn create_draft_builds_payload() {
    let app = TestApp::spawn().await;

    let response = app.post_draft(&draft_body()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");

    assert_eq!(body["mode"], "create");
    assert!(body.get("subscriptionId").is_none());
    assert_eq!(body["customerId"], "cus_1");
    assert_eq!(body["customerName"], "Acme Corp");
    assert_eq!(body["customerEmail"], "billing@acme.test");
    assert_eq!(body["productId"], "p1");
    assert_eq!(body["productName"], "Starter + 1 more");
    assert_eq!(body["status"], "active");
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["intervalCount"], 1);
    assert_eq!(body["interval"], "month");
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));

    assert_eq!(decimal(&body["subtotal"]), dec!(119.99));
    assert_eq!(decimal(&body["taxTotal"]), dec!(10));
    assert_eq!(decimal(&body["amount"]), dec!(129.99));

    let period_end: DateTime<Utc> = body["currentPeriodEnd"]
        .as_str()
        .expect("currentPeriodEnd")
        .parse()
        .expect("invalid timestamp");
    assert_eq!(
        period_end,
        "2024-02-29T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(body["currentPeriodStart"], body["startDate"]);
}

#[tokio::test]
async fn edit_draft_carries_subscription_id() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body["mode"] = json!("edit");
    body["subscriptionId"] = json!("sub_42");

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["mode"], "edit");
    assert_eq!(body["subscriptionId"], "sub_42");
}

#[tokio::test]
async fn start_date_defaults_to_now() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body.as_object_mut().unwrap().remove("startDate");
    body["interval"] = json!("day");

    let before = Utc::now();
    let response = app.post_draft(&body).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    let start: DateTime<Utc> = body["startDate"].as_str().unwrap().parse().unwrap();
    let end: DateTime<Utc> = body["currentPeriodEnd"].as_str().unwrap().parse().unwrap();

    assert!(start >= before);
    assert_eq!(end - start, chrono::Duration::days(1));
}

#[tokio::test]
async fn missing_customer_is_rejected() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body["customerId"] = json!("");

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Please select a customer");
}

#[tokio::test]
async fn draft_without_billable_items_is_rejected() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body["lineItems"] = json!([{ "id": "li_1", "productId": "missing" }]);

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Please add at least one product");
}

#[tokio::test]
async fn unknown_customer_is_not_found() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body["customerId"] = json!("cus_404");

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Customer not found: cus_404");
}

#[tokio::test]
async fn mixed_currencies_are_rejected() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body["lineItems"] = json!([
        { "id": "li_1", "productId": "p1" },
        { "id": "li_2", "productId": "p4" }
    ]);

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["error"],
        "Line items mix currencies: expected USD, found EUR"
    );
}

#[tokio::test]
async fn non_positive_interval_count_is_rejected() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body["intervalCount"] = json!(0);

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["error"],
        "Interval count must be a positive integer, got 0"
    );
}

#[tokio::test]
async fn overflowing_amount_is_rejected() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body["products"] = json!([
        { "productId": "p1", "name": "Huge", "price": "79228162514264337593543950335" }
    ]);
    body["lineItems"] = json!([{ "id": "li_1", "productId": "p1", "quantity": 2 }]);

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Amount out of range for line item li_1");
}

#[tokio::test]
async fn bad_start_date_gets_json_error_body() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body["startDate"] = json!("next tuesday");

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .starts_with("Json parse error"));
}

#[tokio::test]
async fn missing_interval_count_gets_json_error_body() {
    let app = TestApp::spawn().await;

    let mut body = draft_body();
    body.as_object_mut().unwrap().remove("intervalCount");

    let response = app.post_draft(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().is_some());
}
