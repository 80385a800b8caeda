//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use calc_cache::{api::create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::standard())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

// == Arithmetic Endpoint Tests ==

#[tokio::test]
async fn test_add_endpoint() {
    let app = create_test_app();

    let (status, body) = get(&app, "/add?x=2&y=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"action":"add","x":2,"y":3,"answer":5,"cached":false}"#
    );
}

#[tokio::test]
async fn test_subtract_endpoint() {
    let app = create_test_app();

    let (_, body) = get(&app, "/subtract?x=2&y=3").await;
    assert_eq!(
        body,
        r#"{"action":"subtract","x":2,"y":3,"answer":-1,"cached":false}"#
    );
}

#[tokio::test]
async fn test_multiply_endpoint() {
    let app = create_test_app();

    let (_, body) = get(&app, "/multiply?x=2&y=3").await;
    assert_eq!(
        body,
        r#"{"action":"multiply","x":2,"y":3,"answer":6,"cached":false}"#
    );
}

#[tokio::test]
async fn test_divide_endpoint() {
    let app = create_test_app();

    let (_, body) = get(&app, "/divide?x=3&y=2").await;
    assert_eq!(
        body,
        r#"{"action":"divide","x":3,"y":2,"answer":1.5,"cached":false}"#
    );
}

#[tokio::test]
async fn test_fractional_operands() {
    let app = create_test_app();

    let (_, json) = get_json(&app, "/multiply?x=0.5&y=-4.25").await;
    assert_eq!(json["x"], json!(0.5));
    assert_eq!(json["y"], json!(-4.25));
    assert_eq!(json["answer"], json!(-2.125));
}

#[tokio::test]
async fn test_divide_by_zero_answer_is_null() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/divide?x=1&y=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["answer"].is_null());
    assert!(json.get("error").is_none());
}

// == Cache Behavior Tests ==

#[tokio::test]
async fn test_repeated_request_is_cached() {
    let app = create_test_app();

    let (_, first) = get(&app, "/divide?x=3&y=2").await;
    let (_, second) = get(&app, "/divide?x=3&y=2").await;

    assert_eq!(
        first,
        r#"{"action":"divide","x":3,"y":2,"answer":1.5,"cached":false}"#
    );
    assert_eq!(
        second,
        r#"{"action":"divide","x":3,"y":2,"answer":1.5,"cached":true}"#
    );
}

#[tokio::test]
async fn test_query_order_does_not_matter() {
    let app = create_test_app();

    let (_, first) = get_json(&app, "/add?x=2&y=3").await;
    let (_, second) = get_json(&app, "/add?y=3&x=2").await;

    assert_eq!(first["cached"], json!(false));
    assert_eq!(second["cached"], json!(true));
}

#[tokio::test]
async fn test_operations_cached_separately() {
    let app = create_test_app();

    let (_, add) = get_json(&app, "/add?x=2&y=3").await;
    let (_, multiply) = get_json(&app, "/multiply?x=2&y=3").await;

    assert_eq!(add["cached"], json!(false));
    assert_eq!(multiply["cached"], json!(false));
    assert_eq!(multiply["answer"], json!(6));
}

// == Argument Error Tests ==

#[tokio::test]
async fn test_missing_argument() {
    let app = create_test_app();

    let (status, body) = get(&app, "/add?x=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"action":"add","x":0,"y":0,"answer":0,"cached":false,"error":"Argument Missing"}"#
    );
}

#[tokio::test]
async fn test_empty_argument_counts_as_missing() {
    let app = create_test_app();

    let (_, json) = get_json(&app, "/multiply?x=&y=3").await;
    assert_eq!(json["error"], json!("Argument Missing"));
}

#[tokio::test]
async fn test_parse_failure() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/add?x=2&y=three").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["error"].as_str().unwrap().contains("three"));
    assert_eq!(json["answer"], json!(0));
    assert_eq!(json["cached"], json!(false));
}

#[tokio::test]
async fn test_argument_errors_never_cached() {
    let app = create_test_app();

    get(&app, "/add?x=2").await;
    let (_, repeat) = get_json(&app, "/add?x=2").await;
    assert_eq!(repeat["cached"], json!(false));

    let (_, stats) = get_json(&app, "/stats").await;
    assert_eq!(stats["hits"], json!(0));
    assert_eq!(stats["misses"], json!(0));
    assert_eq!(stats["total_entries"], json!(0));
}

#[tokio::test]
async fn test_repeated_operand_uses_first_value() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/add?x=1&x=2&y=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["x"], json!(1));
    assert_eq!(json["answer"], json!(4));
    assert!(json.get("error").is_none());

    let (status, json) = get_json(&app, "/add?x=2&y=3&y=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["answer"], json!(5));
}

#[tokio::test]
async fn test_out_of_range_operand() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/add?x=1e400&y=1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["error"].as_str().unwrap().contains("out of range"));
    assert_eq!(json["x"], json!(0));
    assert_eq!(json["answer"], json!(0));
}

#[tokio::test]
async fn test_unknown_operation() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/modulo?x=2&y=3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], json!("Unknown operation: modulo"));
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();

    get(&app, "/add?x=1&y=1").await; // miss
    get(&app, "/add?x=1&y=1").await; // hit
    get(&app, "/subtract?x=1&y=1").await; // miss

    let (status, json) = get_json(&app, "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], json!(1));
    assert_eq!(json["misses"], json!(2));
    assert_eq!(json["inserts"], json!(2));
    assert_eq!(json["total_entries"], json!(2));
    assert_eq!(json["expired_entries"], json!(0));
    assert!(json.get("hit_rate").is_some());
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], json!("healthy"));
    assert!(json["timestamp"].is_string());
}

// == Live Server Tests ==

#[tokio::test]
async fn test_live_server_round_trip() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, create_test_app()).await.unwrap();
    });

    let client = reqwest::Client::new();
    let url = format!("http://{}/divide?x=3&y=2", addr);

    let first: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    let second = client.get(&url).send().await.unwrap();

    assert_eq!(second.status(), reqwest::StatusCode::OK);
    assert_eq!(second.headers()["content-type"], "application/json");
    let second: Value = second.json().await.unwrap();

    assert_eq!(first["cached"], json!(false));
    assert_eq!(second["cached"], json!(true));
    assert_eq!(second["answer"], json!(1.5));

    server.abort();
}
