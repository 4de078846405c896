//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use dino_extinction::{http, BattleSchema, BitcodeCodec, InMemoryStore};
use serde_json::json;

/// Bind to port 0 and return the actual address.
async fn start_server() -> String {
    let schema = Arc::new(BattleSchema::new(InMemoryStore::new(), BitcodeCodec));
    let app = http::router(schema);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_check() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn create_then_fetch() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/battles"))
        .json(&json!({ "id": 1234, "board_size": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = resp.json().await.unwrap();
    let board = json!({ "size": 2, "state": [[null, null], [null, null]] });
    assert_eq!(body, json!({ "id": 1234, "board": board }));

    let resp = client
        .get(format!("{base}/battles/1234"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "board": board }));
}

#[tokio::test]
async fn invalid_create_lists_field_errors() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/battles"))
        .json(&json!({ "id": "abc", "board_size": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "errors": { "id": ["Not a valid integer."] } }));
}

#[tokio::test]
async fn short_id_is_rejected() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/battles"))
        .json(&json!({ "id": 123, "board_size": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body["errors"]["id"][0],
        "The battle ID should be 4 digits long."
    );
}

#[tokio::test]
async fn unknown_battle_is_empty() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/battles/4242"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn oversized_board_is_rejected() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/battles"))
        .json(&json!({ "id": 1234, "board_size": 100_000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "errors": { "board_size": ["The board size should be at most 100."] } })
    );

    let resp = client
        .get(format!("{base}/battles/1234"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn serve_stops_on_signal() {
    let schema = Arc::new(BattleSchema::new(InMemoryStore::new(), BitcodeCodec));
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        http::serve(schema, "127.0.0.1:0", async move {
            let _ = stop_rx.await;
        })
        .await
    });

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn serve_reports_bad_address() {
    let schema = Arc::new(BattleSchema::new(InMemoryStore::new(), BitcodeCodec));

    let result = http::serve(schema, "not-an-address", std::future::pending()).await;
    assert!(result.is_err());
}
