//! End-to-end tests for the current-user routes with corrected status codes.
//!
//! Run with: cargo test -p goalpost-integration-tests

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use goalpost_api::config::ResponseMode;
use goalpost_integration_tests::{TestServer, sample_categories, sample_goals};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn post(server: &TestServer, path: &str) -> (StatusCode, Value) {
    let response = server.post(path).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

async fn list_ids(server: &TestServer, list: &str) -> Vec<i64> {
    let body: Value = server.get("/v1/me").await.unwrap().json().await.unwrap();
    body["data"][list]
        .as_array()
        .unwrap()
        .iter()
        .map(|goal| goal["id"].as_i64().unwrap())
        .collect()
}

fn success() -> Value {
    json!({ "status": 200, "data": "success" })
}

#[tokio::test]
async fn test_me() {
    let server = TestServer::start(ResponseMode::Corrected).await.unwrap();

    let body: Value = server.get("/v1/me").await.unwrap().json().await.unwrap();
    assert_eq!(body["status"], json!(200));
    assert_eq!(body["data"]["name"], json!("Ada"));
    assert_eq!(body["data"]["achievedGoals"], json!([]));
}

#[tokio::test]
async fn test_me_without_users() {
    let server = TestServer::with_snapshots(
        ResponseMode::Corrected,
        &sample_goals(),
        &json!([]),
        &sample_categories(),
    )
    .await
    .unwrap();

    let response = server.get("/v1/me").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = post(&server, "/v1/me/goals/1/accept").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], json!("User could not be found"));
}

#[tokio::test]
async fn test_accept_twice_then_achieve() {
    let server = TestServer::start(ResponseMode::Corrected).await.unwrap();

    assert_eq!(post(&server, "/v1/me/goals/1/accept").await, (StatusCode::OK, success()));
    assert_eq!(post(&server, "/v1/me/goals/1/accept").await.0, StatusCode::OK);
    assert_eq!(list_ids(&server, "acceptedGoals").await, vec![1, 1]);

    assert_eq!(post(&server, "/v1/me/goals/1/achieve").await, (StatusCode::OK, success()));
    assert_eq!(list_ids(&server, "achievedGoals").await, vec![1]);
}

#[tokio::test]
async fn test_achieve_unaccepted_goal_is_rejected() {
    let server = TestServer::start(ResponseMode::Corrected).await.unwrap();

    let (status, body) = post(&server, "/v1/me/goals/2/achieve").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "status": 400, "data": "Goal could not be found" }));
    assert!(list_ids(&server, "achievedGoals").await.is_empty());
}

#[tokio::test]
async fn test_challenge_and_gift() {
    let server = TestServer::start(ResponseMode::Corrected).await.unwrap();

    assert_eq!(
        post(&server, "/v1/me/goals/2/challenge/2").await,
        (StatusCode::OK, success())
    );
    assert_eq!(post(&server, "/v1/me/goals/3/gift/1").await, (StatusCode::OK, success()));
    assert_eq!(list_ids(&server, "giftedGoals").await, vec![3]);

    let (status, body) = post(&server, "/v1/me/goals/2/challenge/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": 404, "data": "User could not be found" }));

    let (status, body) = post(&server, "/v1/me/goals/42/gift/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": 404, "data": "could not find user or goal" }));
}

#[tokio::test]
async fn test_concurrent_accepts_are_all_recorded() {
    let server = TestServer::start(ResponseMode::Corrected).await.unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let client = server.client.clone();
        let url = server.url("/v1/me/goals/2/accept");
        tasks.spawn(async move { client.post(url).send().await });
    }
    while let Some(result) = tasks.join_next().await {
        assert_eq!(result.unwrap().unwrap().status(), StatusCode::OK);
    }

    assert_eq!(list_ids(&server, "acceptedGoals").await, vec![2; 20]);
}
