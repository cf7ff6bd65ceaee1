//! Fixtures shared by the in-crate router tests.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use goalpost_core::{Category, Goal, User};

use crate::config::ResponseMode;
use crate::state::AppState;
use crate::store::DataStore;

/// Two users, three goals, two categories. User 1 is the current user.
pub fn store() -> DataStore {
    let goals: Vec<Goal> = serde_json::from_value(json!([
        { "id": 1, "description": "Run 5k", "categoryId": 1, "upVotes": 3, "dateCreated": "2023-01-01" },
        { "id": 2, "description": "Read a book", "categoryId": 2, "upVotes": 7, "dateCreated": "2023-06-01" },
        { "id": 3, "description": "Run a marathon", "categoryId": 1, "upVotes": 5, "dateCreated": "someday" }
    ]))
    .unwrap();
    let users: Vec<User> = serde_json::from_value(json!([
        { "id": 1, "name": "Ada" },
        { "id": 2, "name": "Grace" }
    ]))
    .unwrap();
    let categories: Vec<Category> = serde_json::from_value(json!([
        { "id": 1, "name": "Fitness" },
        { "id": 2, "name": "Learning" }
    ]))
    .unwrap();

    DataStore::from_parts(goals, users, categories).unwrap()
}

/// State over [`store`] in the given mode.
pub fn state(mode: ResponseMode) -> AppState {
    AppState::new(store(), mode)
}

/// State over an empty store (no current user).
pub fn empty_state(mode: ResponseMode) -> AppState {
    AppState::new(DataStore::default(), mode)
}

/// Panic while holding the write guard so every later lock attempt fails.
pub fn poison(state: &AppState) {
    let state = state.clone();
    let result = std::thread::spawn(move || {
        let _guard = state.write_store().unwrap();
        panic!("poisoning the data store for a test");
    })
    .join();
    assert!(result.is_err());
}

/// A response reduced to what the tests look at.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
}

/// Send one request through the full application router.
pub async fn send(state: &AppState, method: Method, uri: &str) -> TestResponse {
    send_to(crate::app(state.clone()), method, uri).await
}

/// Send one request through `router`.
pub async fn send_to(router: Router, method: Method, uri: &str) -> TestResponse {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// IDs of the goals in an envelope's `data` array.
pub fn data_ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|goal| goal["id"].as_i64().unwrap())
        .collect()
}
