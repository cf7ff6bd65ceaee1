//! End-to-end test harness for the Goalpost API.
//!
//! Each [`TestServer`] writes a fresh set of snapshots to a temporary
//! directory, loads them through [`DataStore::load`] exactly as the binary
//! does, and serves [`goalpost_api::app`] on an ephemeral localhost port.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p goalpost-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::net::SocketAddr;
use std::path::Path;

use goalpost_api::config::ResponseMode;
use goalpost_api::state::AppState;
use goalpost_api::store::{CATEGORIES_FILE, DataStore, GOALS_FILE, StoreError, USERS_FILE};
use serde_json::{Value, json};
use tempfile::TempDir;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Errors raised while standing up a test server.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The goals used by most tests: two from the classic scenario plus one
/// with an unparsable date.
#[must_use]
pub fn sample_goals() -> Value {
    json!([
        { "id": 1, "description": "Run 5k", "categoryId": 1, "upVotes": 3, "dateCreated": "2023-01-01" },
        { "id": 2, "description": "Read a book", "categoryId": 2, "upVotes": 7, "dateCreated": "2023-06-01" },
        { "id": "3", "description": "Run a marathon", "categoryId": "1", "upVotes": 5, "dateCreated": "not a date", "featured": true }
    ])
}

/// Two users; the first is the current user.
#[must_use]
pub fn sample_users() -> Value {
    json!([
        { "id": 1, "name": "Ada", "acceptedGoals": [] },
        { "id": 2, "name": "Grace" }
    ])
}

/// Two categories.
#[must_use]
pub fn sample_categories() -> Value {
    json!([
        { "id": 1, "name": "Fitness" },
        { "id": 2, "name": "Learning" }
    ])
}

/// A running API server backed by its own snapshot directory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    _data_dir: TempDir,
}

impl TestServer {
    /// Serve the sample snapshots in `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshots cannot be written or loaded, or the
    /// listener cannot bind.
    pub async fn start(mode: ResponseMode) -> Result<Self, HarnessError> {
        Self::with_snapshots(mode, &sample_goals(), &sample_users(), &sample_categories()).await
    }

    /// Serve the given snapshots in `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshots cannot be written or loaded, or the
    /// listener cannot bind.
    pub async fn with_snapshots(
        mode: ResponseMode,
        goals: &Value,
        users: &Value,
        categories: &Value,
    ) -> Result<Self, HarnessError> {
        let data_dir = tempfile::tempdir()?;
        write_snapshot(data_dir.path(), GOALS_FILE, goals)?;
        write_snapshot(data_dir.path(), USERS_FILE, users)?;
        write_snapshot(data_dir.path(), CATEGORIES_FILE, categories)?;

        let store = DataStore::load(data_dir.path())?;
        let app = goalpost_api::app(AppState::new(store, mode));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            shutdown: Some(shutdown_tx),
            _data_dir: data_dir,
        })
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client.get(self.url(path)).send().await
    }

    /// `POST path` with an empty body.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn post(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client.post(self.url(path)).send().await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

fn write_snapshot(dir: &Path, file: &str, value: &Value) -> io::Result<()> {
    std::fs::write(dir.join(file), value.to_string())
}
