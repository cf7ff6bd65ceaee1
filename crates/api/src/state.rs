//! Application state shared across handlers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ResponseMode;
use crate::error::AppError;
use crate::store::DataStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The data store sits behind a
/// single lock: read routes share it, mutation routes hold it exclusively
/// for the whole lookup-then-push, so concurrent mutations never interleave.
/// Guards must not be held across an `.await`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: RwLock<DataStore>,
    response_mode: ResponseMode,
}

impl AppState {
    /// Create a new application state owning `store`.
    #[must_use]
    pub fn new(store: DataStore, response_mode: ResponseMode) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RwLock::new(store),
                response_mode,
            }),
        }
    }

    /// How handlers pair HTTP status codes with envelopes.
    #[must_use]
    pub fn response_mode(&self) -> ResponseMode {
        self.inner.response_mode
    }

    /// Shared access to the data store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a handler panicked while mutating the store.
    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, DataStore>, AppError> {
        self.inner
            .store
            .read()
            .map_err(|_| AppError::Internal("data store lock poisoned".to_string()))
    }

    /// Exclusive access to the data store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a handler panicked while mutating the store.
    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, DataStore>, AppError> {
        self.inner
            .store
            .write()
            .map_err(|_| AppError::Internal("data store lock poisoned".to_string()))
    }

    /// Whether the store can still be locked.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.inner.store.is_poisoned()
    }
}
