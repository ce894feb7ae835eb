//! Application state container shared across Axum route handlers.
//!
//! This struct holds shared resources: the central data store, the persisted
//! session store, the upload progress tracker, and a reusable HTTP client for
//! outbound calls. It is cheap to clone and passed into route handlers via
//! Axum's `State<T>` extractor.

use crate::exports::ExportHistory;
use crate::session::SessionStore;
use crate::uploads::UploadManager;
use std::sync::Arc;
use store::DataStore;

/// Central application state shared across the server.
///
/// This includes:
/// - The seeded in-memory `DataStore` holding every entity collection.
/// - A `SessionStore` persisting the logged-in user and access token.
/// - An `UploadManager` tracking simulated upload progress.
/// - A shared `reqwest::Client` for the proxy and login forwarding calls.
#[derive(Clone)]
pub struct AppState {
    store: Arc<DataStore>,
    sessions: SessionStore,
    uploads: UploadManager,
    exports: ExportHistory,
    client: reqwest::Client,
}

impl AppState {
    /// Creates a new `AppState` around an existing data store.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
            uploads: UploadManager::new(),
            exports: ExportHistory::new(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates an `AppState` with a freshly seeded data store.
    ///
    /// This is the normal entry point for both the server binary and tests.
    pub fn init() -> Self {
        Self::new(Arc::new(DataStore::seeded()))
    }

    /// Returns a shared reference to the data store.
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Returns a shared reference to the session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Returns a shared reference to the upload tracker.
    pub fn uploads(&self) -> &UploadManager {
        &self.uploads
    }

    /// Returns a shared reference to the export history.
    pub fn exports(&self) -> &ExportHistory {
        &self.exports
    }

    /// Returns a shared reference to the outbound HTTP client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl AppState {
    /// Returns a cloned handle to the data store.
    ///
    /// Useful for spawning tasks that require ownership.
    pub fn store_clone(&self) -> Arc<DataStore> {
        self.store.clone()
    }

    /// Returns a cloned `UploadManager` handle.
    pub fn uploads_clone(&self) -> UploadManager {
        self.uploads.clone()
    }
}
