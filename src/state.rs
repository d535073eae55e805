//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    db::{CheckinStore, PgCheckinStore},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Event and check-in rule storage
    store: Arc<dyn CheckinStore>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create application state backed by PostgreSQL
    pub fn new(db: PgPool, config: Config) -> Self {
        Self::with_store(Arc::new(PgCheckinStore::new(db)), config)
    }

    /// Create application state over any store implementation
    pub fn with_store(store: Arc<dyn CheckinStore>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, config }),
        }
    }

    /// Get a reference to the check-in store
    pub fn store(&self) -> &dyn CheckinStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
