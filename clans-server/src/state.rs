//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{ClanStore, PgClanStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn ClanStore>,
}

impl AppState {
    /// State over the PostgreSQL store for the given pool
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgClanStore::new(pool)))
    }

    /// State over any store implementation (e.g. `MemoryClanStore` in tests)
    pub fn with_store(store: Arc<dyn ClanStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn ClanStore {
        self.inner.store.as_ref()
    }
}
