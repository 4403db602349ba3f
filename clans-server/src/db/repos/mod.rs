//! Clan storage
//!
//! Handlers only see the `ClanStore` trait. Each call maps to exactly one
//! SQL statement on one pooled connection.

pub mod clans;
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{ClanQuery, NewClan};

pub use clans::{Clan, PgClanStore};
pub use memory::MemoryClanStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn clan_not_found(id: Uuid) -> Self {
        Self::NotFound {
            resource: "Clan",
            id: id.to_string(),
        }
    }
}

/// Storage operations behind the clan endpoints (testable)
#[async_trait]
pub trait ClanStore: Send + Sync {
    /// Insert a clan; `created_at` is assigned by storage.
    async fn create(&self, clan: &NewClan) -> Result<(), DbError>;

    /// List clans matching the filter, ordered ascending by the sort column.
    async fn list(&self, query: &ClanQuery) -> Result<Vec<Clan>, DbError>;

    /// Fetch one clan, or `DbError::NotFound`.
    async fn get(&self, id: Uuid) -> Result<Clan, DbError>;

    /// Remove one clan, or `DbError::NotFound` if nothing matched.
    async fn delete(&self, id: Uuid) -> Result<(), DbError>;

    /// Check that storage is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
