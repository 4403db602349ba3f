//! In-memory clan store for testing
//!
//! Mirrors the PostgreSQL store's observable behaviour, and can be switched
//! into a failing mode to exercise the storage-error paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{Clan, ClanStore, DbError};
use crate::models::{ClanQuery, NewClan, SortColumn};

/// Mock clan store holding rows in a Vec
#[derive(Default)]
pub struct MemoryClanStore {
    rows: Mutex<Vec<Clan>>,
    failing: AtomicBool,
}

impl MemoryClanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored clans
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), DbError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ClanStore for MemoryClanStore {
    async fn create(&self, clan: &NewClan) -> Result<(), DbError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.id == clan.id) {
            return Err(DbError::Sqlx(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint: id {}",
                clan.id
            ))));
        }
        rows.push(Clan {
            id: clan.id,
            name: clan.name.as_str().to_owned(),
            region: clan.region.clone(),
            created_at: Utc::now().naive_utc(),
        });
        Ok(())
    }

    async fn list(&self, query: &ClanQuery) -> Result<Vec<Clan>, DbError> {
        self.check()?;
        let mut clans: Vec<Clan> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| match &query.region {
                Some(region) => row.region.as_ref() == Some(region),
                None => true,
            })
            .cloned()
            .collect();

        match query.sort {
            SortColumn::Name => clans.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id))),
            SortColumn::CreatedAt => {
                clans.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
            }
        }
        Ok(clans)
    }

    async fn get(&self, id: Uuid) -> Result<Clan, DbError> {
        self.check()?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| DbError::clan_not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DbError::clan_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.check()
    }
}
