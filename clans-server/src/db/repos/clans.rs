//! Clan repository backed by PostgreSQL
//!
//! - create / delete: single statement inside a transaction, explicit rollback on failure
//! - list: one SELECT, region bound as a parameter, sort column from `SortColumn` only
//! - get: one SELECT by primary key

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{Connection, FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use super::{ClanStore, DbError};
use crate::models::{ClanQuery, NewClan};

/// Clan record from database
///
/// `created_at` is a timezone-less UTC timestamp as stored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Clan {
    pub id: Uuid,
    pub name: String,
    pub region: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Clan store over an injected connection pool
#[derive(Clone)]
pub struct PgClanStore {
    pool: PgPool,
}

impl PgClanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Abort a unit of work, logging (not surfacing) a failed rollback.
async fn rollback(tx: Transaction<'_, Postgres>) {
    if let Err(e) = tx.rollback().await {
        tracing::warn!(error = %e, "Rollback failed");
    }
}

#[async_trait]
impl ClanStore for PgClanStore {
    async fn create(&self, clan: &NewClan) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO clans (id, name, region, created_at)
            VALUES ($1, $2, $3, NOW() AT TIME ZONE 'UTC')
            "#,
        )
        .bind(clan.id)
        .bind(clan.name.as_str())
        .bind(clan.region.as_deref())
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(_) => {
                tx.commit().await?;
                Ok(())
            }
            Err(e) => {
                rollback(tx).await;
                Err(e.into())
            }
        }
    }

    async fn list(&self, query: &ClanQuery) -> Result<Vec<Clan>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT id, name, region, created_at FROM clans");
        if let Some(region) = &query.region {
            builder.push(" WHERE region = ");
            builder.push_bind(region);
        }
        builder.push(" ORDER BY ");
        builder.push(query.sort.as_sql());
        builder.push(" ASC, id ASC");

        tracing::debug!(sql = builder.sql(), "Listing clans");

        let clans = builder
            .build_query_as::<Clan>()
            .fetch_all(&mut *conn)
            .await?;

        Ok(clans)
    }

    async fn get(&self, id: Uuid) -> Result<Clan, DbError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, Clan>(
            "SELECT id, name, region, created_at FROM clans WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DbError::clan_not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let deleted = sqlx::query("DELETE FROM clans WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match deleted {
            Ok(done) if done.rows_affected() == 0 => {
                rollback(tx).await;
                Err(DbError::clan_not_found(id))
            }
            Ok(_) => {
                tx.commit().await?;
                Ok(())
            }
            Err(e) => {
                rollback(tx).await;
                Err(e.into())
            }
        }
    }

    async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }
}
