//! Subcommand implementations

pub mod check_db;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;

use clans_server::db::create_pool_with_options;
use clans_server::DatabaseConfig;

/// Database connection arguments shared by subcommands
#[derive(Args, Debug)]
pub struct DbArgs {
    /// Database URL (overrides the DB_* variables)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_POOL_SIZE")]
    pub max_connections: Option<u32>,
}

impl DbArgs {
    /// Merge flags over the environment-derived configuration
    pub fn resolve(&self) -> Result<DatabaseConfig> {
        let mut config = DatabaseConfig::from_env().context("Invalid database configuration")?;
        if let Some(url) = &self.database_url {
            config.url = Some(url.clone());
        }
        if let Some(max) = self.max_connections {
            config.pool.max_connections = max;
        }
        Ok(config)
    }

    /// Build the connection pool described by these arguments
    pub async fn connect(&self) -> Result<PgPool> {
        let config = self.resolve()?;
        let options = config
            .connect_options()
            .context("Invalid database configuration")?;

        tracing::info!(
            db = %config.describe(),
            max_connections = config.pool.max_connections,
            "Connecting to database"
        );

        create_pool_with_options(options, config.pool)
            .await
            .context("Failed to create database pool")
    }
}
