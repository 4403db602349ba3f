//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use super::DbArgs;

/// Arguments for the check-db command
#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Connect, run a trivial query, and report the clans row count.
pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    let one: i32 = sqlx::query_scalar("SELECT 1")
        .fetch_one(&pool)
        .await
        .context("Database did not answer SELECT 1")?;
    anyhow::ensure!(one == 1, "unexpected SELECT 1 result: {one}");

    let clans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clans")
        .fetch_one(&pool)
        .await
        .context("clans table is not readable (has schema/clans.sql been applied?)")?;

    println!("Database OK: {} clan(s) stored", clans);
    pool.close().await;
    Ok(())
}
