//! clans CLI - entry point for the Clans API
//!
//! - `serve`: run the HTTP server against PostgreSQL
//! - `check-db`: verify database connectivity and the clans table
//!
//! Settings come from flags, the process environment, or a `.env` file in
//! the working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "clans",
    author,
    version,
    about = "JSON API for clan records backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Check database connectivity and report the stored clan count
    CheckDb(commands::check_db::CheckDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so clap's env fallbacks can see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::CheckDb(args) => commands::check_db::run_check_db(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["clans", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(!args.cors_permissive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_flags() {
        let cli = Cli::try_parse_from([
            "clans",
            "--debug",
            "serve",
            "--bind",
            "127.0.0.1:9000",
            "--max-connections",
            "3",
            "--database-url",
            "postgres://localhost/clans",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.port(), 9000);
                assert_eq!(args.db.max_connections, Some(3));
                assert_eq!(
                    args.db.database_url.as_deref(),
                    Some("postgres://localhost/clans")
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(Cli::try_parse_from(["clans", "serve", "--bind", "nowhere"]).is_err());
    }
}
