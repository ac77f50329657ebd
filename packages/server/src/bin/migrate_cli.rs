//! CLI for applying and inspecting schema migrations
//!
//! Outputs JSON so scripts can parse the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Parser)]
#[command(name = "migrate_cli")]
#[command(about = "Schema migration CLI for the job board database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all migrations and whether they are applied
    List,

    /// Apply pending migrations
    Run,
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrations: Option<Vec<MigrationInfo>>,
}

#[derive(Serialize)]
struct MigrationInfo {
    version: i64,
    description: String,
    applied: bool,
}

fn output(resp: Response) -> Result<()> {
    println!("{}", serde_json::to_string(&resp)?);
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let pool = get_pool().await?;

    match cli.command {
        Commands::List => cmd_list(&pool).await,
        Commands::Run => cmd_run(&pool).await,
    }
}

async fn get_pool() -> Result<PgPool> {
    let _ = dotenvy::dotenv();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

// ============================================================================
// Commands
// ============================================================================

async fn cmd_list(pool: &PgPool) -> Result<()> {
    let has_table: bool =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await
            .context("Failed to inspect migration table")?;

    let applied: Vec<i64> = if has_table {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await
            .context("Failed to read applied migrations")?
    } else {
        Vec::new()
    };

    let migrations = MIGRATOR
        .iter()
        .map(|migration| MigrationInfo {
            version: migration.version,
            description: migration.description.to_string(),
            applied: applied.contains(&migration.version),
        })
        .collect();

    output(Response {
        success: true,
        message: None,
        migrations: Some(migrations),
    })
}

async fn cmd_run(pool: &PgPool) -> Result<()> {
    match MIGRATOR.run(pool).await {
        Ok(()) => output(Response {
            success: true,
            message: Some("Migrations applied".to_string()),
            migrations: None,
        }),
        Err(e) => output(Response {
            success: false,
            message: Some(e.to_string()),
            migrations: None,
        }),
    }
}
