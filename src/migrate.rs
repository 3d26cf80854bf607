//! Database migration utilities

use sqlx::{Sqlite, SqlitePool, migrate::MigrateDatabase};
use sqlx_migrator::{Migrate, Plan};

use crate::config::Config;

/// Apply every pending migration on `pool`
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    replykit_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}

/// Create the database if needed and run all migrations
#[tracing::instrument(skip_all, fields(url = %config.database.url))]
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    if !Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating it");
        Sqlite::create_database(&config.database.url).await?;
    }

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    run_migrations(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists, then migrate from scratch
#[tracing::instrument(skip_all, fields(url = %config.database.url))]
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    if Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database");
        Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await
}
