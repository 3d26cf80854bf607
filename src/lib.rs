pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod migrate;
pub mod observability;
pub mod routes;

use std::sync::Arc;

use chrono::FixedOffset;
use replykit_review::{ReplyService, ServiceConfig, store::SqliteCommentStore};
use sqlx::SqlitePool;

pub use config::Config;
pub use routes::{AppState, router};

/// Build the application state from configuration and open pools.
pub fn app_state(
    config: &Config,
    read_pool: SqlitePool,
    write_pool: SqlitePool,
) -> anyhow::Result<AppState> {
    let utc_offset = FixedOffset::east_opt(config.site.utc_offset_minutes * 60)
        .ok_or_else(|| anyhow::anyhow!("invalid site UTC offset"))?;

    let store = SqliteCommentStore::new(read_pool.clone(), write_pool);
    let service = ReplyService::new(Arc::new(store), ServiceConfig { utc_offset });

    Ok(AppState {
        service,
        pool: read_pool,
        jwt_secret: config.auth.jwt_secret.to_owned(),
        namespace: config.namespace_path(),
    })
}
