//! Test helpers: a migrated SQLite database behind the full router.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use replykit::config::{
    ApiConfig, AuthConfig, Config, DatabaseConfig, ObservabilityConfig, ServerConfig, SiteConfig,
};
use replykit_db::table::{Comment, ContentItem};
use replykit_shared::{Capability, Identity};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde_json::Value;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
        auth: AuthConfig {
            jwt_secret: SECRET.to_string(),
            token_lifetime_seconds: 300,
        },
        api: ApiConfig::default(),
        site: SiteConfig {
            utc_offset_minutes: 120,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let config = test_config(url);

    let pool = replykit::db::create_pool(&config.database.url, 2).await?;
    replykit::migrate::run_migrations(&pool).await?;

    let state = replykit::app_state(&config, pool.clone(), pool.clone())?;

    Ok(TestApp {
        router: replykit::router(state),
        pool,
        _dir: dir,
    })
}

pub fn moderator() -> Identity {
    Identity {
        user_id: 7,
        display_name: "Store Team".to_owned(),
        email: "team@shop.localhost".to_owned(),
        capabilities: vec![Capability::ModerateComments],
    }
}

pub fn customer() -> Identity {
    Identity {
        user_id: 12,
        display_name: "john.doe".to_owned(),
        email: "john.doe@shop.localhost".to_owned(),
        capabilities: vec![],
    }
}

pub fn bearer(identity: &Identity) -> String {
    let token = replykit::auth::generate_token(identity, SECRET, 300).unwrap();
    format!("Bearer {token}")
}

impl TestApp {
    /// Sends a request and decodes the JSON response body.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        identity: Option<&Identity>,
        body: Option<&str>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(identity) = identity {
            request = request.header(header::AUTHORIZATION, bearer(identity));
        }
        if body.is_some() {
            request = request.header(header::CONTENT_TYPE, "application/json");
        }

        let request = request.body(Body::from(body.unwrap_or_default().to_owned()))?;
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&bytes)?;

        Ok((status, json))
    }

    pub async fn create_item(&self, id: u64, item_type: &str) -> anyhow::Result<()> {
        let statement = Query::insert()
            .into_table(ContentItem::Table)
            .columns([
                ContentItem::Id,
                ContentItem::ItemType,
                ContentItem::Title,
                ContentItem::Permalink,
            ])
            .values([
                (id as i64).into(),
                item_type.into(),
                "Enamel mug".into(),
                format!("https://shop.localhost/{item_type}/enamel-mug/").into(),
            ])?
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    pub async fn create_comment(
        &self,
        id: u64,
        item_id: u64,
        parent_id: u64,
        approval: &str,
        date_gmt: &str,
    ) -> anyhow::Result<()> {
        let statement = Query::insert()
            .into_table(Comment::Table)
            .columns([
                Comment::Id,
                Comment::ContentItemId,
                Comment::ParentId,
                Comment::Author,
                Comment::AuthorEmail,
                Comment::Content,
                Comment::Date,
                Comment::DateGmt,
                Comment::Approval,
            ])
            .values([
                (id as i64).into(),
                (item_id as i64).into(),
                (parent_id as i64).into(),
                "jane.doe".into(),
                "jane.doe@shop.localhost".into(),
                "Keeps coffee hot".into(),
                date_gmt.into(),
                date_gmt.into(),
                approval.into(),
            ])?
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }
}
