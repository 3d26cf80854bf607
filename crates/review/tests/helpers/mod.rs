use std::{path::PathBuf, str::FromStr, sync::Arc};

use replykit_db::table::{Comment, ContentItem};
use replykit_review::{ApprovalStatus, ReplyService, ServiceConfig, store::SqliteCommentStore};
use replykit_shared::{Capability, Identity};
use sea_query::{Expr, ExprTrait, Func, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub struct TestState {
    pub pool: SqlitePool,
    pub service: ReplyService,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    replykit_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    let store = SqliteCommentStore::new(pool.clone(), pool.clone());
    let service = ReplyService::new(Arc::new(store), ServiceConfig::default());

    Ok(TestState { pool, service })
}

#[allow(dead_code)]
pub fn moderator() -> Identity {
    Identity {
        user_id: 7,
        display_name: "Store Team".to_owned(),
        email: "team@shop.localhost".to_owned(),
        capabilities: vec![Capability::ModerateComments],
    }
}

#[allow(dead_code)]
pub fn customer() -> Identity {
    Identity {
        user_id: 12,
        display_name: "john.doe".to_owned(),
        email: "john.doe@shop.localhost".to_owned(),
        capabilities: vec![],
    }
}

#[allow(dead_code)]
pub async fn create_item(pool: &SqlitePool, item_type: &str) -> anyhow::Result<u64> {
    let statement = Query::insert()
        .into_table(ContentItem::Table)
        .columns([
            ContentItem::ItemType,
            ContentItem::Title,
            ContentItem::Permalink,
        ])
        .values([
            item_type.into(),
            format!("A {item_type}").into(),
            format!("https://shop.localhost/{item_type}/mug/").into(),
        ])?
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid() as u64)
}

#[allow(dead_code)]
pub async fn create_product_review(pool: &SqlitePool) -> anyhow::Result<(u64, u64)> {
    let product_id = create_item(pool, "product").await?;
    let review_id = create_comment(
        pool,
        product_id,
        0,
        ApprovalStatus::Approved,
        "2024-03-01 10:00:00",
    )
    .await?;

    Ok((product_id, review_id))
}

#[allow(dead_code)]
pub async fn create_comment(
    pool: &SqlitePool,
    item_id: u64,
    parent_id: u64,
    approval: ApprovalStatus,
    date_gmt: &str,
) -> anyhow::Result<u64> {
    let statement = Query::insert()
        .into_table(Comment::Table)
        .columns([
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
            (item_id as i64).into(),
            (parent_id as i64).into(),
            "jane.doe".into(),
            "jane.doe@shop.localhost".into(),
            "Lovely mug".into(),
            date_gmt.into(),
            date_gmt.into(),
            approval.to_string().into(),
        ])?
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid() as u64)
}

#[allow(dead_code)]
pub async fn count_comments(pool: &SqlitePool) -> anyhow::Result<i64> {
    let statement = Query::select()
        .expr(Func::count(Expr::col(Comment::Id)))
        .from(Comment::Table)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let (count,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[allow(dead_code)]
pub async fn parent_of(pool: &SqlitePool, id: u64) -> anyhow::Result<Option<i64>> {
    let statement = Query::select()
        .column(Comment::ParentId)
        .from(Comment::Table)
        .and_where(Expr::col(Comment::Id).eq(id as i64))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(parent_id,)| parent_id))
}
