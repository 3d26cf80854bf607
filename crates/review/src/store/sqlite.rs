use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use replykit_db::table::{Comment as CommentTable, ContentItem as ContentItemTable};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Text};

use crate::{
    ApprovalStatus, Comment, ContentItem, DATE_FORMAT, NewReply, Reply, Review,
    store::CommentStore,
};

/// SQLite adapter. Reads go to `read_db`, inserts and deletes to `write_db`.
#[derive(Clone)]
pub struct SqliteCommentStore {
    read_db: SqlitePool,
    write_db: SqlitePool,
}

impl SqliteCommentStore {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    content_item_id: i64,
    parent_id: i64,
    author: String,
    author_email: String,
    content: String,
    date: String,
    date_gmt: String,
    approval: Text<ApprovalStatus>,
    owner_id: i64,
    permalink: Option<String>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = anyhow::Error;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        if row.parent_id == 0 {
            return Ok(Comment::Review(Review {
                id: from_key(row.id)?,
                product_id: from_key(row.content_item_id)?,
            }));
        }

        Ok(Comment::Reply(Reply {
            id: from_key(row.id)?,
            parent_id: from_key(row.parent_id)?,
            product_id: from_key(row.content_item_id)?,
            author: row.author,
            author_email: row.author_email,
            content: row.content,
            date: parse_date(&row.date)?,
            date_gmt: parse_date(&row.date_gmt)?,
            approval_status: row.approval.0,
            permalink: row.permalink.unwrap_or_default(),
            owner_id: from_key(row.owner_id)?,
        }))
    }
}

#[derive(Debug, FromRow)]
struct ContentItemRow {
    id: i64,
    item_type: String,
    permalink: String,
}

fn to_key(id: u64) -> anyhow::Result<i64> {
    i64::try_from(id).with_context(|| format!("id {id} is out of range"))
}

fn from_key(id: i64) -> anyhow::Result<u64> {
    u64::try_from(id).with_context(|| format!("stored id {id} is negative"))
}

fn parse_date(value: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("invalid stored date '{value}'"))
}

fn select_comments() -> SelectStatement {
    Query::select()
        .columns([
            (CommentTable::Table, CommentTable::Id),
            (CommentTable::Table, CommentTable::ContentItemId),
            (CommentTable::Table, CommentTable::ParentId),
            (CommentTable::Table, CommentTable::Author),
            (CommentTable::Table, CommentTable::AuthorEmail),
            (CommentTable::Table, CommentTable::Content),
            (CommentTable::Table, CommentTable::Date),
            (CommentTable::Table, CommentTable::DateGmt),
            (CommentTable::Table, CommentTable::Approval),
            (CommentTable::Table, CommentTable::OwnerId),
        ])
        .column((ContentItemTable::Table, ContentItemTable::Permalink))
        .from(CommentTable::Table)
        .left_join(
            ContentItemTable::Table,
            Expr::col((ContentItemTable::Table, ContentItemTable::Id))
                .equals((CommentTable::Table, CommentTable::ContentItemId)),
        )
        .to_owned()
}

#[async_trait]
impl CommentStore for SqliteCommentStore {
    async fn find_comment(&self, id: u64) -> anyhow::Result<Option<Comment>> {
        let statement = select_comments()
            .and_where(Expr::col((CommentTable::Table, CommentTable::Id)).eq(to_key(id)?))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, CommentRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_content_item(&self, id: u64) -> anyhow::Result<Option<ContentItem>> {
        let statement = Query::select()
            .columns([
                ContentItemTable::Id,
                ContentItemTable::ItemType,
                ContentItemTable::Permalink,
            ])
            .from(ContentItemTable::Table)
            .and_where(Expr::col(ContentItemTable::Id).eq(to_key(id)?))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, ContentItemRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        row.map(|row| {
            Ok(ContentItem {
                id: from_key(row.id)?,
                item_type: row.item_type,
                permalink: row.permalink,
            })
        })
        .transpose()
    }

    async fn insert_reply(&self, reply: &NewReply) -> anyhow::Result<u64> {
        let statement = Query::insert()
            .into_table(CommentTable::Table)
            .columns([
                CommentTable::ContentItemId,
                CommentTable::ParentId,
                CommentTable::Author,
                CommentTable::AuthorEmail,
                CommentTable::Content,
                CommentTable::Date,
                CommentTable::DateGmt,
                CommentTable::Approval,
                CommentTable::OwnerId,
            ])
            .values([
                to_key(reply.product_id)?.into(),
                to_key(reply.parent_id)?.into(),
                reply.author.to_owned().into(),
                reply.author_email.to_owned().into(),
                reply.content.to_owned().into(),
                reply.date.format(DATE_FORMAT).to_string().into(),
                reply.date_gmt.format(DATE_FORMAT).to_string().into(),
                reply.approval_status.to_string().into(),
                to_key(reply.owner_id)?.into(),
            ])?
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        from_key(result.last_insert_rowid())
    }

    async fn approved_replies(&self, parent_id: u64) -> anyhow::Result<Vec<Reply>> {
        let statement = select_comments()
            .and_where(
                Expr::col((CommentTable::Table, CommentTable::ParentId)).eq(to_key(parent_id)?),
            )
            .and_where(
                Expr::col((CommentTable::Table, CommentTable::Approval))
                    .eq(ApprovalStatus::Approved.to_string()),
            )
            .order_by((CommentTable::Table, CommentTable::DateGmt), Order::Asc)
            .order_by((CommentTable::Table, CommentTable::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, CommentRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut replies = Vec::with_capacity(rows.len());
        for row in rows {
            if let Comment::Reply(reply) = Comment::try_from(row)? {
                replies.push(reply);
            }
        }

        Ok(replies)
    }

    async fn delete_reply(&self, id: u64) -> anyhow::Result<bool> {
        let key = to_key(id)?;
        let mut tx = self.write_db.begin().await?;

        let statement = Query::select()
            .column(CommentTable::ParentId)
            .from(CommentTable::Table)
            .and_where(Expr::col(CommentTable::Id).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some((parent_id,)) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(false);
        };

        // nested replies move up to the deleted reply's parent
        let statement = Query::update()
            .table(CommentTable::Table)
            .value(CommentTable::ParentId, parent_id)
            .and_where(Expr::col(CommentTable::ParentId).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let statement = Query::delete()
            .from_table(CommentTable::Table)
            .and_where(Expr::col(CommentTable::Id).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
