use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Comment, ContentItem};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Comment::Table)
        .col(
            ColumnDef::new(Comment::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Comment::ContentItemId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(Comment::ParentId)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Comment::Author)
                .string()
                .not_null()
                .string_len(245),
        )
        .col(
            ColumnDef::new(Comment::AuthorEmail)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(ColumnDef::new(Comment::Content).text().not_null())
        .col(
            ColumnDef::new(Comment::Date)
                .string()
                .not_null()
                .string_len(19),
        )
        .col(
            ColumnDef::new(Comment::DateGmt)
                .string()
                .not_null()
                .string_len(19),
        )
        .col(
            ColumnDef::new(Comment::Approval)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(
            ColumnDef::new(Comment::OwnerId)
                .integer()
                .not_null()
                .default(0),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_comment_content_item_Rz3pLw")
                .from(Comment::Table, Comment::ContentItemId)
                .to(ContentItem::Table, ContentItem::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Comment::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_comment_b7TnVe")
        .table(Comment::Table)
        .col(Comment::ParentId)
        .col(Comment::Approval)
        .col(Comment::DateGmt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_comment_b7TnVe")
        .table(Comment::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx2;

fn create_idx_2() -> IndexCreateStatement {
    Index::create()
        .name("idx_comment_Q2mfHa")
        .table(Comment::Table)
        .col(Comment::ContentItemId)
        .to_owned()
}

fn drop_idx_2() -> IndexDropStatement {
    Index::drop()
        .name("idx_comment_Q2mfHa")
        .table(Comment::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx2 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_2().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_2().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
