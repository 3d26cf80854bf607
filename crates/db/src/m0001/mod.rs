mod comment;
mod content_item;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "replykit",
    "m0001",
    vec_box![],
    vec_box![
        content_item::CreateTable,
        content_item::CreateIdx1,
        comment::CreateTable,
        comment::CreateIdx1,
        comment::CreateIdx2
    ]
);
