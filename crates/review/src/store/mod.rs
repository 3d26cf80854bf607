//! Comment store the reply service talks to.

mod sqlite;

use async_trait::async_trait;

pub use sqlite::SqliteCommentStore;

use crate::{Comment, ContentItem, NewReply, Reply};

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn find_comment(&self, id: u64) -> anyhow::Result<Option<Comment>>;

    async fn find_content_item(&self, id: u64) -> anyhow::Result<Option<ContentItem>>;

    /// Persists a reply and returns its new ID.
    async fn insert_reply(&self, reply: &NewReply) -> anyhow::Result<u64>;

    /// Approved direct children of `parent_id`, oldest first.
    async fn approved_replies(&self, parent_id: u64) -> anyhow::Result<Vec<Reply>>;

    /// Permanently removes a reply. Returns `false` when nothing was deleted.
    async fn delete_reply(&self, id: u64) -> anyhow::Result<bool>;
}
