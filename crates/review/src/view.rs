use serde::Serialize;

use crate::{ApprovalStatus, DATE_FORMAT, Reply};

/// Public representation of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyView {
    pub id: u64,
    pub parent_id: u64,
    pub product_id: u64,
    pub author: String,
    pub author_email: String,
    pub content: String,
    pub date: String,
    pub date_gmt: String,
    pub status: ApprovalStatus,
    pub link: String,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            parent_id: reply.parent_id,
            product_id: reply.product_id,
            author: reply.author.to_owned(),
            author_email: reply.author_email.to_owned(),
            content: reply.content.to_owned(),
            date: reply.date.format(DATE_FORMAT).to_string(),
            date_gmt: reply.date_gmt.format(DATE_FORMAT).to_string(),
            status: reply.approval_status,
            link: format!("{}#comment-{}", reply.permalink, reply.id),
        }
    }
}
