use replykit_shared::{Error, Identity, Result};
use validator::Validate;

use crate::{
    ApprovalStatus, Comment, CreateReplyInput, MAX_AUTHOR_LEN, NewReply, Reply, access,
};

impl super::ReplyService {
    /// Creates an approved reply under `review_id` on behalf of `identity`.
    #[tracing::instrument(skip(self, identity, input), fields(user_id = identity.user_id))]
    pub async fn create(
        &self,
        identity: &Identity,
        review_id: u64,
        input: CreateReplyInput,
    ) -> Result<Reply> {
        input.validate()?;
        access::authorize(identity)?;

        let review = match self.store.find_comment(review_id).await? {
            Some(Comment::Review(review)) => review,
            Some(Comment::Reply(_)) => return Err(Error::NotProductReview),
            None => return Err(Error::ReviewNotFound(review_id)),
        };

        let Some(item) = self
            .store
            .find_content_item(review.product_id)
            .await?
            .filter(|item| item.is_product())
        else {
            return Err(Error::NotProductReview);
        };

        let author = match input.author_name {
            Some(name) => name,
            None => identity.display_name.chars().take(MAX_AUTHOR_LEN).collect(),
        };

        let (date, date_gmt) = self.now();
        let reply = NewReply {
            parent_id: review.id,
            product_id: review.product_id,
            author,
            author_email: input
                .author_email
                .unwrap_or_else(|| identity.email.to_owned()),
            content: input.content,
            date,
            date_gmt,
            approval_status: ApprovalStatus::Approved,
            owner_id: identity.user_id,
        };

        let id = self
            .store
            .insert_reply(&reply)
            .await
            .map_err(Error::ReplyFailed)?;

        tracing::info!(reply_id = id, review_id, "reply created");

        Ok(Reply {
            id,
            parent_id: reply.parent_id,
            product_id: reply.product_id,
            author: reply.author,
            author_email: reply.author_email,
            content: reply.content,
            date: reply.date,
            date_gmt: reply.date_gmt,
            approval_status: reply.approval_status,
            permalink: item.permalink,
            owner_id: reply.owner_id,
        })
    }
}
