use replykit_shared::{Error, Result};

use crate::{Comment, Reply};

impl super::ReplyService {
    /// Approved replies of a review, oldest first. Public.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, review_id: u64) -> Result<Vec<Reply>> {
        match self.store.find_comment(review_id).await? {
            Some(Comment::Review(_)) => {}
            Some(Comment::Reply(_)) => return Err(Error::NotProductReview),
            None => return Err(Error::ReviewNotFound(review_id)),
        }

        Ok(self.store.approved_replies(review_id).await?)
    }
}
