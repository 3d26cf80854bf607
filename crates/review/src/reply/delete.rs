use anyhow::anyhow;
use replykit_shared::{Error, Identity, Result};

use crate::{Comment, access};

impl super::ReplyService {
    /// Permanently deletes a reply and returns its ID.
    #[tracing::instrument(skip(self, identity), fields(user_id = identity.user_id))]
    pub async fn delete(&self, identity: &Identity, reply_id: u64) -> Result<u64> {
        access::authorize(identity)?;

        match self.store.find_comment(reply_id).await? {
            None => return Err(Error::ReplyNotFound(reply_id)),
            Some(Comment::Review(_)) => return Err(Error::NotAReply),
            Some(Comment::Reply(_)) => {}
        }

        let deleted = self
            .store
            .delete_reply(reply_id)
            .await
            .map_err(Error::DeleteFailed)?;

        if !deleted {
            return Err(Error::DeleteFailed(anyhow!(
                "reply {reply_id} was already gone"
            )));
        }

        tracing::info!(reply_id, "reply deleted");

        Ok(reply_id)
    }
}
