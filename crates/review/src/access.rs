//! Authorization gate for mutating reply operations.

use replykit_shared::{Capability, Error, Identity, Result};

/// Moderators and store managers may write replies.
pub fn check_permission(identity: &Identity) -> bool {
    identity.has(Capability::ModerateComments) || identity.has(Capability::ManageStore)
}

/// Anonymous callers get `Unauthorized`, authenticated ones without a capability `Forbidden`.
pub fn authorize(identity: &Identity) -> Result<()> {
    if check_permission(identity) {
        return Ok(());
    }

    if identity.is_anonymous() {
        tracing::warn!("anonymous caller attempted a protected reply operation");
        return Err(Error::Unauthorized);
    }

    tracing::warn!(
        user_id = identity.user_id,
        "caller lacks moderation and store management capabilities"
    );

    Err(Error::Forbidden)
}
