//! Bearer token generation and validation

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use replykit_shared::{Capability, Identity};
use serde::{Deserialize, Serialize};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Numeric user ID
    pub sub: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Capability names; unknown ones are ignored on decode
    #[serde(default)]
    pub caps: Vec<String>,
    /// Expiration timestamp
    pub exp: u64,
}

/// Generate a bearer token carrying the given identity
pub fn generate_token(
    identity: &Identity,
    secret: &str,
    lifetime_seconds: u64,
) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    let claims = Claims {
        sub: identity.user_id.to_string(),
        name: identity.display_name.to_owned(),
        email: identity.email.to_owned(),
        caps: identity
            .capabilities
            .iter()
            .map(|cap| cap.to_string())
            .collect(),
        exp: now + lifetime_seconds,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Validate and decode a bearer token into the caller's identity
pub fn validate_token(token: &str, secret: &str) -> anyhow::Result<Identity> {
    let validation = Validation::default();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    let claims = token_data.claims;
    let user_id = claims
        .sub
        .parse::<u64>()
        .with_context(|| format!("token subject '{}' is not a user ID", claims.sub))?;

    Ok(Identity {
        user_id,
        display_name: claims.name,
        email: claims.email,
        capabilities: Identity::parse_capabilities(claims.caps),
    })
}

/// Capability names accepted by the `token` command.
pub fn capability_names() -> Vec<String> {
    use strum::VariantArray;

    Capability::VARIANTS.iter().map(|cap| cap.to_string()).collect()
}
