use replykit::auth::{capability_names, generate_token};
use replykit_shared::Identity;

/// Mint a bearer token and print it to stdout.
pub fn issue(
    config: replykit::Config,
    user_id: u64,
    name: String,
    email: String,
    capabilities: Vec<String>,
    lifetime_seconds: Option<u64>,
) -> anyhow::Result<()> {
    let granted = Identity::parse_capabilities(&capabilities);
    if granted.len() != capabilities.len() {
        anyhow::bail!(
            "unknown capability in {:?}, expected any of {:?}",
            capabilities,
            capability_names()
        );
    }

    let identity = Identity {
        user_id,
        display_name: name,
        email,
        capabilities: granted,
    };

    let lifetime = lifetime_seconds.unwrap_or(config.auth.token_lifetime_seconds);
    let token = generate_token(&identity, &config.auth.jwt_secret, lifetime)?;

    tracing::info!(user_id, lifetime, "token issued");
    println!("{token}");

    Ok(())
}
