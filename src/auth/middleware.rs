//! Identity middleware for Axum

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use replykit_shared::{Error, Identity};
use tracing::{debug, warn};

use super::jwt::validate_token;
use crate::error::ApiError;

/// State for the identity middleware
#[derive(Clone)]
pub struct AuthState {
    pub jwt_secret: String,
}

/// Resolves the caller's [`Identity`] and stores it in request extensions.
///
/// No `Authorization` header means an anonymous caller. A header that is not a valid
/// bearer token is rejected with 401 before any handler runs.
pub async fn identity_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let headers = request.headers();

    let identity = if !headers.contains_key(AUTHORIZATION) {
        Identity::anonymous()
    } else {
        let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() else {
            warn!("Authorization header is not a bearer token");
            return Err(ApiError(Error::Unauthorized).into_response());
        };

        match validate_token(bearer.token(), &auth_state.jwt_secret) {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "Invalid or expired token");
                return Err(ApiError(Error::Unauthorized).into_response());
            }
        }
    };

    debug!(
        user_id = identity.user_id,
        capabilities = ?identity.capabilities,
        "caller identified"
    );

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
