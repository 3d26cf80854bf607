use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use replykit_review::ReplyService;
use sqlx::SqlitePool;

use crate::auth::{AuthState, identity_middleware};

mod health;
mod replies;
mod reviews;

#[derive(Clone)]
pub struct AppState {
    pub service: ReplyService,
    pub pool: SqlitePool,
    pub jwt_secret: String,
    /// Router prefix, e.g. `/review-api/v1`
    pub namespace: String,
}

pub fn router(app_state: AppState) -> Router {
    let auth_state = AuthState {
        jwt_secret: app_state.jwt_secret.to_owned(),
    };

    let api = Router::new()
        .route("/test", get(health::test))
        .route("/reviews/{id}/reply", post(reviews::create_reply))
        .route("/reviews/{id}/replies", get(reviews::list_replies))
        .route("/replies/{id}", delete(replies::delete_reply))
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            identity_middleware,
        ))
        .with_state(app_state.clone());

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .nest(&app_state.namespace, api)
}
