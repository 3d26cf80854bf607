use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use replykit_review::{CreateReplyInput, ReplyForm, ReplyView, parse_id};
use replykit_shared::{Error, Identity};
use serde_json::json;

use super::AppState;
use crate::error::ApiError;

/// POST {namespace}/reviews/{id}/reply
#[tracing::instrument(skip_all, fields(review_id = %id))]
pub async fn create_reply(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    payload: Result<Json<ReplyForm>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let review_id = parse_id("id", &id)?;
    let Json(form) = payload.map_err(|rejection| Error::InvalidBody(rejection.body_text()))?;

    let reply = state
        .service
        .create(&identity, review_id, CreateReplyInput::from(form))
        .await?;

    Ok(Json(json!({
        "success": true,
        "reply_id": reply.id,
        "reply": ReplyView::from(&reply),
    })))
}

/// GET {namespace}/reviews/{id}/replies
#[tracing::instrument(skip_all, fields(review_id = %id))]
pub async fn list_replies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let review_id = parse_id("id", &id)?;
    let replies = state.service.list(review_id).await?;

    Ok(Json(json!({
        "success": true,
        "review_id": review_id,
        "count": replies.len(),
        "replies": replies.iter().map(ReplyView::from).collect::<Vec<_>>(),
    })))
}
