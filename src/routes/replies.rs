use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use replykit_review::parse_id;
use replykit_shared::Identity;
use serde_json::json;

use super::AppState;
use crate::error::ApiError;

/// DELETE {namespace}/replies/{id}
#[tracing::instrument(skip_all, fields(reply_id = %id))]
pub async fn delete_reply(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let reply_id = parse_id("id", &id)?;
    let reply_id = state.service.delete(&identity, reply_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Reply deleted successfully",
        "reply_id": reply_id,
    })))
}
