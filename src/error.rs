use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use replykit_shared::{Error, ErrorKind};
use serde_json::json;

/// HTTP face of [`replykit_shared::Error`].
#[derive(Debug)]
pub struct ApiError(pub Error);

impl<E: Into<Error>> From<E> for ApiError {
    fn from(value: E) -> Self {
        Self(value.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Validation | ErrorKind::Domain => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field -> message, only for validation failures.
    fn details(&self) -> Option<BTreeMap<String, String>> {
        match &self.0 {
            Error::Validate(errors) => Some(
                errors
                    .field_errors()
                    .into_iter()
                    .filter_map(|(field, errors)| {
                        let message = errors.first()?.message.as_ref()?;
                        Some((field.to_string(), message.to_string()))
                    })
                    .collect(),
            ),
            Error::InvalidParam { param, message } => {
                Some(BTreeMap::from([(param.to_string(), message.to_owned())]))
            }
            _ => None,
        }
    }

    fn message(&self) -> String {
        match self.details() {
            Some(details) if matches!(self.0, Error::Validate(_)) => details
                .into_values()
                .next()
                .unwrap_or_else(|| self.0.to_string()),
            _ => self.0.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = self.0.code(), error = ?self.0, "request failed");
        } else {
            tracing::debug!(code = self.0.code(), error = %self.0, "request rejected");
        }

        let mut body = json!({
            "success": false,
            "code": self.0.code(),
            "message": self.message(),
            "status": status.as_u16(),
        });

        if let Some(details) = self.details() {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}
