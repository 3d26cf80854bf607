/// Broad failure classes, used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unauthenticated,
    Forbidden,
    NotFound,
    Domain,
    Store,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("Invalid parameter {param}: {message}")]
    InvalidParam {
        param: &'static str,
        message: String,
    },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Authentication is required to perform this action")]
    Unauthorized,

    #[error("Sorry, you are not allowed to perform this action")]
    Forbidden,

    #[error("Review not found with ID: {0}")]
    ReviewNotFound(u64),

    #[error("This comment is not a product review")]
    NotProductReview,

    #[error("Reply not found with ID: {0}")]
    ReplyNotFound(u64),

    #[error("This is not a reply, it is a top-level review")]
    NotAReply,

    #[error("Failed to create reply")]
    ReplyFailed(#[source] anyhow::Error),

    #[error("Failed to delete reply")]
    DeleteFailed(#[source] anyhow::Error),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_param(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParam {
            param,
            message: message.into(),
        }
    }

    /// Stable machine-readable code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validate(_) | Error::InvalidParam { .. } => "invalid_param",
            Error::InvalidBody(_) => "invalid_body",
            Error::Unauthorized => "unauthorized",
            Error::Forbidden => "forbidden",
            Error::ReviewNotFound(_) | Error::NotProductReview => "invalid_review",
            Error::ReplyNotFound(_) | Error::NotAReply => "invalid_reply",
            Error::ReplyFailed(_) => "reply_failed",
            Error::DeleteFailed(_) => "delete_failed",
            Error::Unknown(_) => "internal_error",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validate(_) | Error::InvalidParam { .. } | Error::InvalidBody(_) => {
                ErrorKind::Validation
            }
            Error::Unauthorized => ErrorKind::Unauthenticated,
            Error::Forbidden => ErrorKind::Forbidden,
            Error::ReviewNotFound(_) | Error::ReplyNotFound(_) => ErrorKind::NotFound,
            Error::NotProductReview | Error::NotAReply => ErrorKind::Domain,
            Error::ReplyFailed(_) | Error::DeleteFailed(_) | Error::Unknown(_) => ErrorKind::Store,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}
