use std::sync::LazyLock;

use regex::Regex;
use replykit_shared::{Error, Result};
use serde::Deserialize;
use validator::Validate;

static SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)\s*>").expect("valid regex")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[a-fA-F0-9]{2}").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("valid regex"));

/// Raw create-reply body as sent by the client.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReplyForm {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
}

/// Sanitized create-reply input. Build it from a [`ReplyForm`] and call `validate()`.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateReplyInput {
    #[validate(length(min = 1, message = "Reply content is required"))]
    pub content: String,
    // same bound as MAX_AUTHOR_LEN
    #[validate(length(max = 245, message = "Author name is too long"))]
    pub author_name: Option<String>,
    #[validate(email(message = "Author email is not a valid email address"))]
    pub author_email: Option<String>,
}

impl From<ReplyForm> for CreateReplyInput {
    fn from(form: ReplyForm) -> Self {
        let content = form
            .content
            .as_deref()
            .map(sanitize_textarea)
            .unwrap_or_default();

        let author_name = form
            .author_name
            .as_deref()
            .map(sanitize_text)
            .filter(|name| !name.is_empty());

        let author_email = form
            .author_email
            .map(|email| email.trim().to_owned())
            .filter(|email| !email.is_empty());

        Self {
            content,
            author_name,
            author_email,
        }
    }
}

/// Parses a numeric path parameter. Accepts only values the store can key on.
pub fn parse_id(param: &'static str, raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| i64::try_from(*id).is_ok())
        .ok_or_else(|| Error::invalid_param(param, format!("{param} must be a non-negative integer")))
}

fn strip_markup(raw: &str) -> String {
    let without_blocks = SCRIPT_STYLE.replace_all(raw, "");
    let mut text = TAG.replace_all(&without_blocks, "").into_owned();

    // removing one octet can expose another, e.g. "%2%200"
    while OCTET.is_match(&text) {
        text = OCTET.replace_all(&text, "").into_owned();
    }

    text
}

/// Multi-line plain text: markup and control characters removed, line breaks kept.
pub fn sanitize_textarea(raw: &str) -> String {
    let text = strip_markup(&raw.replace("\r\n", "\n"));

    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Single-line plain text: like [`sanitize_textarea`] with whitespace runs collapsed.
pub fn sanitize_text(raw: &str) -> String {
    let text = strip_markup(raw);
    let text = WHITESPACE.replace_all(&text, " ");

    text.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_owned()
}
