use chrono::NaiveDateTime;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Content item type a review must be attached to.
pub const PRODUCT_ITEM_TYPE: &str = "product";

/// Wire and storage format of reply timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the `comment.author` column.
pub const MAX_AUTHOR_LEN: usize = 245;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Approved,
    Pending,
    Spam,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: u64,
    pub item_type: String,
    pub permalink: String,
}

impl ContentItem {
    pub fn is_product(&self) -> bool {
        self.item_type == PRODUCT_ITEM_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: u64,
    pub product_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: u64,
    pub parent_id: u64,
    pub product_id: u64,
    pub author: String,
    pub author_email: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub date_gmt: NaiveDateTime,
    pub approval_status: ApprovalStatus,
    pub permalink: String,
    pub owner_id: u64,
}

/// A stored comment, split on its parent: `parent_id == 0` is always a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    Review(Review),
    Reply(Reply),
}

/// Reply record handed to the store; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub parent_id: u64,
    pub product_id: u64,
    pub author: String,
    pub author_email: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub date_gmt: NaiveDateTime,
    pub approval_status: ApprovalStatus,
    pub owner_id: u64,
}
