mod create;
mod delete;
mod list;

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDateTime, Offset, Timelike, Utc};
use serde::Serialize;

use crate::store::CommentStore;

/// Site-level settings the service needs when stamping replies.
#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig {
    pub utc_offset: FixedOffset,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub message: &'static str,
    pub version: &'static str,
}

/// Entry point for reply operations. Cheap to clone, shared across handlers.
#[derive(Clone)]
pub struct ReplyService {
    store: Arc<dyn CommentStore>,
    config: ServiceConfig,
}

impl ReplyService {
    pub fn new(store: Arc<dyn CommentStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn health(&self) -> Health {
        Health {
            message: "Review Reply API is working!",
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Current time as (site-local, UTC), both truncated to whole seconds.
    fn now(&self) -> (NaiveDateTime, NaiveDateTime) {
        let now = Utc::now();
        let gmt = now.naive_utc();
        let local = now.with_timezone(&self.config.utc_offset).naive_local();

        (truncate(local), truncate(gmt))
    }
}

fn truncate(value: NaiveDateTime) -> NaiveDateTime {
    value.with_nanosecond(0).unwrap_or(value)
}
