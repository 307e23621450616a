use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::labels;

/// A platform account (issue author or declared co-chair with an account).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Account {
    /// Platform database id, the key the identity registry indexes by.
    pub id: u64,
    pub login: String,
    pub avatar_url: Option<String>,
}

/// A breakout-session proposal: one issue on the hosting repository, plus
/// its placement on the scheduling board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    /// GraphQL node id of the issue. Labelable id for label mutations.
    pub id: String,
    pub number: u64,
    /// Hosting repository, `"owner/name"`.
    pub repository: String,
    pub title: String,
    /// Raw issue-form markdown. Parsed lazily, once per run.
    pub body: String,
    /// Label names currently applied, in retrieval order.
    pub labels: Vec<String>,
    pub author: Account,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Assigned room name, when placed on the board.
    pub room: Option<String>,
    /// Assigned slot name, when placed on the board.
    pub slot: Option<String>,
}

impl Session {
    /// A session is scheduled once it has both a room and a slot.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.room.is_some() && self.slot.is_some()
    }

    /// Track names from this session's `track: *` labels, in label order.
    pub fn tracks(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().filter_map(|l| labels::track_name(l))
    }
}
