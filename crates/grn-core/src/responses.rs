//! CLI response types returned as JSON by `grn` commands.
//!
//! These structs define the shape of JSON output for `grn validate` and
//! `grn sync`; the session-request workflow consumes them with
//! `--format json`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ValidationIssue;

/// Response from `grn validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidateResponse {
    pub meeting: String,
    pub sessions_checked: u32,
    pub issues: Vec<ValidationIssue>,
}

/// Planned (or applied) label changes for one session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncPlan {
    pub session: u64,
    /// Label names to add, sorted.
    pub add: Vec<String>,
    /// Label names to remove, sorted.
    pub remove: Vec<String>,
    pub applied: bool,
}

impl SyncPlan {
    /// Whether this plan changes anything on the platform.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Response from `grn sync`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncResponse {
    pub meeting: String,
    pub plans: Vec<SyncPlan>,
}
