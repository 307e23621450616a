use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IssueKind, Severity};
use crate::labels;

/// One validation finding for one session. Recomputed every run, never
/// persisted; only its label-name projection reaches GitHub.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationIssue {
    pub session: u64,
    pub severity: Severity,
    pub kind: IssueKind,
    /// Ordered human-readable detail lines. May be empty for boolean-only
    /// checks, where the finding's presence is the whole signal.
    pub messages: Vec<String>,
}

impl ValidationIssue {
    /// The GitHub label name this finding is mirrored to.
    #[must_use]
    pub fn label_name(&self) -> String {
        labels::severity_label_name(self.severity, self.kind)
    }
}
