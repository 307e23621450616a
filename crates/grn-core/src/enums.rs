//! Severity, issue kind, and description enums for Greenroom.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all =
//! "snake_case")]`. The string forms double as label-name components, so
//! changing them is a breaking change to the label catalog contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a validation issue.
///
/// `Error` blocks downstream automation (scheduling, calendar push),
/// `Warning` is informational, `Check` requires human review. The ordering
/// `Error > Warning > Check` exists for display only; label reconciliation
/// treats all three symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Check,
}

impl Severity {
    /// All severities, highest first.
    pub const ALL: [Self; 3] = [Self::Error, Self::Warning, Self::Check];

    /// The lowercase string used in label names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Check => "check",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Error => 2,
            Self::Warning => 1,
            Self::Check => 0,
        }
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueKind
// ---------------------------------------------------------------------------

/// Closed set of validation issue kinds.
///
/// Together with [`Severity`], the kind forms the label-name projection
/// `"{severity}: {kind}"` (see [`crate::labels`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Format,
    Chairs,
    Conflict,
    Scheduling,
    Capacity,
    Track,
    Agenda,
    Minutes,
    Comments,
}

impl IssueKind {
    /// All kinds, in rule order.
    pub const ALL: [Self; 9] = [
        Self::Format,
        Self::Chairs,
        Self::Conflict,
        Self::Scheduling,
        Self::Capacity,
        Self::Track,
        Self::Agenda,
        Self::Minutes,
        Self::Comments,
    ];

    /// The lowercase string used in label names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Chairs => "chairs",
            Self::Conflict => "conflict",
            Self::Scheduling => "scheduling",
            Self::Capacity => "capacity",
            Self::Track => "track",
            Self::Agenda => "agenda",
            Self::Minutes => "minutes",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

/// Who can attend a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    Public,
    Restricted,
}

impl Attendance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Restricted => "restricted",
        }
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaterialKind
// ---------------------------------------------------------------------------

/// Kinds of meeting material a session can link to.
///
/// Derives `Ord` so materials can live in a `BTreeMap` with deterministic
/// iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Agenda,
    Minutes,
    Slides,
    Calendar,
}

impl MaterialKind {
    /// All kinds, in template order.
    pub const ALL: [Self; 4] = [Self::Agenda, Self::Minutes, Self::Slides, Self::Calendar];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agenda => "agenda",
            Self::Minutes => "minutes",
            Self::Slides => "slides",
            Self::Calendar => "calendar",
        }
    }

    /// Parse a material kind from the label used in the "Meeting materials"
    /// section, case-insensitively. Returns `None` for unknown kinds.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "agenda" => Some(Self::Agenda),
            "minutes" => Some(Self::Minutes),
            "slides" => Some(Self::Slides),
            "calendar" => Some(Self::Calendar),
            _ => None,
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Check);
        let mut severities = vec![Severity::Check, Severity::Error, Severity::Warning];
        severities.sort();
        assert_eq!(
            severities,
            vec![Severity::Check, Severity::Warning, Severity::Error]
        );
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Check.to_string(), "check");
    }

    #[test]
    fn issue_kind_strings_are_label_components() {
        assert_eq!(IssueKind::Scheduling.as_str(), "scheduling");
        assert_eq!(IssueKind::Comments.as_str(), "comments");
    }

    #[test]
    fn material_kind_from_name_is_case_insensitive() {
        assert_eq!(MaterialKind::from_name("Agenda"), Some(MaterialKind::Agenda));
        assert_eq!(MaterialKind::from_name(" MINUTES "), Some(MaterialKind::Minutes));
        assert_eq!(MaterialKind::from_name("whiteboard"), None);
    }
}
