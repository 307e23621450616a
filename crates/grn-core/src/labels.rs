//! Label-name conventions for the hosting repository.
//!
//! The validation state of a session is mirrored onto GitHub labels named
//! exactly `"{severity}: {kind}"` (lowercase severity, one space after the
//! colon). This module is the single source of truth for that wire format:
//! both the projection of issues to label names and the recognition of
//! severity labels on a session go through here. The string is also the
//! reconciliation key, so changing it is a breaking change to the label
//! catalog contract.

use crate::enums::{IssueKind, Severity};

/// Marker label identifying breakout-session issues. Reconciliation must
/// never remove it, even if it were ever mis-classified as a severity label.
pub const SESSION_MARKER: &str = "session";

/// Prefix of thematic track labels, e.g. `"track: privacy"`.
pub const TRACK_PREFIX: &str = "track: ";

/// Label name for a severity/kind pair, e.g. `"warning: capacity"`.
#[must_use]
pub fn severity_label_name(severity: Severity, kind: IssueKind) -> String {
    format!("{}: {}", severity.as_str(), kind.as_str())
}

/// Split a label name into its severity and kind components.
///
/// The kind is returned as a raw string: sessions can carry severity labels
/// whose kind is no longer produced by the engine, and reconciliation must
/// still recognize (and remove) those.
#[must_use]
pub fn parse_severity_label(name: &str) -> Option<(Severity, &str)> {
    for severity in Severity::ALL {
        if let Some(rest) = name.strip_prefix(severity.as_str()) {
            if let Some(kind) = rest.strip_prefix(": ") {
                if !kind.is_empty() {
                    return Some((severity, kind));
                }
            }
        }
    }
    None
}

/// Whether a label name belongs to the severity taxonomy.
///
/// Labels outside it (`"session"`, `"track: *"`, anything else) are
/// out-of-band for reconciliation and must be left untouched.
#[must_use]
pub fn is_severity_label(name: &str) -> bool {
    parse_severity_label(name).is_some()
}

/// The track name of a `"track: *"` label, or `None` for other labels.
#[must_use]
pub fn track_name(label: &str) -> Option<&str> {
    label.strip_prefix(TRACK_PREFIX).filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_name_format_is_fixed() {
        assert_eq!(
            severity_label_name(Severity::Error, IssueKind::Scheduling),
            "error: scheduling"
        );
        assert_eq!(
            severity_label_name(Severity::Check, IssueKind::Comments),
            "check: comments"
        );
    }

    #[test]
    fn parse_roundtrips_engine_labels() {
        for severity in Severity::ALL {
            let name = severity_label_name(severity, IssueKind::Track);
            assert_eq!(parse_severity_label(&name), Some((severity, "track")));
        }
    }

    #[test]
    fn parse_accepts_unknown_kinds() {
        assert_eq!(
            parse_severity_label("warning: irc"),
            Some((Severity::Warning, "irc"))
        );
    }

    #[test]
    fn parse_rejects_out_of_band_labels() {
        assert_eq!(parse_severity_label("session"), None);
        assert_eq!(parse_severity_label("track: privacy"), None);
        assert_eq!(parse_severity_label("error:scheduling"), None);
        assert_eq!(parse_severity_label("error: "), None);
        assert_eq!(parse_severity_label("fatal: scheduling"), None);
    }

    #[test]
    fn track_name_extraction() {
        assert_eq!(track_name("track: privacy"), Some("privacy"));
        assert_eq!(track_name("track: "), None);
        assert_eq!(track_name("warning: track"), None);
    }
}
