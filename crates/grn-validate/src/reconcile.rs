//! Label reconciliation: make a session's severity labels match its
//! findings.
//!
//! Only labels in the `"{severity}: {kind}"` taxonomy are ever touched.
//! Everything else on the session (`session`, `track: *`, ad-hoc labels)
//! is out of band and left exactly as found. The computation is pure; the
//! caller submits the resulting sets to the platform, and because both
//! sets are diffs against current state, replaying them is a no-op.

use grn_core::entities::{Label, Session, ValidationIssue};
use grn_core::enums::{IssueKind, Severity};
use grn_core::labels;

use crate::context::RunContext;
use crate::error::ReconcileError;

/// Catalog entries to add to and remove from one session, each ordered by
/// label name. Ids feed the mutation API; names feed dry-run output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChanges {
    pub to_add: Vec<Label>,
    pub to_remove: Vec<Label>,
}

impl LabelChanges {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    #[must_use]
    pub fn add_ids(&self) -> Vec<String> {
        self.to_add.iter().map(|label| label.id.clone()).collect()
    }

    #[must_use]
    pub fn remove_ids(&self) -> Vec<String> {
        self.to_remove.iter().map(|label| label.id.clone()).collect()
    }

    #[must_use]
    pub fn add_names(&self) -> Vec<String> {
        self.to_add.iter().map(|label| label.name.clone()).collect()
    }

    #[must_use]
    pub fn remove_names(&self) -> Vec<String> {
        self.to_remove.iter().map(|label| label.name.clone()).collect()
    }
}

/// Diff the labels a session should carry against the labels it has.
///
/// `issues` are this session's findings from the engine. `previous_body`
/// is the body before the edit that triggered this run, when the caller
/// has one; it only influences the `check: comments` label (see below).
///
/// The `check: comments` label is a manual "seen it" marker: an organizer
/// removes it after reading the comments. It is re-added only when the
/// comments actually changed relative to `previous_body` — with no
/// previous body, or one that does not parse, it is re-added. Removal is
/// not special-cased; a removed comments section is a content change.
///
/// # Errors
///
/// [`ReconcileError::UnknownLabel`] when a label that must be added or
/// removed has no entry in `catalog`.
pub fn reconcile_labels(
    ctx: &RunContext,
    session: &Session,
    issues: &[ValidationIssue],
    catalog: &[Label],
    previous_body: Option<&str>,
) -> Result<LabelChanges, ReconcileError> {
    let mut have: Vec<&str> = session
        .labels
        .iter()
        .map(String::as_str)
        .filter(|name| labels::is_severity_label(name))
        .collect();
    have.sort_unstable();
    have.dedup();

    let mut want: Vec<String> = issues.iter().map(ValidationIssue::label_name).collect();
    want.sort_unstable();
    want.dedup();

    let comments_label = labels::severity_label_name(Severity::Check, IssueKind::Comments);

    let mut to_add = Vec::new();
    for name in &want {
        if have.contains(&name.as_str()) {
            continue;
        }
        if *name == comments_label && !comments_changed(ctx, session, previous_body) {
            tracing::debug!(
                session = session.number,
                "comments unchanged, leaving the check label off"
            );
            continue;
        }
        to_add.push(catalog_entry(catalog, name)?.clone());
    }

    let mut to_remove = Vec::new();
    for name in &have {
        if want.iter().any(|wanted| wanted.as_str() == *name) {
            continue;
        }
        // The session marker is never classified as a severity label, but
        // it must survive even a mis-classification.
        if *name == labels::SESSION_MARKER {
            continue;
        }
        to_remove.push(catalog_entry(catalog, name)?.clone());
    }

    tracing::debug!(
        session = session.number,
        add = to_add.len(),
        remove = to_remove.len(),
        "reconciled labels"
    );
    Ok(LabelChanges { to_add, to_remove })
}

fn catalog_entry<'c>(catalog: &'c [Label], name: &str) -> Result<&'c Label, ReconcileError> {
    catalog
        .iter()
        .find(|label| label.name == name)
        .ok_or_else(|| ReconcileError::UnknownLabel { name: name.to_string() })
}

/// Whether the comments section differs between the session's current body
/// and `previous_body`. Unknowable cases count as changed.
fn comments_changed(ctx: &RunContext, session: &Session, previous_body: Option<&str>) -> bool {
    let Some(previous_body) = previous_body else {
        return true;
    };
    let Ok(previous) = grn_parser::parse_session_body(previous_body) else {
        return true;
    };
    match ctx.description_for(session) {
        Ok(description) => description.comments != previous.comments,
        Err(_) => true,
    }
}
