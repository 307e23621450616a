//! Structural faults in project data.
//!
//! These are raised when a project snapshot violates invariants that the
//! rest of the system depends on (unique room, slot, label, and session
//! keys). They are distinct from validation findings: a finding describes a
//! problem with a session, a `ProjectDataError` means the snapshot itself
//! cannot be trusted.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectDataError {
    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),

    #[error("duplicate slot name: {0}")]
    DuplicateSlot(String),

    #[error("duplicate label name: {0}")]
    DuplicateLabel(String),

    #[error("duplicate session number: #{0}")]
    DuplicateSession(u64),

    #[error("invalid slot {name:?}: {reason}")]
    InvalidSlot { name: String, reason: String },
}
