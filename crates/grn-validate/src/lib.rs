//! # grn-validate
//!
//! Validation engine and label reconciliation for Greenroom.
//!
//! Given a program snapshot ([`RunContext`]) and a chair resolver, the
//! engine checks each session against the program's scheduling and identity
//! rules and returns classified findings ([`validate_session`],
//! [`validate_all`]). [`reconcile_labels`] then diffs the findings' label
//! projection against the labels a session currently carries and yields the
//! minimal add/remove sets.
//!
//! Findings are data, never errors: the engine returns `Err` only when the
//! snapshot is unusable, the session number is unknown, or a collaborator
//! fails at the transport level.

pub mod context;
pub mod engine;
pub mod reconcile;

mod error;
#[cfg(test)]
mod test_support;

pub use grn_core::resolve;

pub use context::RunContext;
pub use engine::{validate_all, validate_session};
pub use error::{EngineError, ReconcileError};
pub use reconcile::{LabelChanges, reconcile_labels};
