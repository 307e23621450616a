//! Engine and reconciliation error types.

use grn_core::resolve::ResolveError;
use thiserror::Error;

/// Faults that stop a validation run. Rule violations are findings, not
/// errors; these are the cases where no finding list can be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("session #{0} is not in the program snapshot")]
    UnknownSession(u64),

    #[error("chair resolution failed for session #{session}: {source}")]
    ChairResolution {
        session: u64,
        #[source]
        source: ResolveError,
    },
}

/// Faults while computing label changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("label {name:?} is not defined on the hosting repository")]
    UnknownLabel { name: String },
}
