//! Chair identity resolution seam.
//!
//! The engine needs each session's chairs resolved against the source
//! platform and the identity registry, but must stay runnable without a
//! network (tests, fixtures). [`ChairResolver`] is that seam; the live
//! implementation composes the platform and registry HTTP clients.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{Chair, ChairDeclaration, Session};

/// Transport-level failure while resolving chairs. Distinct from "this
/// chair could not be resolved", which is a validation finding, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("platform lookup failed: {0}")]
    Platform(String),

    #[error("registry lookup failed: {0}")]
    Registry(String),
}

/// Resolves a session's chairs to identity records.
///
/// Implementations return the author's chair first, followed by one chair
/// per declared co-chair in declaration order. Lookup misses ("no such
/// login", "not registered") surface as unresolved chairs in the result;
/// `Err` is reserved for transport faults.
#[async_trait]
pub trait ChairResolver: Send + Sync {
    async fn fetch_session_chairs(
        &self,
        session: &Session,
        declared: &[ChairDeclaration],
    ) -> Result<Vec<Chair>, ResolveError>;
}
