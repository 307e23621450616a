//! Per-run state: the snapshot, the pinned clock, and the memoization maps.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use grn_core::entities::{Chair, ChairDeclaration, Project, Session, SessionDescription};
use grn_core::errors::ProjectDataError;
use grn_core::resolve::{ChairResolver, ResolveError};

type ParseOutcome = Result<Arc<SessionDescription>, Arc<Vec<String>>>;

/// One validation run over one snapshot.
///
/// Holds the read-only [`Project`] plus everything computed lazily during
/// the run: parsed session descriptions and resolved chairs, both keyed by
/// session number and computed at most once. "Now" is pinned at
/// construction so every rule in the run sees the same instant and two
/// passes over unchanged input produce byte-identical findings.
pub struct RunContext {
    project: Project,
    now: DateTime<Utc>,
    descriptions: Mutex<HashMap<u64, ParseOutcome>>,
    chairs: Mutex<HashMap<u64, Arc<Vec<Chair>>>>,
}

impl RunContext {
    /// Build a context for a snapshot, pinning "now" to the wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDataError`] when the snapshot violates structural
    /// invariants; nothing can be validated against a snapshot with
    /// duplicate keys or unparseable slots.
    pub fn new(project: Project) -> Result<Self, ProjectDataError> {
        Self::pinned(project, Utc::now())
    }

    /// Like [`RunContext::new`] with an explicit "now", for reproducible
    /// runs and deadline tests.
    ///
    /// # Errors
    ///
    /// Same as [`RunContext::new`].
    pub fn pinned(project: Project, now: DateTime<Utc>) -> Result<Self, ProjectDataError> {
        project.check_structure()?;
        Ok(Self {
            project,
            now,
            descriptions: Mutex::new(HashMap::new()),
            chairs: Mutex::new(HashMap::new()),
        })
    }

    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// The instant every deadline rule in this run measures against.
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// The session's parsed description, computing and caching it on first
    /// use. A failed parse is cached too: the problem list is as much a
    /// per-run fact as a successful parse.
    pub(crate) fn description_for(&self, session: &Session) -> ParseOutcome {
        let mut cache = self.descriptions.lock().expect("description cache poisoned");
        cache
            .entry(session.number)
            .or_insert_with(|| {
                grn_parser::parse_session_body(&session.body)
                    .map(Arc::new)
                    .map_err(Arc::new)
            })
            .clone()
    }

    /// The session's resolved chairs, resolving and caching on first use.
    /// The cache lock is never held across the resolver call.
    pub(crate) async fn chairs_for<R>(
        &self,
        resolver: &R,
        session: &Session,
        declared: &[ChairDeclaration],
    ) -> Result<Arc<Vec<Chair>>, ResolveError>
    where
        R: ChairResolver + ?Sized,
    {
        if let Some(found) = self
            .chairs
            .lock()
            .expect("chair cache poisoned")
            .get(&session.number)
        {
            return Ok(Arc::clone(found));
        }
        let resolved = Arc::new(resolver.fetch_session_chairs(session, declared).await?);
        let mut cache = self.chairs.lock().expect("chair cache poisoned");
        Ok(Arc::clone(cache.entry(session.number).or_insert(resolved)))
    }
}
