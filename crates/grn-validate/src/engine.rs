//! The validation rules, in processing order.
//!
//! Rules run strictly in order and short-circuit in two places: a body
//! that does not follow the request form stops the run after the format
//! finding, and broken conflict declarations suppress the conflict-slot
//! warning (a warning computed from unusable declarations would be noise).

use chrono::Duration;
use futures::future::try_join_all;

use grn_core::entities::ValidationIssue;
use grn_core::enums::{IssueKind, MaterialKind, Severity};
use grn_core::resolve::ChairResolver;

use crate::context::RunContext;
use crate::error::EngineError;

/// Agenda links are expected this close to the event; minutes links this
/// long after it.
const DEADLINE_WINDOW_HOURS: i64 = 48;

fn finding(session: u64, severity: Severity, kind: IssueKind, messages: Vec<String>) -> ValidationIssue {
    ValidationIssue { session, severity, kind, messages }
}

/// Validate one session against every rule.
///
/// Returns the ordered findings; a clean session yields an empty list.
/// Within one context, validating the same session twice returns
/// byte-identical findings.
///
/// # Errors
///
/// [`EngineError::UnknownSession`] when `number` is not in the snapshot,
/// [`EngineError::ChairResolution`] when the resolver fails at the
/// transport level.
pub async fn validate_session<R>(
    ctx: &RunContext,
    resolver: &R,
    number: u64,
) -> Result<Vec<ValidationIssue>, EngineError>
where
    R: ChairResolver + ?Sized,
{
    let session = ctx
        .project()
        .session(number)
        .ok_or(EngineError::UnknownSession(number))?;

    let mut issues = Vec::new();

    // Rule 1: the body must follow the request form. Nothing else is
    // checkable against an unparseable body.
    let description = match ctx.description_for(session) {
        Ok(description) => description,
        Err(problems) => {
            issues.push(finding(number, Severity::Error, IssueKind::Format, (*problems).clone()));
            return Ok(issues);
        }
    };

    // Rule 2: every chair must resolve to a registered identity.
    let chairs = ctx
        .chairs_for(resolver, session, &description.chairs)
        .await
        .map_err(|source| EngineError::ChairResolution { session: number, source })?;
    let mut messages = Vec::new();
    for chair in chairs.iter() {
        if chair.registry.is_some() {
            continue;
        }
        if chair.has_platform_identity() {
            messages.push(format!("chair {:?} has no registry account", chair.display_name()));
        } else {
            messages.push(format!(
                "chair {:?} could not be resolved to any account",
                chair.display_name()
            ));
        }
    }
    if !messages.is_empty() {
        issues.push(finding(number, Severity::Error, IssueKind::Chairs, messages));
    }

    // Rule 3: declared conflicts must name other, existing sessions.
    let mut messages = Vec::new();
    for &declared in &description.conflicts {
        if declared == number {
            messages.push(format!("a session cannot conflict with itself (#{number})"));
        } else if ctx.project().session(declared).is_none() {
            messages.push(format!("declared conflict #{declared} is not a session in this program"));
        }
    }
    let conflicts_usable = messages.is_empty();
    if !conflicts_usable {
        issues.push(finding(number, Severity::Error, IssueKind::Conflict, messages));
    }

    // Rule 4: one room, one slot, one session.
    if let (Some(room), Some(slot)) = (session.room.as_deref(), session.slot.as_deref()) {
        let mut messages = Vec::new();
        for other in &ctx.project().sessions {
            if other.number != number
                && other.room.as_deref() == Some(room)
                && other.slot.as_deref() == Some(slot)
            {
                messages.push(format!(
                    "also scheduled in {room} at {slot}: {} (#{})",
                    other.title, other.number
                ));
            }
        }
        if !messages.is_empty() {
            issues.push(finding(number, Severity::Error, IssueKind::Scheduling, messages));
        }
    }

    // Rule 5: the requested head count should fit the room. Rooms without
    // a seat count in their name are never flagged.
    if description.capacity > 0 {
        if let Some(room) = session.room.as_deref().and_then(|name| ctx.project().room(name)) {
            if room.has_known_capacity() && room.capacity < description.capacity {
                issues.push(finding(number, Severity::Warning, IssueKind::Capacity, Vec::new()));
            }
        }
    }

    // Rule 6: declared conflicts should not share this session's slot.
    if conflicts_usable && !description.conflicts.is_empty() {
        if let Some(slot) = session.slot.as_deref() {
            let mut messages = Vec::new();
            for &declared in &description.conflicts {
                if let Some(other) = ctx.project().session(declared) {
                    if other.slot.as_deref() == Some(slot) {
                        messages.push(format!(
                            "conflicts with {} (#{}) in the same slot",
                            other.title, other.number
                        ));
                    }
                }
            }
            if !messages.is_empty() {
                issues.push(finding(number, Severity::Warning, IssueKind::Conflict, messages));
            }
        }
    }

    // Rule 7: sessions on the same track should not run concurrently.
    // All tracks aggregate into one finding.
    if let Some(slot) = session.slot.as_deref() {
        let mut messages = Vec::new();
        for track in session.tracks() {
            for other in &ctx.project().sessions {
                if other.number != number
                    && other.slot.as_deref() == Some(slot)
                    && other.tracks().any(|t| t == track)
                {
                    messages.push(format!(
                        "shares track {track:?} and slot with {} (#{})",
                        other.title, other.number
                    ));
                }
            }
        }
        if !messages.is_empty() {
            issues.push(finding(number, Severity::Warning, IssueKind::Track, messages));
        }
    }

    // Rule 8: comments need a human look.
    if description.comments.is_some() {
        issues.push(finding(
            number,
            Severity::Check,
            IssueKind::Comments,
            vec!["session has comments for the organizers".to_string()],
        ));
    }

    // Rules 9 and 10: material deadlines, only once a session is scheduled.
    if session.is_scheduled() {
        let event = ctx.project().metadata.event_instant();
        let window = Duration::hours(DEADLINE_WINDOW_HOURS);
        if !description.has_usable_material(MaterialKind::Agenda)
            && event.signed_duration_since(ctx.now()) < window
        {
            issues.push(finding(
                number,
                Severity::Warning,
                IssueKind::Agenda,
                vec!["no usable agenda link within 48 hours of the event".to_string()],
            ));
        }
        if !description.has_usable_material(MaterialKind::Minutes)
            && ctx.now().signed_duration_since(event) > window
        {
            issues.push(finding(
                number,
                Severity::Warning,
                IssueKind::Minutes,
                vec!["no usable minutes link 48 hours after the event".to_string()],
            ));
        }
    }

    tracing::debug!(session = number, findings = issues.len(), "validated session");
    Ok(issues)
}

/// Validate every session in the snapshot, concurrently, preserving
/// snapshot order in the combined result.
///
/// # Errors
///
/// The first [`EngineError`] any session hits.
pub async fn validate_all<R>(
    ctx: &RunContext,
    resolver: &R,
) -> Result<Vec<ValidationIssue>, EngineError>
where
    R: ChairResolver + ?Sized,
{
    let mut numbers: Vec<u64> = Vec::new();
    for session in &ctx.project().sessions {
        if !numbers.contains(&session.number) {
            numbers.push(session.number);
        }
    }
    let per_session =
        try_join_all(numbers.iter().map(|&number| validate_session(ctx, resolver, number))).await?;
    Ok(per_session.into_iter().flatten().collect())
}
