use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Session;
use crate::errors::ProjectDataError;

static ROOM_CAPACITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\((\d+)\)$").expect("room capacity pattern"));

static SLOT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})\s*$").expect("slot name pattern")
});

/// A physical room, identified by its board option name.
///
/// Board option names encode the seat count as a trailing parenthesized
/// number, e.g. `"Mezzanine (40)"`. `label` is the name without that suffix;
/// a `capacity` of `0` means the name carried no seat count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub label: String,
    pub capacity: u32,
}

impl Room {
    /// Build a room from its board option name, splitting off the capacity
    /// suffix when present.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if let Some(caps) = ROOM_CAPACITY_RE.captures(trimmed) {
            // The pattern only matches ASCII digits, so the parse can fail
            // solely on overflow; treat an absurd count as unknown.
            let capacity = caps[2].parse().unwrap_or(0);
            return Self {
                name: trimmed.to_string(),
                label: caps[1].to_string(),
                capacity,
            };
        }
        Self {
            name: trimmed.to_string(),
            label: trimmed.to_string(),
            capacity: 0,
        }
    }

    /// Whether the room name carried a seat count.
    #[must_use]
    pub const fn has_known_capacity(&self) -> bool {
        self.capacity > 0
    }
}

/// A meeting slot, identified by its board option name (`"H:MM - H:MM"`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Slot {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: u32,
}

impl Slot {
    /// Parse a board option name like `"9:30 - 10:30"` into a slot.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDataError::InvalidSlot`] when the name does not
    /// match the `"H:MM - H:MM"` shape or the range is empty or inverted.
    pub fn parse(name: &str) -> Result<Self, ProjectDataError> {
        let invalid = |reason: &str| ProjectDataError::InvalidSlot {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        let caps = SLOT_NAME_RE
            .captures(name)
            .ok_or_else(|| invalid("expected \"H:MM - H:MM\""))?;
        let start = NaiveTime::parse_from_str(&caps[1], "%H:%M")
            .map_err(|_| invalid("unparseable start time"))?;
        let end = NaiveTime::parse_from_str(&caps[2], "%H:%M")
            .map_err(|_| invalid("unparseable end time"))?;
        let minutes = (end - start).num_minutes();
        if minutes <= 0 {
            return Err(invalid("end is not after start"));
        }
        Ok(Self {
            name: name.trim().to_string(),
            start,
            end,
            duration_minutes: u32::try_from(minutes).map_err(|_| invalid("range too long"))?,
        })
    }
}

/// A label defined on the hosting repository. `id` is the GraphQL node id
/// used by the label mutation API.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Label {
    pub id: String,
    pub name: String,
}

/// Event-level metadata read from the board description.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Display name of the event, e.g. `"IETF 123"`.
    pub meeting: String,
    /// Date the breakout sessions take place.
    pub date: NaiveDate,
    /// IANA timezone name. Display and calendar metadata only; deadline
    /// arithmetic uses [`ProjectMetadata::event_instant`].
    pub timezone: String,
}

impl ProjectMetadata {
    /// The instant used for agenda/minutes deadline arithmetic: the event
    /// date at 00:00:00 UTC.
    #[must_use]
    pub fn event_instant(&self) -> DateTime<Utc> {
        self.date.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc()
    }
}

/// Point-in-time snapshot of the scheduling board: rooms, slots, the
/// repository label catalog, event metadata, and the session issues with
/// their placements. Read-only for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub metadata: ProjectMetadata,
    pub rooms: Vec<Room>,
    pub slots: Vec<Slot>,
    pub labels: Vec<Label>,
    pub sessions: Vec<Session>,
}

impl Project {
    #[must_use]
    pub fn session(&self, number: u64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.number == number)
    }

    #[must_use]
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.name == name)
    }

    /// Verify the snapshot invariants everything downstream relies on:
    /// room, slot, label, and session keys are unique, and every slot name
    /// is parseable. Run this once per snapshot before validating sessions.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProjectDataError`] found.
    pub fn check_structure(&self) -> Result<(), ProjectDataError> {
        let mut seen = std::collections::HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.name.as_str()) {
                return Err(ProjectDataError::DuplicateRoom(room.name.clone()));
            }
        }
        seen.clear();
        for slot in &self.slots {
            if !seen.insert(slot.name.as_str()) {
                return Err(ProjectDataError::DuplicateSlot(slot.name.clone()));
            }
            Slot::parse(&slot.name)?;
        }
        seen.clear();
        for label in &self.labels {
            if !seen.insert(label.name.as_str()) {
                return Err(ProjectDataError::DuplicateLabel(label.name.clone()));
            }
        }
        let mut numbers = std::collections::HashSet::new();
        for session in &self.sessions {
            if !numbers.insert(session.number) {
                return Err(ProjectDataError::DuplicateSession(session.number));
            }
        }
        Ok(())
    }
}
