//! The session request form as a closed section registry.
//!
//! Every form field has exactly one [`SectionId`] variant; the compiler
//! forces every consumer match to handle every section. [`TEMPLATE`] is the
//! declarative form definition: render order, exact headings, and which
//! sections a submission must carry.

/// One section of the session request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Description,
    Goal,
    Chairs,
    Attendance,
    Shortname,
    Duration,
    Capacity,
    Conflicts,
    Materials,
    Comments,
}

/// Template entry for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: SectionId,
    /// Exact heading GitHub renders for the field.
    pub title: &'static str,
    pub required: bool,
}

/// The form definition, in render order.
pub const TEMPLATE: [SectionSpec; 10] = [
    SectionSpec { id: SectionId::Description, title: "Session description", required: true },
    SectionSpec { id: SectionId::Goal, title: "Session goal", required: true },
    SectionSpec { id: SectionId::Chairs, title: "Additional session chairs", required: false },
    SectionSpec { id: SectionId::Attendance, title: "Who can attend", required: true },
    SectionSpec { id: SectionId::Shortname, title: "IRC channel", required: false },
    SectionSpec { id: SectionId::Duration, title: "Session duration", required: true },
    SectionSpec {
        id: SectionId::Capacity,
        title: "Estimated number of in-person attendees",
        required: false,
    },
    SectionSpec {
        id: SectionId::Conflicts,
        title: "Other sessions where we should avoid scheduling conflicts",
        required: false,
    },
    SectionSpec { id: SectionId::Materials, title: "Meeting materials", required: true },
    SectionSpec { id: SectionId::Comments, title: "Comments", required: false },
];

impl SectionId {
    /// Resolve a rendered heading to its section. `None` for headings the
    /// form never produces.
    #[must_use]
    pub fn for_heading(title: &str) -> Option<Self> {
        TEMPLATE.iter().find(|spec| spec.title == title).map(|spec| spec.id)
    }

    /// The heading this section renders as.
    #[must_use]
    pub fn title(self) -> &'static str {
        TEMPLATE
            .iter()
            .find(|spec| spec.id == self)
            .expect("every section id has a template entry")
            .title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_resolve_to_sections() {
        assert_eq!(SectionId::for_heading("Session goal"), Some(SectionId::Goal));
        assert_eq!(
            SectionId::for_heading("Meeting materials"),
            Some(SectionId::Materials)
        );
        assert_eq!(SectionId::for_heading("Shoe size"), None);
    }

    #[test]
    fn titles_roundtrip_through_the_registry() {
        for spec in &TEMPLATE {
            assert_eq!(SectionId::for_heading(spec.id.title()), Some(spec.id));
        }
    }
}
