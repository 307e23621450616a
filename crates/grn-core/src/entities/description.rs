use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ChairDeclaration;
use crate::enums::{Attendance, MaterialKind};

/// Typed view of a session's issue body, produced by the parser. Immutable
/// once computed; cached per run keyed by session number.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionDescription {
    pub description: String,
    pub goal: String,
    /// Co-chairs declared in the body, author excluded.
    pub chairs: Vec<ChairDeclaration>,
    pub attendance: Attendance,
    /// Requested IRC channel, lowercase, without the leading `#`.
    pub shortname: Option<String>,
    /// One of the form's fixed options, 30 or 60.
    pub duration_minutes: u32,
    /// Estimated in-person attendees; `0` means unspecified.
    pub capacity: u32,
    /// Session numbers declared as conflicting, declaration order,
    /// de-duplicated.
    pub conflicts: Vec<u64>,
    /// Material kind to URL or placeholder value.
    pub materials: BTreeMap<MaterialKind, String>,
    /// Free-text comments, verbatim (trimmed). Presence alone is meaningful.
    pub comments: Option<String>,
}

impl SessionDescription {
    #[must_use]
    pub fn material(&self, kind: MaterialKind) -> Option<&str> {
        self.materials.get(&kind).map(String::as_str)
    }

    /// Whether the material of `kind` is present and not a placeholder.
    #[must_use]
    pub fn has_usable_material(&self, kind: MaterialKind) -> bool {
        self.material(kind).is_some_and(|value| !is_placeholder(value))
    }
}

/// Whether a material value is a "TBD"-class placeholder rather than a
/// usable link: blank, a filler word, a leftover `@@` template marker, or
/// anything that is not an http(s) URL.
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    if ["tbd", "todo", "none"]
        .iter()
        .any(|filler| trimmed.eq_ignore_ascii_case(filler))
    {
        return true;
    }
    if trimmed.contains("@@") {
        return true;
    }
    !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn description() -> SessionDescription {
        SessionDescription {
            description: "A session".into(),
            goal: "Decide things".into(),
            chairs: vec![],
            attendance: Attendance::Public,
            shortname: None,
            duration_minutes: 60,
            capacity: 0,
            conflicts: vec![],
            materials: BTreeMap::from([
                (MaterialKind::Agenda, "https://example.org/agenda".to_string()),
                (MaterialKind::Minutes, "TBD".to_string()),
            ]),
            comments: None,
        }
    }

    #[test]
    fn placeholder_classification() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("   "));
        assert!(is_placeholder("TBD"));
        assert!(is_placeholder("tbd"));
        assert!(is_placeholder("None"));
        assert!(is_placeholder("https://example.org/@@agenda@@"));
        assert!(is_placeholder("wiki page coming soon"));
        assert!(!is_placeholder("https://example.org/agenda"));
        assert!(!is_placeholder("http://example.org/agenda"));
    }

    #[test]
    fn usable_material_ignores_placeholders() {
        let d = description();
        assert!(d.has_usable_material(MaterialKind::Agenda));
        assert!(!d.has_usable_material(MaterialKind::Minutes));
        assert!(!d.has_usable_material(MaterialKind::Slides));
    }

    #[test]
    fn materials_iterate_in_kind_order() {
        let kinds: Vec<_> = description().materials.keys().copied().collect();
        assert_eq!(kinds, vec![MaterialKind::Agenda, MaterialKind::Minutes]);
    }
}
