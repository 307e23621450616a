//! Body splitting and description assembly.

use std::collections::{BTreeMap, HashMap, HashSet};

use grn_core::entities::SessionDescription;

use crate::sections;
use crate::template::{SectionId, TEMPLATE};

/// What GitHub renders for an empty optional form field.
const NO_RESPONSE: &str = "_No response_";

/// Check a session body against the form template.
///
/// Returns every format problem found, in order: structural problems
/// (stray preamble text, unknown or duplicated headings) as encountered,
/// then missing required sections in template order, then per-section value
/// problems in template order. Empty means the body parses.
#[must_use]
pub fn validate_session_body_format(body: &str) -> Vec<String> {
    match parse_session_body(body) {
        Ok(_) => Vec::new(),
        Err(problems) => problems,
    }
}

/// Parse a session body into a typed description.
///
/// # Errors
///
/// Returns the same problem list as [`validate_session_body_format`] when
/// the body does not follow the form.
pub fn parse_session_body(body: &str) -> Result<SessionDescription, Vec<String>> {
    let (blocks, mut problems) = split_blocks(body);

    let mut seen: HashSet<SectionId> = HashSet::new();
    let mut present: HashMap<SectionId, String> = HashMap::new();
    for (title, content) in blocks {
        let Some(id) = SectionId::for_heading(title) else {
            problems.push(format!("unknown section {title:?}"));
            continue;
        };
        if !seen.insert(id) {
            problems.push(format!("duplicate section {title:?}"));
            continue;
        }
        let content = content.trim();
        if content.is_empty() || content == NO_RESPONSE {
            continue;
        }
        present.insert(id, content.to_string());
    }

    for spec in &TEMPLATE {
        if spec.required && !present.contains_key(&spec.id) {
            problems.push(format!("missing required section {:?}", spec.title));
        }
    }

    let mut description = None;
    let mut goal = None;
    let mut chairs = Vec::new();
    let mut attendance = None;
    let mut shortname = None;
    let mut duration = None;
    let mut capacity = 0;
    let mut conflicts = Vec::new();
    let mut materials = BTreeMap::new();
    let mut comments = None;

    for spec in &TEMPLATE {
        let Some(value) = present.get(&spec.id) else {
            continue;
        };
        match spec.id {
            SectionId::Description => description = Some(value.clone()),
            SectionId::Goal => goal = Some(value.clone()),
            SectionId::Chairs => match sections::parse_chairs(value) {
                Ok(parsed) => chairs = parsed,
                Err(mut found) => problems.append(&mut found),
            },
            SectionId::Attendance => match sections::parse_attendance(value) {
                Ok(parsed) => attendance = Some(parsed),
                Err(problem) => problems.push(problem),
            },
            SectionId::Shortname => match sections::parse_shortname(value) {
                Ok(parsed) => shortname = Some(parsed),
                Err(problem) => problems.push(problem),
            },
            SectionId::Duration => match sections::parse_duration(value) {
                Ok(parsed) => duration = Some(parsed),
                Err(problem) => problems.push(problem),
            },
            SectionId::Capacity => match sections::parse_capacity(value) {
                Ok(parsed) => capacity = parsed,
                Err(problem) => problems.push(problem),
            },
            SectionId::Conflicts => match sections::parse_conflicts(value) {
                Ok(parsed) => conflicts = parsed,
                Err(mut found) => problems.append(&mut found),
            },
            SectionId::Materials => match sections::parse_materials(value) {
                Ok(parsed) => materials = parsed,
                Err(mut found) => problems.append(&mut found),
            },
            SectionId::Comments => comments = Some(value.clone()),
        }
    }

    if !problems.is_empty() {
        return Err(problems);
    }

    let (Some(description), Some(goal), Some(attendance), Some(duration_minutes)) =
        (description, goal, attendance, duration)
    else {
        unreachable!("missing required sections were reported as problems");
    };
    Ok(SessionDescription {
        description,
        goal,
        chairs,
        attendance,
        shortname,
        duration_minutes,
        capacity,
        conflicts,
        materials,
        comments,
    })
}

/// Split a body into `(heading, content)` blocks on `### ` heading lines.
/// Non-blank text before the first heading is a problem.
fn split_blocks(body: &str) -> (Vec<(&str, String)>, Vec<String>) {
    let mut problems = Vec::new();
    let mut blocks: Vec<(&str, String)> = Vec::new();
    let mut preamble_is_blank = true;
    for line in body.lines() {
        if let Some(title) = line.strip_prefix("### ") {
            blocks.push((title.trim(), String::new()));
        } else if let Some((_, content)) = blocks.last_mut() {
            content.push_str(line);
            content.push('\n');
        } else if !line.trim().is_empty() {
            preamble_is_blank = false;
        }
    }
    if !preamble_is_blank {
        problems.push("unexpected text before the first section heading".to_string());
    }
    (blocks, problems)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use grn_core::entities::ChairDeclaration;
    use grn_core::enums::{Attendance, MaterialKind};

    use super::*;

    fn form_body() -> String {
        [
            ("Session description", "Hands-on exploration of PQ handshakes."),
            ("Session goal", "Agree on next steps."),
            ("Additional session chairs", "@grace-hopper, Dorothy Vaughan"),
            ("Who can attend", "Anyone can attend"),
            ("IRC channel", "#pq-handshakes"),
            ("Session duration", "60 minutes"),
            ("Estimated number of in-person attendees", "20 to 45"),
            ("Other sessions where we should avoid scheduling conflicts", "#4 #9"),
            ("Meeting materials", "- Agenda: https://example.org/agenda\n- Minutes: TBD"),
            ("Comments", "Projector needed."),
        ]
        .iter()
        .map(|(title, value)| format!("### {title}\n\n{value}\n"))
        .collect::<Vec<_>>()
        .join("\n")
    }

    #[test]
    fn full_body_parses() {
        let description = parse_session_body(&form_body()).unwrap();
        assert_eq!(description.description, "Hands-on exploration of PQ handshakes.");
        assert_eq!(description.goal, "Agree on next steps.");
        assert_eq!(
            description.chairs,
            vec![
                ChairDeclaration::Login("grace-hopper".into()),
                ChairDeclaration::Name("Dorothy Vaughan".into()),
            ]
        );
        assert_eq!(description.attendance, Attendance::Public);
        assert_eq!(description.shortname.as_deref(), Some("pq-handshakes"));
        assert_eq!(description.duration_minutes, 60);
        assert_eq!(description.capacity, 30);
        assert_eq!(description.conflicts, vec![4, 9]);
        assert_eq!(
            description.material(MaterialKind::Agenda),
            Some("https://example.org/agenda")
        );
        assert_eq!(description.material(MaterialKind::Minutes), Some("TBD"));
        assert_eq!(description.comments.as_deref(), Some("Projector needed."));
    }

    #[test]
    fn no_response_sections_are_absent() {
        let body = form_body()
            .replace("@grace-hopper, Dorothy Vaughan", NO_RESPONSE)
            .replace("#pq-handshakes", NO_RESPONSE)
            .replace("20 to 45", NO_RESPONSE)
            .replace("#4 #9", NO_RESPONSE)
            .replace("Projector needed.", NO_RESPONSE);
        let description = parse_session_body(&body).unwrap();
        assert_eq!(description.chairs, vec![]);
        assert_eq!(description.shortname, None);
        assert_eq!(description.capacity, 0);
        assert_eq!(description.conflicts, Vec::<u64>::new());
        assert_eq!(description.comments, None);
    }

    #[test]
    fn missing_materials_is_exactly_one_problem() {
        let body = form_body().replace(
            "### Meeting materials\n\n- Agenda: https://example.org/agenda\n- Minutes: TBD\n",
            "",
        );
        let problems = validate_session_body_format(&body);
        assert_eq!(problems, vec!["missing required section \"Meeting materials\"".to_string()]);
    }

    #[test]
    fn unknown_and_missing_sections_are_distinct_problems() {
        let body = form_body()
            .replace("### Session goal", "### Session vibe");
        let problems = validate_session_body_format(&body);
        assert_eq!(
            problems,
            vec![
                "unknown section \"Session vibe\"".to_string(),
                "missing required section \"Session goal\"".to_string(),
            ]
        );
    }

    #[test]
    fn preamble_text_is_a_problem() {
        let body = format!("hello organizers\n\n{}", form_body());
        let problems = validate_session_body_format(&body);
        assert_eq!(problems, vec!["unexpected text before the first section heading".to_string()]);
    }

    #[test]
    fn duplicate_sections_are_problems() {
        let body = format!("{}\n### Comments\n\nAgain.\n", form_body());
        let problems = validate_session_body_format(&body);
        assert_eq!(problems, vec!["duplicate section \"Comments\"".to_string()]);
    }

    #[test]
    fn value_problems_carry_through() {
        let body = form_body().replace("60 minutes", "90 minutes");
        let problems = validate_session_body_format(&body);
        assert_eq!(
            problems,
            vec!["unrecognized duration \"90 minutes\" (the form offers 30 or 60 minutes)".to_string()]
        );
    }

    #[test]
    fn valid_body_validates_clean() {
        assert_eq!(validate_session_body_format(&form_body()), Vec::<String>::new());
    }

    #[test]
    fn comments_kept_verbatim_for_change_tracking() {
        let body = form_body().replace("Projector needed.", "Projector needed.\nAlso: snacks?");
        let description = parse_session_body(&body).unwrap();
        assert_eq!(description.comments.as_deref(), Some("Projector needed.\nAlso: snacks?"));
    }
}
