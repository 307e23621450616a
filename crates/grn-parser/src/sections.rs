//! Value parsers for the individual form sections.
//!
//! Each parser takes the trimmed section content and either produces the
//! typed value or one problem string per thing wrong with it. Parsers never
//! see absent sections; presence is handled by the body splitter.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use grn_core::entities::ChairDeclaration;
use grn_core::enums::{Attendance, MaterialKind};

static LOGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9][A-Za-z0-9-]*$").expect("login pattern"));

static SHORTNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("shortname pattern"));

static MATERIAL_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+([A-Za-z]+)\s*:\s*(.*)$").expect("material line pattern"));

pub(crate) fn parse_attendance(value: &str) -> Result<Attendance, String> {
    let lowered = value.to_ascii_lowercase();
    if lowered.contains("public") || lowered.contains("anyone") {
        return Ok(Attendance::Public);
    }
    if lowered.contains("restricted") {
        return Ok(Attendance::Restricted);
    }
    Err(format!("unrecognized attendance {value:?}"))
}

pub(crate) fn parse_duration(value: &str) -> Result<u32, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "30" | "30 minutes" => Ok(30),
        "60" | "60 minutes" | "1 hour" => Ok(60),
        _ => Err(format!("unrecognized duration {value:?} (the form offers 30 or 60 minutes)")),
    }
}

/// Either a bare attendee count or one of the form's named brackets, mapped
/// to the bracket's planning estimate.
pub(crate) fn parse_capacity(value: &str) -> Result<u32, String> {
    let normalized = value.trim().to_ascii_lowercase();
    if let Ok(count) = normalized.parse::<u32>() {
        return Ok(count);
    }
    match normalized.as_str() {
        "fewer than 20" => Ok(15),
        "20 to 45" => Ok(30),
        "more than 45" => Ok(50),
        _ => Err(format!("unrecognized capacity {value:?}")),
    }
}

/// Lowercased channel name without the leading `#`.
pub(crate) fn parse_shortname(value: &str) -> Result<String, String> {
    let lowered = value.trim().to_ascii_lowercase();
    let name = lowered.strip_prefix('#').unwrap_or(&lowered);
    if SHORTNAME_RE.is_match(name) {
        Ok(name.to_string())
    } else {
        Err(format!("{value:?} is not a usable IRC channel name"))
    }
}

/// Whitespace/comma-separated `#N` references. Duplicates collapse, order
/// preserved.
pub(crate) fn parse_conflicts(value: &str) -> Result<Vec<u64>, Vec<String>> {
    let mut problems = Vec::new();
    let mut numbers = Vec::new();
    for token in value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
    {
        match token.strip_prefix('#').and_then(|digits| digits.parse::<u64>().ok()) {
            Some(number) => {
                if !numbers.contains(&number) {
                    numbers.push(number);
                }
            }
            None => problems.push(format!("conflict reference {token:?} is not a #number")),
        }
    }
    if problems.is_empty() { Ok(numbers) } else { Err(problems) }
}

/// Comma/newline-separated entries. An entry starting with `@` is a list
/// of platform logins; anything else is one display name kept whole.
pub(crate) fn parse_chairs(value: &str) -> Result<Vec<ChairDeclaration>, Vec<String>> {
    let mut problems = Vec::new();
    let mut chairs = Vec::new();
    for entry in value.split([',', '\n']) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.starts_with('@') {
            for token in entry.split_whitespace() {
                if LOGIN_RE.is_match(token) {
                    chairs.push(ChairDeclaration::from_token(token));
                } else {
                    problems.push(format!("chair entry {token:?} is not a valid @login"));
                }
            }
        } else {
            chairs.push(ChairDeclaration::from_token(entry));
        }
    }
    if problems.is_empty() { Ok(chairs) } else { Err(problems) }
}

/// Markdown list lines `- Kind: value`. The value may be a placeholder;
/// the kind must be one the program knows how to publish.
pub(crate) fn parse_materials(value: &str) -> Result<BTreeMap<MaterialKind, String>, Vec<String>> {
    let mut problems = Vec::new();
    let mut materials = BTreeMap::new();
    for line in value.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = MATERIAL_LINE_RE.captures(line) else {
            problems.push(format!("material line {line:?} is not \"- Kind: link\""));
            continue;
        };
        let Some(kind) = MaterialKind::from_name(&caps[1]) else {
            problems.push(format!("unknown material kind {:?}", &caps[1]));
            continue;
        };
        if materials.insert(kind, caps[2].trim().to_string()).is_some() {
            problems.push(format!("material {kind:?} listed more than once", kind = kind.as_str()));
        }
    }
    if problems.is_empty() { Ok(materials) } else { Err(problems) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("30", 30)]
    #[case("30 minutes", 30)]
    #[case("60", 60)]
    #[case("60 minutes", 60)]
    #[case("1 hour", 60)]
    #[case("  60 Minutes  ", 60)]
    fn durations_from_form_options(#[case] value: &str, #[case] minutes: u32) {
        assert_eq!(parse_duration(value), Ok(minutes));
    }

    #[rstest]
    #[case("90 minutes")]
    #[case("half a day")]
    #[case("")]
    fn unknown_durations_are_problems(#[case] value: &str) {
        assert!(parse_duration(value).is_err());
    }

    #[rstest]
    #[case("25", 25)]
    #[case("0", 0)]
    #[case("fewer than 20", 15)]
    #[case("20 to 45", 30)]
    #[case("More than 45", 50)]
    fn capacities_and_brackets(#[case] value: &str, #[case] capacity: u32) {
        assert_eq!(parse_capacity(value), Ok(capacity));
    }

    #[test]
    fn junk_capacity_is_a_problem() {
        assert!(parse_capacity("quite a lot").is_err());
    }

    #[rstest]
    #[case("Anyone can attend", Attendance::Public)]
    #[case("Open to the public", Attendance::Public)]
    #[case("Attendance is restricted", Attendance::Restricted)]
    fn attendance_values(#[case] value: &str, #[case] expected: Attendance) {
        assert_eq!(parse_attendance(value), Ok(expected));
    }

    #[test]
    fn unknown_attendance_is_a_problem() {
        assert!(parse_attendance("invite only, ping me").is_err());
    }

    #[rstest]
    #[case("#pq-handshakes", "pq-handshakes")]
    #[case("PQ_Handshakes", "pq_handshakes")]
    #[case("  #measure  ", "measure")]
    fn shortnames_are_normalized(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(parse_shortname(value), Ok(expected.to_string()));
    }

    #[rstest]
    #[case("two words")]
    #[case("#")]
    #[case("emoji🎉")]
    fn bad_shortnames_are_problems(#[case] value: &str) {
        assert!(parse_shortname(value).is_err());
    }

    #[test]
    fn conflicts_collapse_duplicates_in_order() {
        assert_eq!(parse_conflicts("#12 #7, #12\n#3"), Ok(vec![12, 7, 3]));
    }

    #[test]
    fn conflict_tokens_must_be_hash_numbers() {
        let problems = parse_conflicts("#12 14 #x").unwrap_err();
        assert_eq!(
            problems,
            vec![
                "conflict reference \"14\" is not a #number".to_string(),
                "conflict reference \"#x\" is not a #number".to_string(),
            ]
        );
    }

    #[test]
    fn chairs_mix_logins_and_names() {
        let chairs = parse_chairs("@ada @grace-hopper, Dorothy Vaughan").unwrap();
        assert_eq!(
            chairs,
            vec![
                ChairDeclaration::Login("ada".into()),
                ChairDeclaration::Login("grace-hopper".into()),
                ChairDeclaration::Name("Dorothy Vaughan".into()),
            ]
        );
    }

    #[test]
    fn malformed_logins_are_problems() {
        let problems = parse_chairs("@ada lovelace").unwrap_err();
        assert_eq!(problems, vec!["chair entry \"lovelace\" is not a valid @login".to_string()]);
    }

    #[test]
    fn materials_parse_into_kind_map() {
        let materials = parse_materials(
            "- Agenda: https://example.org/agenda\n- Minutes: TBD\n\n* Slides: https://example.org/deck",
        )
        .unwrap();
        assert_eq!(materials.get(&MaterialKind::Agenda).unwrap(), "https://example.org/agenda");
        assert_eq!(materials.get(&MaterialKind::Minutes).unwrap(), "TBD");
        assert_eq!(materials.get(&MaterialKind::Slides).unwrap(), "https://example.org/deck");
    }

    #[test]
    fn unknown_material_kinds_and_bad_lines_are_problems() {
        let problems =
            parse_materials("- Whiteboard: https://example.org\njust a sentence").unwrap_err();
        assert_eq!(
            problems,
            vec![
                "unknown material kind \"Whiteboard\"".to_string(),
                "material line \"just a sentence\" is not \"- Kind: link\"".to_string(),
            ]
        );
    }

    #[test]
    fn repeated_material_kind_is_a_problem() {
        let problems = parse_materials("- Agenda: TBD\n- agenda: TBD").unwrap_err();
        assert_eq!(problems, vec!["material \"agenda\" listed more than once".to_string()]);
    }
}
