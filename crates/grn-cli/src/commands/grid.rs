use serde::Serialize;

use grn_core::entities::Project;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, table};
use crate::progress::Progress;
use crate::ui;

/// The room-by-slot schedule, one cell per placement.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct GridResponse {
    meeting: String,
    slots: Vec<String>,
    rows: Vec<GridRow>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct GridRow {
    room: String,
    /// One cell per slot, in `slots` order. Double-booked cells carry a
    /// leading `!!`.
    cells: Vec<String>,
}

/// Handle `grn grid`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("fetching program snapshot");
    let project = ctx.fetch_snapshot().await?;
    spinner.finish_clear();
    project.check_structure()?;

    let grid = build_grid(&project);
    if flags.format == OutputFormat::Table {
        let mut headers: Vec<&str> = vec!["room"];
        headers.extend(grid.slots.iter().map(String::as_str));
        let rows: Vec<Vec<String>> = grid
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![row.room.clone()];
                cells.extend(row.cells.iter().cloned());
                cells
            })
            .collect();
        println!("{}", table::render(&headers, &rows, ui::prefs().term_width));
        return Ok(());
    }
    output(&grid, flags.format)
}

fn build_grid(project: &Project) -> GridResponse {
    let slots: Vec<String> = project.slots.iter().map(|slot| slot.name.clone()).collect();
    let rows = project
        .rooms
        .iter()
        .map(|room| GridRow {
            room: room.name.clone(),
            cells: slots
                .iter()
                .map(|slot| {
                    let placed: Vec<String> = project
                        .sessions
                        .iter()
                        .filter(|session| {
                            session.room.as_deref() == Some(room.name.as_str())
                                && session.slot.as_deref() == Some(slot.as_str())
                        })
                        .map(|session| format!("#{} {}", session.number, session.title))
                        .collect();
                    match placed.len() {
                        0 => "-".to_string(),
                        1 => placed.into_iter().next().unwrap_or_default(),
                        _ => format!("!! {}", placed.join("; ")),
                    }
                })
                .collect(),
        })
        .collect();

    GridResponse { meeting: project.metadata.meeting.clone(), slots, rows }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    use grn_core::entities::{Account, ProjectMetadata, Room, Session, Slot};

    use super::*;

    fn session(number: u64, room: Option<&str>, slot: Option<&str>) -> Session {
        Session {
            id: format!("I_{number}"),
            number,
            repository: "example/sessions-123".into(),
            title: format!("Session {number}"),
            body: String::new(),
            labels: vec!["session".into()],
            author: Account { id: number, login: "ada".into(), avatar_url: None },
            created_at: Utc::now(),
            updated_at: Utc::now(),
            room: room.map(ToString::to_string),
            slot: slot.map(ToString::to_string),
        }
    }

    fn project(sessions: Vec<Session>) -> Project {
        Project {
            metadata: ProjectMetadata {
                meeting: "IETF 123".into(),
                date: NaiveDate::from_ymd_opt(2025, 7, 24).unwrap(),
                timezone: "Europe/Madrid".into(),
            },
            rooms: vec![Room::from_name("Mezzanine (40)"), Room::from_name("Studio (15)")],
            slots: vec![Slot::parse("9:30 - 10:30").unwrap(), Slot::parse("11:00 - 12:00").unwrap()],
            labels: vec![],
            sessions,
        }
    }

    #[test]
    fn placements_land_in_their_cells() {
        let grid = build_grid(&project(vec![
            session(1, Some("Mezzanine (40)"), Some("9:30 - 10:30")),
            session(2, Some("Studio (15)"), Some("11:00 - 12:00")),
            session(3, None, None),
        ]));

        assert_eq!(grid.slots, vec!["9:30 - 10:30", "11:00 - 12:00"]);
        assert_eq!(grid.rows[0].cells, vec!["#1 Session 1", "-"]);
        assert_eq!(grid.rows[1].cells, vec!["-", "#2 Session 2"]);
    }

    #[test]
    fn collisions_are_marked() {
        let grid = build_grid(&project(vec![
            session(1, Some("Studio (15)"), Some("9:30 - 10:30")),
            session(2, Some("Studio (15)"), Some("9:30 - 10:30")),
        ]));

        assert_eq!(grid.rows[1].cells[0], "!! #1 Session 1; #2 Session 2");
    }
}
