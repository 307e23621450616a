//! Program snapshot assembly from a Projects-v2 board.
//!
//! The board supplies the room and slot vocabularies (as single-select
//! field options), the per-session placements (as item field values), and
//! the event metadata (encoded in the board description). The label
//! catalog comes from the repository hosting the session issues.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use grn_core::entities::{Account, Label, Project, ProjectMetadata, Room, Session, Slot};

use crate::{GithubClient, error::GithubError};

const PROJECT_QUERY_ORG: &str = r"
query($owner: String!, $number: Int!, $after: String) {
  organization(login: $owner) {
    projectV2(number: $number) { ...ProjectParts }
  }
}
";

const PROJECT_QUERY_USER: &str = r"
query($owner: String!, $number: Int!, $after: String) {
  user(login: $owner) {
    projectV2(number: $number) { ...ProjectParts }
  }
}
";

/// Shared selection set for both owner kinds. Concatenated onto the query
/// document at request time because GraphQL fragments cannot live in a
/// separate request.
const PROJECT_PARTS: &str = r"
fragment ProjectParts on ProjectV2 {
  title
  shortDescription
  fields(first: 50) {
    nodes {
      ... on ProjectV2SingleSelectField { name options { name } }
    }
  }
  items(first: 100, after: $after) {
    pageInfo { hasNextPage endCursor }
    nodes {
      fieldValues(first: 20) {
        nodes {
          ... on ProjectV2ItemFieldSingleSelectValue {
            name
            field { ... on ProjectV2FieldCommon { name } }
          }
        }
      }
      content {
        ... on Issue {
          id
          number
          title
          body
          createdAt
          updatedAt
          author { login ... on User { databaseId avatarUrl } }
          repository { nameWithOwner }
          labels(first: 50) { nodes { name } }
        }
      }
    }
  }
}
";

const LABELS_QUERY: &str = r"
query($owner: String!, $name: String!, $after: String) {
  repository(owner: $owner, name: $name) {
    labels(first: 100, after: $after) {
      pageInfo { hasNextPage endCursor }
      nodes { id name }
    }
  }
}
";

// ---------------------------------------------------------------------------
// Raw response shapes
// ---------------------------------------------------------------------------

/// A GraphQL connection's `nodes` array; entries can be null, and inline
/// fragments make non-matching nodes deserialize as empty objects.
#[derive(Deserialize)]
struct NodeList<T> {
    nodes: Vec<Option<T>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Paged<T> {
    page_info: PageInfo,
    nodes: Vec<Option<T>>,
}

#[derive(Deserialize)]
struct OrgData {
    organization: Option<ProjectHolder>,
}

#[derive(Deserialize)]
struct UserData {
    user: Option<ProjectHolder>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectHolder {
    project_v2: Option<RawProject>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    title: String,
    short_description: Option<String>,
    fields: NodeList<RawField>,
    items: Paged<RawItem>,
}

#[derive(Deserialize)]
struct RawField {
    name: Option<String>,
    options: Option<Vec<RawOption>>,
}

#[derive(Deserialize)]
struct RawOption {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    field_values: NodeList<RawFieldValue>,
    content: Option<RawIssue>,
}

#[derive(Deserialize)]
struct RawFieldValue {
    name: Option<String>,
    field: Option<RawFieldRef>,
}

#[derive(Deserialize)]
struct RawFieldRef {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIssue {
    id: String,
    number: u64,
    title: String,
    body: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author: Option<RawActor>,
    repository: RawRepoRef,
    labels: NodeList<RawLabelName>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActor {
    login: String,
    database_id: Option<u64>,
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRepoRef {
    name_with_owner: String,
}

#[derive(Deserialize)]
struct RawLabelName {
    name: String,
}

#[derive(Deserialize)]
struct RepoData {
    repository: Option<RawRepoLabels>,
}

#[derive(Deserialize)]
struct RawRepoLabels {
    labels: Paged<RawLabel>,
}

#[derive(Deserialize)]
struct RawLabel {
    id: String,
    name: String,
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

impl GithubClient {
    /// Fetch the full program snapshot: board metadata, room/slot
    /// vocabularies, all session items, and the label catalog of
    /// `owner/repo`.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] when the board or repository cannot be
    /// found, a required single-select field ("Room", "Slot") is absent,
    /// the board description encodes no event date, or a slot option does
    /// not parse as a time range.
    pub async fn fetch_project(
        &self,
        owner: &str,
        repo: &str,
        project_number: u32,
    ) -> Result<Project, GithubError> {
        let mut page = self.fetch_project_page(owner, project_number, None).await?;
        while page.items.page_info.has_next_page {
            let cursor = page.items.page_info.end_cursor.clone();
            let next = self
                .fetch_project_page(owner, project_number, cursor.as_deref())
                .await?;
            page.items.nodes.extend(next.items.nodes);
            page.items.page_info = next.items.page_info;
        }
        let labels = self.fetch_label_catalog(owner, repo).await?;
        let project = assemble_project(page, labels)?;
        tracing::debug!(
            owner,
            number = project_number,
            sessions = project.sessions.len(),
            labels = project.labels.len(),
            "fetched project snapshot"
        );
        Ok(project)
    }

    /// One page of the board, trying the owner as an organization first
    /// and falling back to a user account.
    async fn fetch_project_page(
        &self,
        owner: &str,
        number: u32,
        after: Option<&str>,
    ) -> Result<RawProject, GithubError> {
        let variables = serde_json::json!({ "owner": owner, "number": number, "after": after });
        let query = format!("{PROJECT_QUERY_ORG}{PROJECT_PARTS}");
        let data = self.post_graphql(&query, variables.clone()).await?;
        let org: OrgData = serde_json::from_value(data)?;
        if let Some(holder) = org.organization {
            return holder.project_v2.ok_or_else(|| GithubError::ProjectNotFound {
                owner: owner.to_string(),
                number,
            });
        }

        let query = format!("{PROJECT_QUERY_USER}{PROJECT_PARTS}");
        let data = self.post_graphql(&query, variables).await?;
        let user: UserData = serde_json::from_value(data)?;
        user.user
            .and_then(|holder| holder.project_v2)
            .ok_or_else(|| GithubError::ProjectNotFound { owner: owner.to_string(), number })
    }

    async fn fetch_label_catalog(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Label>, GithubError> {
        let mut catalog = Vec::new();
        let mut after: Option<String> = None;
        loop {
            let variables =
                serde_json::json!({ "owner": owner, "name": repo, "after": after.as_deref() });
            let data = self.post_graphql(LABELS_QUERY, variables).await?;
            let repo_data: RepoData = serde_json::from_value(data)?;
            let Some(holder) = repo_data.repository else {
                return Err(GithubError::RepositoryNotFound {
                    owner: owner.to_string(),
                    name: repo.to_string(),
                });
            };
            catalog.extend(
                holder
                    .labels
                    .nodes
                    .into_iter()
                    .flatten()
                    .map(|label| Label { id: label.id, name: label.name }),
            );
            if !holder.labels.page_info.has_next_page {
                return Ok(catalog);
            }
            after = holder.labels.page_info.end_cursor;
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

fn assemble_project(raw: RawProject, labels: Vec<Label>) -> Result<Project, GithubError> {
    let metadata = parse_metadata(&raw.title, raw.short_description.as_deref())?;
    let rooms: Vec<Room> = single_select_options(&raw.fields, "Room")?
        .into_iter()
        .map(|name| Room::from_name(&name))
        .collect();
    let slots: Vec<Slot> = single_select_options(&raw.fields, "Slot")?
        .iter()
        .map(|name| Slot::parse(name))
        .collect::<Result<_, _>>()?;
    let sessions: Vec<Session> = raw
        .items
        .nodes
        .into_iter()
        .flatten()
        .filter_map(session_from_item)
        .collect();
    Ok(Project { metadata, rooms, slots, labels, sessions })
}

/// Read the board description as `key: value` pairs separated by commas.
/// `meeting` falls back to the board title, `timezone` to `Etc/UTC`;
/// `date` is required.
fn parse_metadata(
    title: &str,
    description: Option<&str>,
) -> Result<ProjectMetadata, GithubError> {
    let mut meeting = None;
    let mut date = None;
    let mut timezone = None;
    for part in description.unwrap_or_default().split(',') {
        let Some((key, value)) = part.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "meeting" => meeting = Some(value.to_string()),
            "date" => {
                date = Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
                    GithubError::Metadata(format!("bad date {value:?}: {e}"))
                })?);
            }
            "timezone" => timezone = Some(value.to_string()),
            _ => {}
        }
    }
    Ok(ProjectMetadata {
        meeting: meeting.unwrap_or_else(|| title.to_string()),
        date: date.ok_or_else(|| {
            GithubError::Metadata("description must declare \"date: YYYY-MM-DD\"".to_string())
        })?,
        timezone: timezone.unwrap_or_else(|| "Etc/UTC".to_string()),
    })
}

fn single_select_options(
    fields: &NodeList<RawField>,
    wanted: &str,
) -> Result<Vec<String>, GithubError> {
    fields
        .nodes
        .iter()
        .flatten()
        .find(|field| field.name.as_deref() == Some(wanted))
        .and_then(|field| field.options.as_ref())
        .map(|options| options.iter().map(|option| option.name.clone()).collect())
        .ok_or_else(|| GithubError::MissingField(wanted.to_string()))
}

/// Map one board item to a session. Items without issue content (draft
/// items, pull requests) are skipped.
fn session_from_item(item: RawItem) -> Option<Session> {
    let Some(issue) = item.content else {
        tracing::debug!("skipping project item without issue content");
        return None;
    };
    let room = field_value(&item.field_values, "Room");
    let slot = field_value(&item.field_values, "Slot");
    let author = issue.author.map_or(
        // Deleted accounts surface as a null author.
        Account { id: 0, login: "ghost".to_string(), avatar_url: None },
        |actor| Account {
            id: actor.database_id.unwrap_or(0),
            login: actor.login,
            avatar_url: actor.avatar_url,
        },
    );
    Some(Session {
        id: issue.id,
        number: issue.number,
        repository: issue.repository.name_with_owner,
        title: issue.title,
        body: issue.body.unwrap_or_default(),
        labels: issue.labels.nodes.into_iter().flatten().map(|label| label.name).collect(),
        author,
        created_at: issue.created_at,
        updated_at: issue.updated_at,
        room,
        slot,
    })
}

fn field_value(values: &NodeList<RawFieldValue>, field_name: &str) -> Option<String> {
    values.nodes.iter().flatten().find_map(|value| {
        let name = value.name.as_ref()?;
        let field = value.field.as_ref()?;
        (field.name.as_deref() == Some(field_name)).then(|| name.clone())
    })
}
