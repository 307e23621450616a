//! GitHub access configuration.

use serde::{Deserialize, Serialize};

fn default_graphql_url() -> String {
    "https://api.github.com/graphql".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Token with `repo` and `project` read scopes; label mutations need
    /// write access to the sessions repository.
    #[serde(default)]
    pub token: String,

    /// GraphQL endpoint. Only changed for GitHub Enterprise installs.
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Login owning the project board and the sessions repository.
    #[serde(default)]
    pub owner: String,

    /// Name of the repository holding the session issues.
    #[serde(default)]
    pub repo: String,

    /// Projects-v2 board number (the `N` in `.../projects/N`).
    #[serde(default)]
    pub project_number: u32,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            graphql_url: default_graphql_url(),
            owner: String::new(),
            repo: String::new(),
            project_number: 0,
        }
    }
}

impl GithubConfig {
    /// Check that every field a snapshot fetch needs is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
            && !self.owner.is_empty()
            && !self.repo.is_empty()
            && self.project_number != 0
    }

    /// `owner/repo` for display.
    #[must_use]
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
