//! GitHub client error types.

use grn_core::errors::ProjectDataError;
use thiserror::Error;

/// Errors from the GitHub GraphQL API or from mapping its responses.
#[derive(Debug, Error)]
pub enum GithubError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub returned a non-success status code.
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The GraphQL layer answered with errors and no usable data.
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// A response did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// No Projects-v2 board with that number under the owner, as either an
    /// organization or a user.
    #[error("project {number} not found under {owner:?}")]
    ProjectNotFound {
        /// Login the board was looked up under.
        owner: String,
        /// Board number.
        number: u32,
    },

    /// The repository hosting the session issues does not exist or is not
    /// visible to the token.
    #[error("repository {owner}/{name} not found")]
    RepositoryNotFound {
        /// Repository owner login.
        owner: String,
        /// Repository name.
        name: String,
    },

    /// The board is missing a required single-select field.
    #[error("project field {0:?} is missing or is not single-select")]
    MissingField(String),

    /// The project title/description does not encode usable metadata.
    #[error("project metadata: {0}")]
    Metadata(String),

    /// The assembled snapshot is structurally invalid.
    #[error(transparent)]
    Project(#[from] ProjectDataError),
}
