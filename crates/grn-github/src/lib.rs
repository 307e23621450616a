//! # grn-github
//!
//! GitHub GraphQL client for Greenroom.
//!
//! Three responsibilities, one module each:
//! - [`project`]: fetch a Projects-v2 board plus the hosting repository's
//!   label catalog and assemble the immutable program snapshot.
//! - [`users`]: resolve `@login` chair declarations to platform accounts.
//! - [`labels`]: apply reconciliation results via labelable mutations.
//!
//! All requests go through [`GithubClient::post_graphql`], which unwraps
//! the GraphQL envelope and turns error-only responses into
//! [`GithubError::Graphql`]. Partial responses (data present, errors
//! alongside) are passed through: the org/user board fallback depends on
//! reading `"organization": null` next to a NOT_FOUND error.

mod error;
mod labels;
mod project;
mod users;

pub use error::GithubError;

use serde::Deserialize;

/// Authenticated client for the GitHub GraphQL API.
pub struct GithubClient {
    http: reqwest::Client,
    graphql_url: String,
    token: String,
}

#[derive(Deserialize)]
struct GraphqlEnvelope {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphqlErrorItem>>,
}

#[derive(Deserialize)]
struct GraphqlErrorItem {
    message: String,
}

impl GithubClient {
    /// Create a client posting to `graphql_url` with a bearer `token`.
    ///
    /// GitHub's GraphQL endpoint rejects anonymous requests, so the token
    /// is mandatory.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(graphql_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("greenroom/0.1")
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client should build"),
            graphql_url: graphql_url.to_string(),
            token: token.to_string(),
        }
    }

    /// POST one GraphQL document and unwrap the response envelope.
    ///
    /// Returns the `data` value when it is present and non-null, even if
    /// errors accompany it. A null or absent `data` becomes
    /// [`GithubError::Graphql`] carrying the joined error messages.
    pub(crate) async fn post_graphql(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, GithubError> {
        let resp = self
            .http
            .post(&self.graphql_url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(GithubError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let GraphqlEnvelope { data, errors } = resp.json().await?;
        if let Some(data) = data {
            if !data.is_null() {
                return Ok(data);
            }
        }
        let summary = errors
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        Err(GithubError::Graphql(if summary.is_empty() {
            "empty response".to_string()
        } else {
            summary
        }))
    }
}
