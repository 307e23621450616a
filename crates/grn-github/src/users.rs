//! Platform user lookup for chair declarations.

use serde::Deserialize;

use grn_core::entities::Account;

use crate::{GithubClient, error::GithubError};

const USER_QUERY: &str =
    "query($login: String!) { user(login: $login) { databaseId login avatarUrl } }";

#[derive(Deserialize)]
struct UserLookup {
    user: Option<RawUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    database_id: Option<u64>,
    login: String,
    avatar_url: Option<String>,
}

impl GithubClient {
    /// Resolve a login to a platform account.
    ///
    /// Returns `Ok(None)` when no user has that login (GitHub answers
    /// `"user": null` with a NOT_FOUND error alongside, which is a valid
    /// partial response, not a failure).
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn fetch_user(&self, login: &str) -> Result<Option<Account>, GithubError> {
        let data = self
            .post_graphql(USER_QUERY, serde_json::json!({ "login": login }))
            .await?;
        let lookup: UserLookup = serde_json::from_value(data)?;
        Ok(lookup.user.map(|user| Account {
            id: user.database_id.unwrap_or(0),
            login: user.login,
            avatar_url: user.avatar_url,
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_found_user() {
        let lookup: UserLookup = serde_json::from_str(
            r#"{
                "user": {
                    "databaseId": 583231,
                    "login": "octocat",
                    "avatarUrl": "https://avatars.githubusercontent.com/u/583231?v=4"
                }
            }"#,
        )
        .unwrap();
        let user = lookup.user.unwrap();
        assert_eq!(user.database_id, Some(583_231));
        assert_eq!(user.login, "octocat");
    }

    #[test]
    fn parse_missing_user() {
        let lookup: UserLookup = serde_json::from_str(r#"{ "user": null }"#).unwrap();
        assert!(lookup.user.is_none());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_octocat() {
        let token = std::env::var("GRN_GITHUB__TOKEN").expect("set GRN_GITHUB__TOKEN");
        let client = GithubClient::new("https://api.github.com/graphql", &token);
        let account = client.fetch_user("octocat").await.unwrap().unwrap();
        println!("octocat = id {} login {}", account.id, account.login);
        assert_eq!(account.login, "octocat");
    }
}
