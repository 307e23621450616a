//! User lookup endpoints.

use grn_core::entities::RegistryIdentity;

use crate::{RegistryClient, error::RegistryError};

#[derive(serde::Deserialize)]
struct UserRecord {
    registry_id: u64,
    name: String,
    email: Option<String>,
}

impl UserRecord {
    fn into_identity(self) -> RegistryIdentity {
        RegistryIdentity { id: self.registry_id, name: self.name, email: self.email }
    }
}

impl RegistryClient {
    /// Look up the registry user who linked the given platform (GitHub)
    /// account id to their registry profile.
    ///
    /// Returns `Ok(None)` when no registry user has linked that account.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the registry answers
    /// with a non-success status other than 404, or the response body
    /// cannot be parsed.
    pub async fn user_by_platform_id(
        &self,
        platform_id: u64,
    ) -> Result<Option<RegistryIdentity>, RegistryError> {
        let url = format!("{}/users?platform-id={platform_id}", self.base_url);
        self.lookup(&url).await
    }

    /// Look up a registry user by display name, for chairs declared by
    /// name rather than `@login`.
    ///
    /// The registry answers with its unique match or 404; `Ok(None)` means
    /// the name matched nobody (or more than one person, which the registry
    /// reports the same way).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the registry answers
    /// with a non-success status other than 404, or the response body
    /// cannot be parsed.
    pub async fn user_by_name(
        &self,
        name: &str,
    ) -> Result<Option<RegistryIdentity>, RegistryError> {
        let url = format!("{}/users?name={}", self.base_url, urlencoding::encode(name));
        self.lookup(&url).await
    }

    async fn lookup(&self, url: &str) -> Result<Option<RegistryIdentity>, RegistryError> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let found = decode_user(request.send().await?).await?;
        if found.is_none() {
            tracing::debug!(url, "registry lookup returned no user");
        }
        Ok(found)
    }
}

/// Map a lookup response: 404 means "no such user", 429 carries the
/// `Retry-After` header (60 s when absent or unparseable), any other
/// non-success status is an API error.
async fn decode_user(
    resp: reqwest::Response,
) -> Result<Option<RegistryIdentity>, RegistryError> {
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);
        return Err(RegistryError::RateLimited { retry_after_secs });
    }
    if !resp.status().is_success() {
        return Err(RegistryError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    let record: UserRecord = resp.json().await?;
    Ok(Some(record.into_identity()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "registry_id": 108216,
        "name": "Ada Lovelace",
        "email": "ada@example.org"
    }"#;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn parse_user_record() {
        let record: UserRecord = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(record.registry_id, 108_216);
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.email.as_deref(), Some("ada@example.org"));
    }

    #[test]
    fn email_is_optional() {
        let record: UserRecord =
            serde_json::from_str(r#"{"registry_id": 7, "name": "Grace Hopper"}"#).unwrap();
        assert!(record.email.is_none());
    }

    #[tokio::test]
    async fn found_user_maps_to_identity() {
        let identity = decode_user(mock_response(200, FIXTURE)).await.unwrap().unwrap();
        assert_eq!(identity.id, 108_216);
        assert_eq!(identity.name, "Ada Lovelace");
        assert_eq!(identity.email.as_deref(), Some("ada@example.org"));
    }

    #[tokio::test]
    async fn missing_user_is_none() {
        let found = decode_user(mock_response(404, "")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn rate_limit_carries_retry_after() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", "30")
                .body(String::new())
                .unwrap(),
        );
        let err = decode_user(resp).await.unwrap_err();
        assert!(matches!(err, RegistryError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn rate_limit_defaults_to_sixty_seconds() {
        let err = decode_user(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(err, RegistryError::RateLimited { retry_after_secs: 60 }));
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let err = decode_user(mock_response(500, "boom")).await.unwrap_err();
        match err {
            RegistryError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
