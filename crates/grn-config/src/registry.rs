//! Identity registry configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Base URL of the identity registry API.
    #[serde(default)]
    pub base_url: String,

    /// Optional bearer token; the lookup endpoints answer anonymous
    /// requests at a lower rate limit.
    #[serde(default)]
    pub token: String,
}

impl RegistryConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// The token as an option, `None` when unset.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        if self.token.is_empty() { None } else { Some(self.token.clone()) }
    }
}
