use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A co-chair entry as written in the issue body: either an `@login`
/// platform handle or a bare display name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChairDeclaration {
    Login(String),
    Name(String),
}

impl ChairDeclaration {
    /// Classify one declaration token. A leading `@` marks a platform
    /// login; anything else is taken as a display name.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        token.strip_prefix('@').map_or_else(
            || Self::Name(token.to_string()),
            |login| Self::Login(login.to_string()),
        )
    }
}

/// What a chair is on the source platform: a resolved account, or just a
/// name somebody typed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChairIdentity {
    Platform {
        id: u64,
        login: String,
        avatar_url: Option<String>,
    },
    Name {
        name: String,
    },
}

/// Identity-registry record for a chair, keyed by platform id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegistryIdentity {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
}

/// A session chair: the issue author or a declared co-chair, after identity
/// resolution against the platform and the registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Chair {
    pub identity: ChairIdentity,
    pub registry: Option<RegistryIdentity>,
}

impl Chair {
    /// How to refer to this chair in messages: registry name when known,
    /// otherwise the platform login or declared name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if let Some(registry) = &self.registry {
            return &registry.name;
        }
        match &self.identity {
            ChairIdentity::Platform { login, .. } => login,
            ChairIdentity::Name { name } => name,
        }
    }

    #[must_use]
    pub const fn has_platform_identity(&self) -> bool {
        matches!(self.identity, ChairIdentity::Platform { .. })
    }
}
