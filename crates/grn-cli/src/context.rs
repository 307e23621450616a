//! Shared application resources and the live chair resolver.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;

use grn_config::GreenroomConfig;
use grn_core::entities::{Chair, ChairDeclaration, ChairIdentity, Project, RegistryIdentity, Session};
use grn_core::resolve::{ChairResolver, ResolveError};
use grn_github::GithubClient;
use grn_registry::RegistryClient;

/// Clients and configuration initialized once at startup.
pub struct AppContext {
    pub config: GreenroomConfig,
    pub github: Arc<GithubClient>,
    pub resolver: LiveChairResolver,
}

impl AppContext {
    /// Build the GitHub and registry clients from configuration.
    ///
    /// Every network command needs both: the snapshot and label mutations
    /// go to GitHub, chair resolution additionally hits the registry.
    pub fn init(config: GreenroomConfig) -> anyhow::Result<Self> {
        let github_config = config.require_github()?;
        let registry_config = config.require_registry()?;

        let github = Arc::new(GithubClient::new(&github_config.graphql_url, &github_config.token));
        let registry =
            RegistryClient::new(&registry_config.base_url, registry_config.bearer_token());
        let resolver = LiveChairResolver { github: Arc::clone(&github), registry };

        Ok(Self { config, github, resolver })
    }

    /// Fetch the program snapshot for the configured board.
    pub async fn fetch_snapshot(&self) -> anyhow::Result<Project> {
        let github = self.config.require_github()?;
        self.github
            .fetch_project(&github.owner, &github.repo, github.project_number)
            .await
            .with_context(|| {
                format!(
                    "failed to fetch project {} of {}",
                    github.project_number,
                    github.repo_slug()
                )
            })
    }
}

/// Chair resolution against the live platform and registry APIs.
///
/// The author arrives with a platform account from the snapshot; declared
/// co-chairs are looked up by login or by name. Lookup misses become
/// unresolved chairs, which the engine flags; only transport failures
/// surface as errors.
pub struct LiveChairResolver {
    github: Arc<GithubClient>,
    registry: RegistryClient,
}

impl LiveChairResolver {
    async fn registry_for_platform_id(
        &self,
        platform_id: u64,
    ) -> Result<Option<RegistryIdentity>, ResolveError> {
        // Id 0 means the platform reported no database id (bots, deleted
        // accounts); the registry cannot know such an account.
        if platform_id == 0 {
            return Ok(None);
        }
        self.registry
            .user_by_platform_id(platform_id)
            .await
            .map_err(|error| ResolveError::Registry(error.to_string()))
    }

    async fn chair_for_login(&self, login: &str) -> Result<Chair, ResolveError> {
        let account = self
            .github
            .fetch_user(login)
            .await
            .map_err(|error| ResolveError::Platform(error.to_string()))?;
        match account {
            Some(account) => Ok(Chair {
                registry: self.registry_for_platform_id(account.id).await?,
                identity: ChairIdentity::Platform {
                    id: account.id,
                    login: account.login,
                    avatar_url: account.avatar_url,
                },
            }),
            // No such login: keep the handle as written so the chairs
            // finding names it.
            None => Ok(Chair {
                identity: ChairIdentity::Name { name: format!("@{login}") },
                registry: None,
            }),
        }
    }

    async fn chair_for_name(&self, name: &str) -> Result<Chair, ResolveError> {
        let registry = self
            .registry
            .user_by_name(name)
            .await
            .map_err(|error| ResolveError::Registry(error.to_string()))?;
        Ok(Chair { identity: ChairIdentity::Name { name: name.to_string() }, registry })
    }
}

#[async_trait]
impl ChairResolver for LiveChairResolver {
    async fn fetch_session_chairs(
        &self,
        session: &Session,
        declared: &[ChairDeclaration],
    ) -> Result<Vec<Chair>, ResolveError> {
        let mut chairs = Vec::with_capacity(declared.len() + 1);

        let author = &session.author;
        chairs.push(Chair {
            registry: self.registry_for_platform_id(author.id).await?,
            identity: ChairIdentity::Platform {
                id: author.id,
                login: author.login.clone(),
                avatar_url: author.avatar_url.clone(),
            },
        });

        for declaration in declared {
            chairs.push(match declaration {
                ChairDeclaration::Login(login) => self.chair_for_login(login).await?,
                ChairDeclaration::Name(name) => self.chair_for_name(name).await?,
            });
        }

        tracing::debug!(session = session.number, chairs = chairs.len(), "resolved chairs");
        Ok(chairs)
    }
}
