use async_trait::async_trait;
use commitclock_ghapi_interface::types::GhRepository;
use futures::future::try_join_all;
use shaku::{Component, Interface};
use tracing::{error, info};

use crate::{
    buckets::{BucketCounts, TimeBucketer},
    CoreContext, DomainError, Result,
};

/// Repository the user contributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub name: String,
    pub owner: String,
}

impl From<GhRepository> for RepositoryRef {
    fn from(repository: GhRepository) -> Self {
        Self {
            name: repository.name,
            owner: repository.owner.login,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectCommitBucketsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<BucketCounts>;
}

#[derive(Component)]
#[shaku(interface = CollectCommitBucketsInterface)]
pub(crate) struct CollectCommitBuckets;

#[async_trait]
impl CollectCommitBucketsInterface for CollectCommitBuckets {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<BucketCounts> {
        let bucketer = TimeBucketer::new(ctx.config.timezone.as_deref())?;

        let viewer = ctx.api_service.viewer_get().await.map_err(|e| {
            error!(error = %e, message = "Unable to get username and id");
            DomainError::AuthError { source: e }
        })?;

        let repositories: Vec<RepositoryRef> = ctx
            .api_service
            .repositories_contributed_list(&viewer.login)
            .await
            .map_err(|e| {
                error!(
                    username = %viewer.login,
                    error = %e,
                    message = "Unable to get the contributed repositories"
                );
                DomainError::DiscoveryError {
                    username: viewer.login.clone(),
                    source: e,
                }
            })?
            .into_iter()
            .filter(|r| !r.is_fork)
            .map(RepositoryRef::from)
            .collect();

        info!(
            username = %viewer.login,
            repositories = repositories.len(),
            message = "Fetching commit history"
        );

        let histories = try_join_all(repositories.iter().map(|r| {
            ctx.api_service
                .commit_history_list(&viewer.id, &r.owner, &r.name)
        }))
        .await
        .map_err(|e| {
            error!(error = %e, message = "Unable to get the commit info");
            DomainError::HistoryFetchError { source: e }
        })?;

        bucketer.count(
            histories
                .iter()
                .flatten()
                .map(|commit| commit.committed_date.as_str()),
        )
    }
}
