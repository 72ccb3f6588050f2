//! API crate.
//!
//! Contains functions to communicate with GitHub API.

#![warn(clippy::all)]

mod auth;
mod errors;
mod graphql;
pub mod queries;

use std::collections::HashMap;

use async_trait::async_trait;
use commitclock_config::Config;
use commitclock_ghapi_interface::{
    types::{GhCommit, GhGist, GhRepository, GhViewer},
    ApiService, Result,
};
pub use errors::GitHubError;
use graphql::{CommitHistoryData, ContributedRepositoriesData, GraphQlResponse, ViewerData};
use queries::GraphQlQuery;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::auth::{build_github_url, get_authenticated_client_builder};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(GitHubError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    /// Send a query to the GraphQL endpoint and decode its `data` payload.
    #[tracing::instrument(skip_all)]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &GraphQlQuery,
    ) -> Result<T, GitHubError> {
        self.get_client()?
            .post(&self.build_url("/graphql".into()))
            .json(query)
            .send()
            .await?
            .error_for_status()?
            .json::<GraphQlResponse<T>>()
            .await?
            .into_result()
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn viewer_get(&self) -> Result<GhViewer> {
        let data: ViewerData = self.execute(&queries::viewer_query()).await?;
        Ok(data.viewer)
    }

    #[tracing::instrument(skip(self))]
    async fn repositories_contributed_list(&self, username: &str) -> Result<Vec<GhRepository>> {
        let query = queries::contributed_repositories_query(username).map_err(GitHubError::from)?;
        let data: ContributedRepositoriesData = self.execute(&query).await?;
        Ok(data.into_repositories())
    }

    #[tracing::instrument(skip(self))]
    async fn commit_history_list(
        &self,
        author_id: &str,
        owner: &str,
        name: &str,
    ) -> Result<Vec<GhCommit>> {
        let query =
            queries::commit_history_query(author_id, name, owner).map_err(GitHubError::from)?;
        let data: CommitHistoryData = self.execute(&query).await?;
        Ok(data.into_commits())
    }

    #[tracing::instrument(skip(self))]
    async fn gists_get(&self, gist_id: &str) -> Result<GhGist> {
        Ok(self
            .get_client()?
            .get(&self.build_url(format!("/gists/{gist_id}")))
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json()
            .await
            .map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self, content))]
    async fn gists_update_file(
        &self,
        gist_id: &str,
        filename: &str,
        new_filename: &str,
        content: &str,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct FileUpdate<'a> {
            filename: &'a str,
            content: &'a str,
        }

        #[derive(Serialize)]
        struct Request<'a> {
            files: HashMap<&'a str, FileUpdate<'a>>,
        }

        let request = Request {
            files: HashMap::from([(
                filename,
                FileUpdate {
                    filename: new_filename,
                    content,
                },
            )]),
        };

        self.get_client()?
            .patch(&self.build_url(format!("/gists/{gist_id}")))
            .json(&request)
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?;

        Ok(())
    }
}
