use async_trait::async_trait;

use crate::{
    types::{GhCommit, GhGist, GhRepository, GhViewer},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get the authenticated user.
    async fn viewer_get(&self) -> Result<GhViewer>;
    /// List repositories a user contributed to, forks included.
    async fn repositories_contributed_list(&self, username: &str) -> Result<Vec<GhRepository>>;
    /// List commits authored by a user on the default branch of a repository.
    ///
    /// A repository without default branch yields no commits.
    async fn commit_history_list(
        &self,
        author_id: &str,
        owner: &str,
        name: &str,
    ) -> Result<Vec<GhCommit>>;
    /// Get a gist from its ID.
    async fn gists_get(&self, gist_id: &str) -> Result<GhGist>;
    /// Rename and replace the content of one gist file.
    async fn gists_update_file(
        &self,
        gist_id: &str,
        filename: &str,
        new_filename: &str,
        content: &str,
    ) -> Result<()>;
}
