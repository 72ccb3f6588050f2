use commitclock_ghapi_interface::ApiError;

use crate::queries::QueryError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("GraphQL error: {}", .messages.join(", "))]
    GraphQlError { messages: Vec<String> },

    #[error(transparent)]
    QueryError { source: QueryError },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<QueryError> for GitHubError {
    fn from(e: QueryError) -> Self {
        GitHubError::QueryError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::GraphQlError { messages } => ApiError::GraphQlError { messages },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
