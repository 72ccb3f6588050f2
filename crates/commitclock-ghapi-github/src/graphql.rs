//! GraphQL response envelope and payloads.

use commitclock_ghapi_interface::types::{GhCommit, GhRepository, GhViewer};
use serde::Deserialize;

use crate::errors::GitHubError;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

impl<T> GraphQlResponse<T> {
    /// Errors win over partial data.
    pub fn into_result(self) -> Result<T, GitHubError> {
        if !self.errors.is_empty() {
            return Err(GitHubError::GraphQlError {
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        self.data.ok_or_else(|| GitHubError::GraphQlError {
            messages: vec!["Missing data in GraphQL response".into()],
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewerData {
    pub viewer: GhViewer,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContributedRepositoriesData {
    user: Option<ContributedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributedUser {
    repositories_contributed_to: Nodes<GhRepository>,
}

#[derive(Debug, Deserialize)]
struct Nodes<T> {
    #[serde(default)]
    nodes: Vec<Option<T>>,
}

impl ContributedRepositoriesData {
    pub fn into_repositories(self) -> Vec<GhRepository> {
        self.user
            .map(|u| {
                u.repositories_contributed_to
                    .nodes
                    .into_iter()
                    .flatten()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitHistoryData {
    repository: Option<HistoryRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRepository {
    default_branch_ref: Option<HistoryRef>,
}

#[derive(Debug, Deserialize)]
struct HistoryRef {
    target: Option<HistoryTarget>,
}

// Non-commit targets come back as an empty object.
#[derive(Debug, Deserialize)]
struct HistoryTarget {
    #[serde(default)]
    history: Option<History>,
}

#[derive(Debug, Deserialize)]
struct History {
    #[serde(default)]
    edges: Vec<Option<HistoryEdge>>,
}

#[derive(Debug, Deserialize)]
struct HistoryEdge {
    node: Option<GhCommit>,
}

impl CommitHistoryData {
    pub fn into_commits(self) -> Vec<GhCommit> {
        self.repository
            .and_then(|r| r.default_branch_ref)
            .and_then(|r| r.target)
            .and_then(|t| t.history)
            .map(|h| h.edges.into_iter().flatten().filter_map(|e| e.node).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use commitclock_ghapi_interface::types::GhUser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, GitHubError> {
        serde_json::from_str::<GraphQlResponse<T>>(body)
            .unwrap()
            .into_result()
    }

    #[test]
    fn viewer_response() {
        let data: ViewerData =
            parse(r#"{ "data": { "viewer": { "login": "me", "id": "MDQ6VXNlcjE=" } } }"#)
                .unwrap();

        assert_eq!(
            data.viewer,
            GhViewer {
                login: "me".into(),
                id: "MDQ6VXNlcjE=".into()
            }
        );
    }

    #[test]
    fn errors_are_surfaced() {
        let result = parse::<ViewerData>(
            r#"{ "data": null, "errors": [{ "message": "Bad credentials" }] }"#,
        );

        match result {
            Err(GitHubError::GraphQlError { messages }) => {
                assert_eq!(messages, vec!["Bad credentials".to_string()])
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_an_error() {
        assert!(matches!(
            parse::<ViewerData>("{}"),
            Err(GitHubError::GraphQlError { .. })
        ));
    }

    #[test]
    fn contributed_repositories_response() {
        let data: ContributedRepositoriesData = parse(
            r#"{ "data": { "user": { "repositoriesContributedTo": { "nodes": [
                { "name": "first", "isFork": false, "owner": { "login": "me" } },
                null,
                { "name": "second", "isFork": true, "owner": { "login": "other" } }
            ] } } } }"#,
        )
        .unwrap();

        assert_eq!(
            data.into_repositories(),
            vec![
                GhRepository {
                    name: "first".into(),
                    is_fork: false,
                    owner: GhUser { login: "me".into() }
                },
                GhRepository {
                    name: "second".into(),
                    is_fork: true,
                    owner: GhUser {
                        login: "other".into()
                    }
                },
            ]
        );
    }

    #[test]
    fn commit_history_response() {
        let data: CommitHistoryData = parse(
            r#"{ "data": { "repository": { "defaultBranchRef": { "target": { "history": { "edges": [
                { "node": { "committedDate": "2021-01-01T10:00:00Z" } },
                { "node": { "committedDate": "2021-01-02T22:30:00Z" } }
            ] } } } } } }"#,
        )
        .unwrap();

        assert_eq!(
            data.into_commits(),
            vec![
                GhCommit {
                    committed_date: "2021-01-01T10:00:00Z".into()
                },
                GhCommit {
                    committed_date: "2021-01-02T22:30:00Z".into()
                },
            ]
        );
    }

    #[test]
    fn commit_history_without_default_branch() {
        let data: CommitHistoryData =
            parse(r#"{ "data": { "repository": { "defaultBranchRef": null } } }"#).unwrap();
        assert_eq!(data.into_commits(), vec![]);

        let data: CommitHistoryData =
            parse(r#"{ "data": { "repository": { "defaultBranchRef": { "target": {} } } } }"#)
                .unwrap();
        assert_eq!(data.into_commits(), vec![]);
    }
}
