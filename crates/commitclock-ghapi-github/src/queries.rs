//! GraphQL query builders.

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

const VIEWER_QUERY: &str = r#"
query {
  viewer {
    login
    id
  }
}
"#;

const CONTRIBUTED_REPOSITORIES_QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    repositoriesContributedTo(last: 100, includeUserRepositories: true, contributionTypes: [COMMIT]) {
      nodes {
        name
        isFork
        owner {
          login
        }
      }
    }
  }
}
"#;

const COMMIT_HISTORY_QUERY: &str = r#"
query($owner: String!, $name: String!, $id: ID!) {
  repository(owner: $owner, name: $name) {
    defaultBranchRef {
      target {
        ... on Commit {
          history(first: 100, author: { id: $id }) {
            edges {
              node {
                committedDate
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query argument '{argument}' should not be empty")]
    EmptyArgument { argument: &'static str },
}

/// GraphQL request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphQlQuery {
    pub query: &'static str,
    pub variables: Value,
}

/// Authenticated user login and node ID.
pub fn viewer_query() -> GraphQlQuery {
    GraphQlQuery {
        query: VIEWER_QUERY,
        variables: json!({}),
    }
}

/// Repositories a user contributed commits to.
///
/// Forks are returned too, with their `isFork` flag.
pub fn contributed_repositories_query(username: &str) -> Result<GraphQlQuery, QueryError> {
    ensure_not_empty("username", username)?;

    Ok(GraphQlQuery {
        query: CONTRIBUTED_REPOSITORIES_QUERY,
        variables: json!({ "username": username }),
    })
}

/// Commit dates on the default branch of a repository, restricted to one author.
pub fn commit_history_query(
    user_id: &str,
    repo_name: &str,
    repo_owner: &str,
) -> Result<GraphQlQuery, QueryError> {
    ensure_not_empty("user_id", user_id)?;
    ensure_not_empty("repo_name", repo_name)?;
    ensure_not_empty("repo_owner", repo_owner)?;

    Ok(GraphQlQuery {
        query: COMMIT_HISTORY_QUERY,
        variables: json!({
            "owner": repo_owner,
            "name": repo_name,
            "id": user_id,
        }),
    })
}

fn ensure_not_empty(argument: &'static str, value: &str) -> Result<(), QueryError> {
    if value.trim().is_empty() {
        Err(QueryError::EmptyArgument { argument })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn viewer_query_has_no_variables() {
        let query = viewer_query();
        assert!(query.query.contains("viewer"));
        assert_eq!(query.variables, json!({}));
    }

    #[test]
    fn contributed_repositories_query_requests_fork_flag() {
        let query = contributed_repositories_query("me").unwrap();
        assert!(query.query.contains("repositoriesContributedTo"));
        assert!(query.query.contains("isFork"));
        assert_eq!(query.variables, json!({ "username": "me" }));
    }

    #[test]
    fn commit_history_query_filters_on_author() {
        let query = commit_history_query("MDQ6VXNlcjE=", "repo", "owner").unwrap();
        assert!(query.query.contains("author: { id: $id }"));
        assert_eq!(
            query.variables,
            json!({ "owner": "owner", "name": "repo", "id": "MDQ6VXNlcjE=" })
        );
    }

    #[test]
    fn empty_arguments_are_rejected() {
        assert_eq!(
            contributed_repositories_query(""),
            Err(QueryError::EmptyArgument {
                argument: "username"
            })
        );
        assert_eq!(
            commit_history_query("id", " ", "owner"),
            Err(QueryError::EmptyArgument {
                argument: "repo_name"
            })
        );
        assert_eq!(
            commit_history_query("id", "repo", ""),
            Err(QueryError::EmptyArgument {
                argument: "repo_owner"
            })
        );
    }

    #[test]
    fn query_serializes_as_request_body() {
        let body = serde_json::to_value(contributed_repositories_query("me").unwrap()).unwrap();
        assert_eq!(body["variables"]["username"], "me");
        assert!(body["query"].as_str().unwrap().contains("user(login: $username)"));
    }
}
