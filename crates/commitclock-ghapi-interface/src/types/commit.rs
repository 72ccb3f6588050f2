use serde::{Deserialize, Serialize};

/// GitHub Commit, reduced to its commit date.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GhCommit {
    /// Raw RFC 3339 commit date.
    pub committed_date: String,
}
