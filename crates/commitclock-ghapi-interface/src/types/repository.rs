use serde::{Deserialize, Serialize};

use super::GhUser;

/// GitHub Repository, as listed in user contributions.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// Is the repository a fork.
    pub is_fork: bool,
    /// Owner.
    pub owner: GhUser,
}
