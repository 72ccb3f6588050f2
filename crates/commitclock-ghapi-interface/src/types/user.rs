use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
}

/// Authenticated user.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhViewer {
    /// Username.
    pub login: String,
    /// Opaque node ID, used to filter commit authors.
    pub id: String,
}
