use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Gist file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhGistFile {
    /// File name.
    pub filename: String,
    /// File content, absent when truncated by the API.
    #[serde(default)]
    pub content: Option<String>,
}

/// Gist.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhGist {
    /// Gist ID.
    pub id: String,
    /// Files, in the order returned by the API.
    #[serde(default)]
    pub files: IndexMap<String, GhGistFile>,
}

impl GhGist {
    /// Name of the first file in the gist.
    pub fn first_filename(&self) -> Option<&str> {
        self.files.keys().next().map(String::as_str)
    }
}
