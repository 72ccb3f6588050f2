//! Logic errors.

use commitclock_ghapi_interface::ApiError;
use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unable to get username and id: {source}")]
    AuthError { source: ApiError },

    #[error("Unable to get the contributed repositories of '{username}': {source}")]
    DiscoveryError { username: String, source: ApiError },

    #[error("Unable to get the commit info: {source}")]
    HistoryFetchError { source: ApiError },

    #[error("Invalid commit timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Invalid hour of day: {hour}")]
    InvalidHour { hour: u32 },

    #[error("Unknown timezone: '{value}'")]
    InvalidTimezone { value: String },

    #[error("Unable to get gist '{gist_id}': {source}")]
    PublishReadError { gist_id: String, source: ApiError },

    #[error("Gist '{gist_id}' has no file to update")]
    EmptyGist { gist_id: String },

    #[error("Unable to update gist '{gist_id}': {source}")]
    PublishWriteError { gist_id: String, source: ApiError },
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
