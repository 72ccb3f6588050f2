//! Validation utilities.

use std::fmt::Write;

use commitclock_config::Config;
use commitclock_core::buckets::parse_timezone;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config, requires_gist: bool) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, value: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ('{}')", name, value);
    }

    let mut error = String::new();

    if config.api.github.token.is_empty() {
        _missing(&mut error, "GH_TOKEN");
    }
    if config.api.github.root_url.is_empty() {
        _missing(&mut error, "COMMITCLOCK_API_ROOT_URL");
    }
    if requires_gist && config.gist.id.is_empty() {
        _missing(&mut error, "GIST_ID");
    }
    if let Some(timezone) = &config.timezone {
        if parse_timezone(timezone).is_err() {
            _invalid(&mut error, "TIMEZONE", timezone);
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config, requires_gist: bool) -> Result<(), ValidationError> {
    validate_env_vars(config, requires_gist)
}
