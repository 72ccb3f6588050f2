//! Config module.

use std::env;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct GistConfig {
    /// Target gist ID.
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Gist options.
    pub gist: GistConfig,
    /// IANA timezone used to read commit hours, local timezone if unset.
    pub timezone: Option<String>,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("COMMITCLOCK_API_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("COMMITCLOCK_API_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("GH_TOKEN", ""),
                },
            },
            gist: GistConfig {
                id: env_to_str("GIST_ID", ""),
            },
            timezone: env_to_optional_str("TIMEZONE"),
            logging: LoggingConfig {
                use_bunyan: env_to_bool("COMMITCLOCK_LOGGING_USE_BUNYAN", false),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

fn env_to_optional_str(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
}
