use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application-level configuration shared by the API client, the shopping
/// list store, and the view-model utilities.
///
/// Tokens are deliberately absent: credentials live with the auth
/// collaborator and are only ever read through its provider interface.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the inventory backend, e.g. `https://api.example.com/v1`.
    pub api_base_url: String,
    pub env: Environment,
    pub log_level: String,
    /// Connect timeout for a single HTTP request, in seconds.
    pub request_timeout_secs: u64,
    /// Total time budget for a request including body transfer, in seconds.
    pub resource_timeout_secs: u64,
    /// Sent as the `X-Client` header and the user agent on every request.
    pub client_identifier: String,
    /// Location of the local shopping list file.
    pub lists_path: PathBuf,
    /// Quiet period before a search keystroke triggers a fetch.
    pub search_debounce_ms: u64,
}
