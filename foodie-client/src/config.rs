//! Client configuration

/// Client configuration for connecting to the backend API
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | BACKEND_BASE_URL | http://localhost:8080 | Backend origin |
/// | BACKEND_API_PREFIX | /api | Path prefix of every API route |
/// | BACKEND_TIMEOUT_SECS | 30 | Request timeout |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Prefix joined between the base URL and each resource path
    pub api_prefix: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_prefix: "/api".to_string(),
            timeout: 30,
        }
    }

    /// Load from environment variables, falling back to the defaults
    pub fn from_env() -> Self {
        let mut config =
            Self::new(std::env::var("BACKEND_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into()));
        if let Ok(prefix) = std::env::var("BACKEND_API_PREFIX") {
            config = config.with_api_prefix(prefix);
        }
        config.timeout = std::env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        config
    }

    /// Set the API prefix (`""` for none)
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = normalize_prefix(&prefix.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// `<base_url><api_prefix>`, the root every resource path hangs off
    pub fn api_base(&self) -> String {
        format!("{}{}", self.base_url, self.api_prefix)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
