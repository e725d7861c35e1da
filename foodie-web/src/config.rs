use foodie_client::ClientConfig;

/// Web shell configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | Listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default level when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | Also write daily-rolling log files here |
/// | SESSION_COOKIE | foodie_session | Name of the session cookie |
/// | SECURE_COOKIES | true in production | Add `Secure` to the session cookie |
/// | BACKEND_BASE_URL | http://localhost:8080 | See [`ClientConfig::from_env`] |
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub session_cookie: String,
    pub secure_cookies: bool,
    /// Backend API the page handlers talk to
    pub backend: ClientConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            session_cookie: "foodie_session".into(),
            secure_cookies: false,
            backend: ClientConfig::default(),
        }
    }
}

impl Config {
    /// Load from environment variables
    ///
    /// Unset variables keep their defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = std::env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment == "production";

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            session_cookie: std::env::var("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
            secure_cookies: std::env::var("SECURE_COOKIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(production),
            backend: ClientConfig::from_env(),
            environment,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
