use std::time::Duration;

/// Database name the service stores its collection in
pub const DEFAULT_DATABASE_NAME: &str = "go-hrms";
/// Connection string for the local document database
pub const DEFAULT_MONGO_URI: &str = "mongodb://127.0.0.1/go-hrms";
/// HTTP listener port
pub const DEFAULT_HTTP_PORT: u16 = 3000;
/// Upper bound for every storage operation, in milliseconds
pub const DEFAULT_OPERATION_TIMEOUT_MS: u64 = 10_000;
/// Collection holding employee documents
pub const EMPLOYEE_COLLECTION: &str = "employee";

/// Service configuration
///
/// # Environment variables
///
/// Every field has a built-in default; variables only override it:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | MONGO_URI | mongodb://127.0.0.1/go-hrms | Database connection string |
/// | DATABASE_NAME | go-hrms | Database holding the employee collection |
/// | HTTP_PORT | 3000 | HTTP listener port |
/// | OPERATION_TIMEOUT_MS | 10000 | Deadline per storage operation |
/// | LOG_LEVEL | info | Log level when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Write daily rolling log files here |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 MONGO_URI=mongodb://db:27017 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Document database connection string
    pub mongo_uri: String,
    /// Database name
    pub database_name: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deadline applied to the startup ping and to each storage call
    pub operation_timeout: Duration,
    /// Default log level
    pub log_level: String,
    /// Optional directory for log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|s| !s.is_empty());
        Self {
            mongo_uri: non_empty("MONGO_URI").unwrap_or(defaults.mongo_uri),
            database_name: non_empty("DATABASE_NAME").unwrap_or(defaults.database_name),
            http_port: non_empty("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            operation_timeout: non_empty("OPERATION_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .filter(|ms: &u64| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.operation_timeout),
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    /// Listener address
    pub fn bind_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.http_port))
    }

    /// Connection string with any password masked, for logs
    pub fn redacted_uri(&self) -> String {
        redact_credentials(&self.mongo_uri)
    }
}

impl Default for Config {
    /// The compiled-in settings, without consulting the environment
    fn default() -> Self {
        Self {
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            operation_timeout: Duration::from_millis(DEFAULT_OPERATION_TIMEOUT_MS),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

fn redact_credentials(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return uri.to_string();
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => {
            let user = rest[..at].split(':').next().unwrap_or_default();
            format!("{scheme}://{user}:***{}", &rest[at..])
        }
        None => uri.to_string(),
    }
}
