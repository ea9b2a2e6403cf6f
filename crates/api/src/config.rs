/// Which [`CatalogStore`](folio_catalog::CatalogStore) adapter the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogBackend {
    /// SQLite database at `DATABASE_URL`.
    Sql,
    /// Process memory; contents are lost on restart.
    Memory,
}

impl CatalogBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sql" | "sqlite" => Some(Self::Sql),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection URL (default: `sqlite://portfolio.db?mode=rwc`).
    pub database_url: String,
    /// Catalog storage adapter (default: `sql`).
    pub catalog_backend: CatalogBackend,
    /// Log output format (default: `pretty`).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `8080`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:8080`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `DATABASE_URL`         | `sqlite://portfolio.db?mode=rwc` |
    /// | `CATALOG_BACKEND`      | `sql` (`sql` or `memory`)        |
    /// | `LOG_FORMAT`           | `pretty` (`pretty` or `json`)    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:8080".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://portfolio.db?mode=rwc".into());

        let catalog_backend = match lookup("CATALOG_BACKEND") {
            Some(v) => CatalogBackend::parse(&v)
                .unwrap_or_else(|| panic!("CATALOG_BACKEND must be 'sql' or 'memory', got '{v}'")),
            None => CatalogBackend::Sql,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            catalog_backend,
            log_format,
        }
    }
}
