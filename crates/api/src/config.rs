use std::path::PathBuf;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (default).
    Text,
    /// One JSON object per event.
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running next to a local copy of
/// the catalog database.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4041`).
    pub port: u16,
    /// SQLite URL of the catalog store.
    pub database_url: String,
    /// Upper bound on pooled catalog connections (default: `5`).
    pub db_max_connections: u32,
    /// How long a request waits for a catalog connection (default: `5`).
    pub db_acquire_timeout_secs: u64,
    /// Icon served at `/favicon.ico`.
    pub favicon_path: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                          |
    /// |---------------------------|----------------------------------|
    /// | `HOST`                    | `0.0.0.0`                        |
    /// | `PORT`                    | `4041`                           |
    /// | `DATABASE_URL`            | `sqlite://Chinook_Sqlite.sqlite` |
    /// | `DB_MAX_CONNECTIONS`      | `5`                              |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                              |
    /// | `FAVICON_PATH`            | `./note.ico`                     |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                             |
    /// | `LOG_FORMAT`              | `text` (`json` to switch)        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4041".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://Chinook_Sqlite.sqlite".into());

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let db_acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        let favicon_path: PathBuf = std::env::var("FAVICON_PATH")
            .unwrap_or_else(|_| "./note.ico".into())
            .into();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            db_acquire_timeout_secs,
            favicon_path,
            request_timeout_secs,
            log_format,
        }
    }
}
