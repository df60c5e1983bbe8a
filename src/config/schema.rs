use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// Default path: `~/.config/track-store/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACK_STORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Connection url. The scheme selects the backend: `mysql`, `mariadb` or `sqlite`.
    pub url: String,
    /// Upper bound on pooled connections.
    /// In-memory SQLite needs 1, every connection would see its own database otherwise.
    pub max_connections: u32,
    /// Create the `track_info` table on connect when it is missing.
    pub create_schema: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "mysql://root:@localhost:3306/tracks".to_string(),
            max_connections: 5,
            create_schema: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
