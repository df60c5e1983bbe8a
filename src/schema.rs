use crate::error::{Result, StoreError};

pub const TRACK_TABLE: &str = "track_info";

/// Database flavours reachable through the sqlx `Any` driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    MySql,
    Sqlite,
}
impl Backend {
    /// Picks the backend from the scheme of a connection url.
    pub fn from_url(url: &str) -> Result<Self> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(StoreError::UnsupportedBackend(scheme.to_string())),
        }
    }

    pub fn create_track_table(&self) -> &'static str {
        match self {
            Self::MySql => {
                // TEXT comes back as a blob through the Any driver, VARCHAR as text
                r#"CREATE TABLE IF NOT EXISTS track_info (
                    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                    track_name VARCHAR(1024) NOT NULL,
                    file_location VARCHAR(1024) NOT NULL
                )"#
            }
            // AUTOINCREMENT keeps ids strictly increasing, even after deletes
            Self::Sqlite => {
                r#"CREATE TABLE IF NOT EXISTS track_info (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    track_name TEXT NOT NULL,
                    file_location TEXT NOT NULL
                )"#
            }
        }
    }

    /// Insert statement for one track.
    ///
    /// The Any driver only reports `last_insert_id` for MySQL, so on SQLite the
    /// generated id is read back through `RETURNING`.
    pub fn insert_track(&self) -> &'static str {
        match self {
            Self::MySql => "INSERT INTO track_info (track_name, file_location) VALUES (?, ?)",
            Self::Sqlite => {
                "INSERT INTO track_info (track_name, file_location) VALUES (?, ?) RETURNING id"
            }
        }
    }
}

pub(crate) const SELECT_TRACK: &str =
    "SELECT id, track_name, file_location FROM track_info WHERE id = ?";
pub(crate) const SELECT_ALL_TRACKS: &str =
    "SELECT id, track_name, file_location FROM track_info ORDER BY id";
