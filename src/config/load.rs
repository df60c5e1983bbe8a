use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::{Result, StoreError};

impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TRACK_STORE")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(StoreError::InvalidSettings(
                "database.url must not be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(StoreError::InvalidSettings(
                "database.max_connections must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// `$TRACK_STORE_CONFIG_PATH` when set, otherwise `~/.config/track-store/config.toml`.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("TRACK_STORE_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(|| {
            env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config/track-store/config.toml"))
        })
}
