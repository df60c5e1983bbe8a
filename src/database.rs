use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use tracing::{debug, info};

use crate::config::DatabaseSettings;
use crate::error::Result;
use crate::schema::{Backend, SELECT_ALL_TRACKS, SELECT_TRACK};
use crate::track::TrackInfo;
use crate::unit_of_work::UnitOfWork;
// Module Database owns the connection pool and hands out units of work

/// Handle to the backing store, opened once at startup and closed once at exit.
///
/// Clones share the same pool; closing one closes them all.
#[derive(Debug, Clone)]
pub struct Database {
    pool: AnyPool,
    backend: Backend,
}
impl Database {
    /// Connects with a single attempt. A failure is returned as is.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let backend = Backend::from_url(&settings.url)?;
        install_default_drivers();

        // keep connections alive for the whole run, an in-memory sqlite
        // database disappears with its last connection
        let pool = AnyPoolOptions::new()
            .max_connections(settings.max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&settings.url)
            .await?;
        info!(?backend, "connected to the database");

        let database = Self { pool, backend };
        if settings.create_schema {
            database.ensure_schema().await?;
        }
        Ok(database)
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(self.backend.create_track_table())
            .execute(&self.pool)
            .await?;
        debug!("track_info table is in place");
        Ok(())
    }

    /// Starts a transaction on a pooled connection.
    pub async fn begin(&self) -> Result<UnitOfWork> {
        let tx = self.pool.begin().await?;
        Ok(UnitOfWork::new(tx, self.backend))
    }

    pub async fn find_track(&self, id: i64) -> Result<Option<TrackInfo>> {
        let track = sqlx::query_as::<_, TrackInfo>(SELECT_TRACK)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(track)
    }

    pub async fn list_tracks(&self) -> Result<Vec<TrackInfo>> {
        let tracks = sqlx::query_as::<_, TrackInfo>(SELECT_ALL_TRACKS)
            .fetch_all(&self.pool)
            .await?;
        Ok(tracks)
    }

    /// Closes every pooled connection. Consumes the handle, so it runs once.
    pub async fn close(self) {
        self.pool.close().await;
        info!("database connections closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

#[cfg(test)]
impl Database {
    pub(crate) async fn open_in_memory() -> Self {
        let settings = DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            create_schema: true,
        };
        Self::connect(&settings)
            .await
            .expect("in-memory sqlite opens")
    }

    /// Installs a trigger that aborts inserts of tracks with the given name.
    pub(crate) async fn reject_track_name(&self, track_name: &str) {
        let trigger = format!(
            "CREATE TRIGGER reject_track BEFORE INSERT ON track_info \
             WHEN NEW.track_name = '{track_name}' \
             BEGIN SELECT RAISE(ABORT, 'track rejected'); END"
        );
        sqlx::query(&trigger)
            .execute(&self.pool)
            .await
            .expect("trigger installs");
    }
}
